// Portfolio page, browser build.
//
// Content is compiled in from content/site.toml; the page itself lives in
// portfolio-site, this crate only supplies the live intro and mounts it.

mod intro;
mod logging;

use std::sync::Arc;

use leptos::prelude::*;
use portfolio::SiteConfig;
use portfolio_site::components::PortfolioPage;
use portfolio_site::styles::PORTFOLIO_CSS;

const SITE_CONTENT: &str = include_str!("../../content/site.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let page = match SiteConfig::from_toml_str(SITE_CONTENT) {
        Ok(site) => view! { <Portfolio site=Arc::new(site) /> }.into_any(),
        Err(err) => {
            tracing::error!(error = %err, "site content rejected");
            view! {
                <div class="load-error" role="alert">
                    <h1>"This page could not be loaded"</h1>
                    <p>{err.to_string()}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <style>{PORTFOLIO_CSS}</style>
        {page}
    }
}

#[component]
fn Portfolio(site: Arc<SiteConfig>) -> impl IntoView {
    let ready = RwSignal::new(false);
    let intro = intro::use_intro(&site.intro, ready);
    let year = js_sys::Date::new_0().get_full_year() as i32;

    view! { <PortfolioPage site=site intro=intro ready=ready year=year /> }
}
