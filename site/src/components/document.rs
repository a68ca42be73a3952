//! Root document component - the complete HTML page

use std::sync::Arc;

use leptos::prelude::*;
use portfolio::config::SiteConfig;

use super::{IntroView, PortfolioPage};
use crate::styles::PORTFOLIO_CSS;

/// Full HTML document around [`PortfolioPage`], with styles inlined.
#[component]
pub fn PortfolioDocument(
    site: Arc<SiteConfig>,
    intro: IntroView,
    #[prop(into)] ready: Signal<bool>,
    year: i32,
) -> impl IntoView {
    let title = if site.profile.role.is_empty() {
        site.profile.name.clone()
    } else {
        format!("{} | {}", site.profile.name, site.profile.role)
    };
    let description = site.profile.about.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{PORTFOLIO_CSS}</style>
            </head>
            <body>
                <PortfolioPage site=site intro=intro ready=ready year=year />
            </body>
        </html>
    }
}
