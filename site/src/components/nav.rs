use leptos::prelude::*;
use portfolio::config::SectionId;
use portfolio::menu::MobileMenu;

use super::{ICON_LIST, Icon};

/// Sticky navigation bar with a collapsible menu for small viewports.
#[component]
pub fn Nav(#[prop(into)] brand: String) -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::new());

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href=SectionId::Home.href() class="nav-brand">{brand}</a>
                <div class="nav-links">
                    {SectionId::NAV
                        .into_iter()
                        .map(|section| {
                            view! { <a href=section.href() class="nav-link">{section.label()}</a> }
                        })
                        .collect_view()}
                </div>
                <button
                    class="nav-menu-btn"
                    aria-label="Menu"
                    aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    <Icon path=ICON_LIST />
                </button>
            </div>

            // Mobile menu; any link closes it
            <Show when=move || menu.get().is_open()>
                <div class="nav-drawer">
                    {SectionId::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="nav-link"
                                    on:click=move |_| menu.update(|m| m.link_activated())
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
