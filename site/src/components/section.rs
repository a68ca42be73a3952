//! Layout primitives shared by every content section.

use leptos::prelude::*;
use portfolio::config::{IconKind, SectionId};

use super::KindIcon;

/// Anchored page section with an icon and a heading.
#[component]
pub fn Section(id: SectionId, icon: IconKind, children: Children) -> impl IntoView {
    let title_id = format!("{}-title", id.anchor());
    let labelled_by = title_id.clone();

    view! {
        <section id=id.anchor() class="section" aria-labelledby=labelled_by>
            <div class="container">
                <div class="section-header">
                    <div class="section-icon">
                        <KindIcon kind=icon size="24" />
                    </div>
                    <h2 id=title_id class="section-title">{id.label()}</h2>
                </div>
                {children()}
            </div>
        </section>
    }
}

/// Bordered content card.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

/// Small pill label.
#[component]
pub fn Tag(#[prop(into)] label: String) -> impl IntoView {
    view! { <span class="tag">{label}</span> }
}

/// Wrapping row of tags.
#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags.into_iter().map(|t| view! { <Tag label=t /> }).collect_view()}
        </div>
    }
}
