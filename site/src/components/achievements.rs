use leptos::prelude::*;
use portfolio::config::{IconKind, SectionId};

use super::{Card, Section};

#[component]
pub fn AchievementsSection(items: Vec<String>) -> impl IntoView {
    view! {
        <Section id=SectionId::Achievements icon=IconKind::Award>
            <div class="grid">
                {items
                    .into_iter()
                    .map(|item| view! { <Card><p>{item}</p></Card> })
                    .collect_view()}
            </div>
        </Section>
    }
}
