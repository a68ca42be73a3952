use leptos::prelude::*;
use portfolio::config::{IconKind, SectionId};

use super::{Card, Section};

#[component]
pub fn AboutSection(#[prop(into)] about: String) -> impl IntoView {
    view! {
        <Section id=SectionId::About icon=IconKind::Cpu>
            <Card>
                <p class="about-text">{about}</p>
            </Card>
        </Section>
    }
}
