use leptos::prelude::*;
use portfolio::config::{Education, IconKind, SectionId};

use super::{Card, Section};

#[component]
pub fn EducationSection(entries: Vec<Education>) -> impl IntoView {
    view! {
        <Section id=SectionId::Education icon=IconKind::GraduationCap>
            <div class="grid grid-2">
                {entries
                    .into_iter()
                    .map(|e| {
                        view! {
                            <Card>
                                <h3 class="card-title">{e.school}</h3>
                                <div class="muted">{e.location}</div>
                                <div class="credential">{e.credential}</div>
                                <div class="period">{e.period}</div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
