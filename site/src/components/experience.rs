use leptos::prelude::*;
use portfolio::config::{Experience, IconKind, SectionId};

use super::{Card, KindIcon, Section};

#[component]
pub fn ExperienceSection(entries: Vec<Experience>) -> impl IntoView {
    view! {
        <Section id=SectionId::Experience icon=IconKind::ShieldCheck>
            <div class="grid">
                {entries
                    .into_iter()
                    .map(|exp| {
                        view! {
                            <Card>
                                <div class="card-row">
                                    <div>
                                        <h3 class="card-title">
                                            <KindIcon kind=exp.icon />
                                            {exp.title}
                                        </h3>
                                        <p class="muted">{exp.org}</p>
                                    </div>
                                    <div class="period">{exp.period}</div>
                                </div>
                                <ul class="bullets">
                                    {exp.bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                                </ul>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
