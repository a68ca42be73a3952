use leptos::prelude::*;
use portfolio::config::{IconKind, SectionId, Skills};

use super::{Card, Section, TagList};

/// One card per skill group.
#[component]
pub fn SkillsSection(skills: Skills) -> impl IntoView {
    view! {
        <Section id=SectionId::Skills icon=IconKind::FolderGit>
            <div class="grid grid-3">
                {skills
                    .groups()
                    .into_iter()
                    .map(|(heading, tags)| {
                        let tags = tags.to_vec();
                        view! {
                            <Card>
                                <h3 class="card-heading">{heading}</h3>
                                <TagList tags=tags />
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
