use leptos::prelude::*;
use portfolio::config::{IconKind, Project, SectionId};

use super::{Card, KindIcon, Section, TagList};

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
    view! {
        <Section id=SectionId::Projects icon=IconKind::FolderGit>
            <div class="grid grid-3">
                {projects.into_iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        period,
        summary,
        tags,
        links,
    } = project;

    // Link row only when there is something to link to
    let links_view = (!links.is_empty()).then(|| {
        view! {
            <div class="project-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a href=link.href target="_blank" rel="noreferrer" class="project-link">
                                <KindIcon kind=IconKind::ExternalLink size="16" />
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <Card>
            <h3 class="card-title">{title}</h3>
            <div class="period">{period}</div>
            <p class="summary">{summary}</p>
            <TagList tags=tags />
            {links_view}
        </Card>
    }
}
