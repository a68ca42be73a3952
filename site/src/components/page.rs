//! Page shell: everything except the hero waits for the intro to finish.

use std::sync::Arc;

use leptos::prelude::*;
use portfolio::config::{SectionId, SiteConfig};

use super::{
    AboutSection, AchievementsSection, ContactSection, EducationSection, ExperienceSection, Footer,
    Hero, IntroView, Nav, ProjectsSection, SkillsSection,
};

/// The whole single-page site.
///
/// `ready` is the page's own flag, raised once by whoever drives the intro;
/// the hero keeps its finer-grained phase in `intro`.
#[component]
pub fn PortfolioPage(
    site: Arc<SiteConfig>,
    intro: IntroView,
    #[prop(into)] ready: Signal<bool>,
    year: i32,
) -> impl IntoView {
    let phase = intro.phase;
    let ready = move || ready.get();

    let brand = site.profile.name.clone();
    let footer_name = site.profile.name.clone();
    let content = site.clone();

    view! {
        <div class="page" data-phase=move || phase.get().as_str()>
            <a href=SectionId::Home.href() class="skip-link">"Skip to content"</a>

            // Nav appears only after the intro
            <Show when=ready>
                <Nav brand=brand.clone() />
            </Show>

            <main>
                <Hero site=site.clone() intro=intro />

                <Show when=ready>
                    <div class="reveal">
                        <AboutSection about=content.profile.about.clone() />
                        <SkillsSection skills=content.skills.clone() />
                        <ExperienceSection entries=content.experience.clone() />
                        <ProjectsSection projects=content.projects.clone() />
                        <EducationSection entries=content.education.clone() />
                        <AchievementsSection items=content.achievements.clone() />
                        <ContactSection settings=content.contact.clone() />
                    </div>
                </Show>
            </main>

            <Show when=ready>
                <Footer name=footer_name.clone() year=year />
            </Show>
        </div>
    }
}
