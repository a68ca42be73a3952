//! Landing hero: typed greeting, zoom transition, profile image.
//!
//! The hero only renders the phase it is given. Whoever owns the
//! [`IntroSequencer`](portfolio::intro::IntroSequencer) passes the phase in
//! and receives the two animation-completion callbacks back.

use std::sync::Arc;

use leptos::prelude::*;
use portfolio::config::{IconKind, SectionId, SiteConfig};
use portfolio::intro::IntroPhase;

use super::KindIcon;

/// CSS animation played by the greeting when it leaves.
pub const TEXT_EXIT_ANIMATION: &str = "zoom-text-out";
/// CSS animation played by the profile image when it arrives.
pub const IMAGE_ENTER_ANIMATION: &str = "zoom-image-in";

/// Reactive inputs and completion callbacks of the hero intro.
#[derive(Clone, Copy)]
pub struct IntroView {
    pub phase: Signal<IntroPhase>,
    /// Currently typed prefix of the greeting.
    pub typed: Signal<String>,
    /// Whether the typing cursor is visible.
    pub cursor: Signal<bool>,
    /// Greeting exit animation finished.
    pub on_text_exit: Callback<()>,
    /// Image entrance animation finished.
    pub on_image_enter: Callback<()>,
}

impl IntroView {
    /// A frozen intro, for static rendering.
    pub fn fixed(phase: IntroPhase, typed: String) -> Self {
        Self {
            phase: Signal::derive(move || phase),
            typed: Signal::derive(move || typed.clone()),
            cursor: Signal::derive(move || phase == IntroPhase::Typing),
            on_text_exit: Callback::new(|_: ()| {}),
            on_image_enter: Callback::new(|_: ()| {}),
        }
    }

    /// The intro as it looks once finished.
    pub fn settled(greeting: String) -> Self {
        Self::fixed(IntroPhase::Ready, greeting)
    }
}

#[component]
pub fn Hero(site: Arc<SiteConfig>, intro: IntroView) -> impl IntoView {
    let IntroView {
        phase,
        typed,
        cursor,
        on_text_exit,
        on_image_enter,
    } = intro;

    let image = site.profile.profile_image.clone();
    let alt = format!("Animated portrait of {}", site.profile.name);

    view! {
        <div id=SectionId::Home.anchor() class="hero" data-phase=move || phase.get().as_str()>
            <div class="hero-grid" aria-hidden="true"></div>

            <Show when=move || matches!(phase.get(), IntroPhase::Typing | IntroPhase::ZoomText)>
                <h1
                    class=move || {
                        if phase.get() == IntroPhase::ZoomText { "hero-text zoom-out" } else { "hero-text" }
                    }
                    on:animationend=move |ev| {
                        if ev.animation_name() == TEXT_EXIT_ANIMATION {
                            on_text_exit.run(());
                        }
                    }
                >
                    <span>{move || typed.get()}</span>
                    <span
                        class="cursor"
                        aria-hidden="true"
                        style:opacity=move || if cursor.get() { "1" } else { "0" }
                    ></span>
                </h1>
            </Show>

            <Show when=move || matches!(phase.get(), IntroPhase::ShowImage | IntroPhase::Ready)>
                <div
                    class="hero-image"
                    on:animationend=move |ev| {
                        if ev.animation_name() == IMAGE_ENTER_ANIMATION {
                            on_image_enter.run(());
                        }
                    }
                >
                    <div class="hero-portrait">
                        <img src=image.clone() alt=alt.clone() draggable="false" />
                    </div>
                </div>
            </Show>

            <Show when=move || phase.get().is_terminal()>
                <HeroDetails site=site.clone() />
            </Show>
        </div>
    }
}

/// Role, location and outbound links, shown once the intro is done.
#[component]
fn HeroDetails(site: Arc<SiteConfig>) -> impl IntoView {
    let profile = &site.profile;

    view! {
        <div class="hero-details">
            <h2 class="hero-role">{profile.role.clone()}</h2>
            <p class="hero-location">{profile.location.clone()}</p>
            <div class="hero-links">
                {site
                    .socials
                    .iter()
                    .map(|social| {
                        view! {
                            <a href=social.href.clone() target="_blank" rel="noreferrer" class="pill-link">
                                <KindIcon kind=social.icon size="16" />
                                {social.label.clone()}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href=SectionId::Contact.href() class="pill-link">
                    <KindIcon kind=IconKind::Mail size="16" />
                    "Contact"
                </a>
                <a href=profile.resume_url.clone() target="_blank" rel="noopener noreferrer" class="pill-link">
                    <KindIcon kind=IconKind::Download size="16" />
                    "Resume"
                </a>
            </div>
        </div>
    }
}
