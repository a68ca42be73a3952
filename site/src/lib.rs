//! # portfolio-site
//!
//! Leptos components for the single-page portfolio, plus static rendering.
//!
//! The same components serve two builds:
//!
//! - **Browser** (`csr` feature) - mounted by `portfolio-landing`, which
//!   drives the intro with real timers and animation events.
//! - **Static** (`ssr` feature, default) - [`render_page`] and
//!   [`render_document`] produce HTML strings; the `prerender` binary writes
//!   a no-JavaScript fallback page with the intro already finished.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::{IntroPhase, SiteConfig};
//! use portfolio_site::render_page;
//!
//! let site = SiteConfig::from_toml_str(r#"
//! [profile]
//! name = "Ada Example"
//! [contact]
//! service_id = "s"
//! template_id = "t"
//! public_key = "k"
//! "#).unwrap();
//!
//! let html = render_page(&site, IntroPhase::Ready, 2026);
//! assert!(html.contains(r#"id="contact""#));
//! ```
//!
//! ## Modules
//!
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

pub mod components;
pub mod styles;

use std::sync::Arc;

use components::{IntroView, PortfolioDocument, PortfolioPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use portfolio::{IntroPhase, SiteConfig};

/// Render the page body as it looks in `phase`.
///
/// The greeting is empty while typing and complete afterwards.
pub fn render_page(site: &SiteConfig, phase: IntroPhase, year: i32) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let typed = match phase {
            IntroPhase::Typing => String::new(),
            _ => site.intro.greeting.clone(),
        };
        let site = Arc::new(site.clone());
        let intro = IntroView::fixed(phase, typed);
        let ready = Signal::derive(move || phase.is_terminal());

        view! { <PortfolioPage site=site intro=intro ready=ready year=year /> }.to_html()
    })
}

/// Render a complete HTML document with the intro already finished.
pub fn render_document(site: &SiteConfig, year: i32) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let intro = IntroView::settled(site.intro.greeting.clone());
        let site = Arc::new(site.clone());

        view! { <PortfolioDocument site=site intro=intro ready=true year=year /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig::from_toml_str(
            r#"
achievements = ["Ran a webinar"]

[profile]
name = "Ada Example"
role = "Student"
location = "Shimla"
about = "Builds things."

[[socials]]
label = "GitHub"
href = "https://github.com/example"
icon = "github"

[skills]
languages = ["Rust", "Python"]

[[projects]]
title = "Chatbot"
summary = "Small CLI bot."
tags = ["CLI"]

[[projects]]
title = "Linked project"
[[projects.links]]
label = "Source"
href = "https://example.com/src"

[contact]
service_id = "s"
template_id = "t"
public_key = "k"
"#,
        )
        .expect("test content")
    }

    #[test]
    fn document_has_doctype_and_styles() {
        let html = render_document(&site(), 2026);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("zoom-image-in"));
        assert!(html.contains("Ada Example | Student"));
    }

    #[test]
    fn ready_page_renders_content() {
        let html = render_page(&site(), IntroPhase::Ready, 2026);

        assert!(html.contains("Builds things."));
        assert!(html.contains("Rust"));
        assert!(html.contains("Ran a webinar"));
        assert!(html.contains("https://github.com/example"));
        assert!(html.contains("2026"));
        assert!(html.contains(r#"data-phase="ready""#));
    }

    #[test]
    fn project_links_only_when_present() {
        let html = render_page(&site(), IntroPhase::Ready, 2026);

        assert_eq!(html.matches(r#"class="project-links""#).count(), 1);
        assert!(html.contains("https://example.com/src"));
    }

    #[test]
    fn typing_page_shows_empty_greeting_and_cursor() {
        let html = render_page(&site(), IntroPhase::Typing, 2026);

        assert!(html.contains(r#"class="hero-text""#));
        assert!(!html.contains("{ hello world }"));
        assert!(!html.contains("hero-portrait"));
    }

    #[test]
    fn zoom_phase_marks_text_for_exit_animation() {
        let html = render_page(&site(), IntroPhase::ZoomText, 2026);

        assert!(html.contains("hero-text zoom-out"));
        assert!(html.contains("{ hello world }"));
    }

    #[test]
    fn image_phase_swaps_text_for_portrait() {
        let html = render_page(&site(), IntroPhase::ShowImage, 2026);

        assert!(html.contains("hero-portrait"));
        assert!(html.contains(r#"src="/my.gif""#));
        assert!(!html.contains("hero-text"));
        assert!(!html.contains("hero-details"));
    }
}
