//! Leptos components of the portfolio page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument (static export only)
//! └── PortfolioPage
//!     ├── Nav                      (once ready)
//!     ├── Hero                     (always; renders the intro phase)
//!     ├── AboutSection ... ContactSection  (once ready)
//!     └── Footer                   (once ready)
//! ```
//!
//! Sections are built from [`Section`], [`Card`] and [`Tag`], and take only
//! the slice of [`SiteConfig`](portfolio::SiteConfig) they display.

mod about;
mod achievements;
mod contact;
mod document;
mod education;
mod experience;
mod footer;
mod hero;
mod icons;
mod nav;
mod page;
mod projects;
mod section;
mod skills;

pub use about::AboutSection;
pub use achievements::AchievementsSection;
pub use contact::ContactSection;
pub use document::PortfolioDocument;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::{Hero, IMAGE_ENTER_ANIMATION, IntroView, TEXT_EXIT_ANIMATION};
pub use icons::*;
pub use nav::Nav;
pub use page::PortfolioPage;
pub use projects::ProjectsSection;
pub use section::{Card, Section, Tag, TagList};
pub use skills::SkillsSection;
