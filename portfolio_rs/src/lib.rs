//! # portfolio
//!
//! Core model of a single-page portfolio site, independent of any UI
//! framework:
//!
//! - [`config`] - immutable site content loaded once from TOML
//! - [`intro`] - the one-way hero intro phase sequencer
//! - [`typewriter`] - restartable prefix sequencer behind the typing effect
//! - [`menu`] - mobile navigation menu toggle
//! - [`contact`] - contact form state and delegation to a hosted mail service
//!
//! Rendering lives in `portfolio-site`; the browser driver that wires timers
//! and animation events to these types lives in `portfolio-landing`.
//!
//! ```rust
//! use portfolio::intro::{IntroEvent, IntroPhase, IntroSequencer};
//!
//! let mut intro = IntroSequencer::new();
//! intro.handle(IntroEvent::TextFullyTyped);
//! intro.handle(IntroEvent::OutgoingAnimationComplete);
//! intro.handle(IntroEvent::IncomingAnimationComplete);
//! assert_eq!(intro.phase(), IntroPhase::Ready);
//! ```

pub mod config;
pub mod contact;
pub mod intro;
pub mod menu;
pub mod typewriter;

pub use config::{ConfigError, SectionId, SiteConfig};
pub use contact::{ContactForm, ContactStatus, EmailJsClient, MessageDelivery};
pub use intro::{IntroEvent, IntroPhase, IntroSequencer};
pub use menu::MobileMenu;
pub use typewriter::{Tick, Typewriter};
