//! Hero intro phase sequencer.
//!
//! The landing animation runs once per page view and only moves forward:
//!
//! ```text
//! Typing --TextFullyTyped--> ZoomText --OutgoingAnimationComplete--> ShowImage
//!        --IncomingAnimationComplete--> Ready (terminal)
//! ```
//!
//! The sequencer knows nothing about timers or animation engines. A driver
//! feeds it [`IntroEvent`]s (the settle delay after typing is the driver's
//! timer) and reads back the [`IntroPhase`]. The page shell only cares about
//! [`IntroPhase::Ready`], reported once through the ready hook.

use std::fmt;
use std::time::Duration;

/// Milliseconds between revealed characters of the greeting.
pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 70;

/// Pause between the last typed character and the zoom-out.
pub const DEFAULT_SETTLE_MS: u64 = 300;

/// Phase of the landing animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntroPhase {
    /// Greeting is being typed out.
    #[default]
    Typing,
    /// Greeting zooms out and fades.
    ZoomText,
    /// Profile image zooms in.
    ShowImage,
    /// Intro finished; the rest of the page may be revealed.
    Ready,
}

impl IntroPhase {
    /// All phases in the order they are visited.
    pub const ALL: [IntroPhase; 4] = [
        IntroPhase::Typing,
        IntroPhase::ZoomText,
        IntroPhase::ShowImage,
        IntroPhase::Ready,
    ];

    /// The phase that follows this one; `Ready` absorbs.
    pub fn next(self) -> IntroPhase {
        match self {
            IntroPhase::Typing => IntroPhase::ZoomText,
            IntroPhase::ZoomText => IntroPhase::ShowImage,
            IntroPhase::ShowImage | IntroPhase::Ready => IntroPhase::Ready,
        }
    }

    /// `true` only for `Ready`.
    pub fn is_terminal(self) -> bool {
        self == IntroPhase::Ready
    }

    /// The event that moves this phase forward, if any.
    pub fn trigger(self) -> Option<IntroEvent> {
        match self {
            IntroPhase::Typing => Some(IntroEvent::TextFullyTyped),
            IntroPhase::ZoomText => Some(IntroEvent::OutgoingAnimationComplete),
            IntroPhase::ShowImage => Some(IntroEvent::IncomingAnimationComplete),
            IntroPhase::Ready => None,
        }
    }

    /// Stable lowercase name, used as a CSS/data attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            IntroPhase::Typing => "typing",
            IntroPhase::ZoomText => "zoom-text",
            IntroPhase::ShowImage => "show-image",
            IntroPhase::Ready => "ready",
        }
    }
}

impl fmt::Display for IntroPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signals that drive the sequencer forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntroEvent {
    /// Greeting fully revealed and the settle delay has elapsed.
    TextFullyTyped,
    /// The greeting's exit animation finished.
    OutgoingAnimationComplete,
    /// The profile image's entrance animation finished.
    IncomingAnimationComplete,
}

/// A single phase change reported by [`IntroSequencer::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Phase before the event.
    pub from: IntroPhase,
    /// Phase after the event.
    pub to: IntroPhase,
}

/// Timer settings for the intro driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroTiming {
    /// Delay between typed characters.
    pub type_interval: Duration,
    /// Delay between full greeting and the zoom-out.
    pub settle: Duration,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(DEFAULT_TYPE_INTERVAL_MS),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
        }
    }
}

type ReadyHook = Box<dyn FnOnce() + Send + Sync + 'static>;

/// One-way state machine behind the hero intro.
pub struct IntroSequencer {
    phase: IntroPhase,
    torn_down: bool,
    on_ready: Option<ReadyHook>,
}

impl IntroSequencer {
    /// A sequencer in `Typing` with no ready hook.
    pub fn new() -> Self {
        Self {
            phase: IntroPhase::Typing,
            torn_down: false,
            on_ready: None,
        }
    }

    /// A sequencer that calls `hook` once, when it enters `Ready`.
    pub fn with_on_ready(hook: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            on_ready: Some(Box::new(hook)),
            ..Self::new()
        }
    }

    /// Current phase.
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Whether the intro has finished.
    pub fn is_ready(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Whether [`teardown`](Self::teardown) has been called.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Apply one event. Returns the transition it caused, or `None` when the
    /// event does not match the current phase, the intro is already `Ready`,
    /// or the sequencer was torn down.
    pub fn handle(&mut self, event: IntroEvent) -> Option<Transition> {
        if self.torn_down {
            tracing::trace!(?event, "intro event after teardown ignored");
            return None;
        }
        if self.phase.trigger() != Some(event) {
            tracing::trace!(phase = %self.phase, ?event, "intro event ignored");
            return None;
        }

        let from = self.phase;
        let to = from.next();
        self.phase = to;
        tracing::debug!(%from, %to, "intro phase advanced");

        if to.is_terminal() {
            if let Some(hook) = self.on_ready.take() {
                hook();
            }
        }
        Some(Transition { from, to })
    }

    /// Release the sequencer: later events are no-ops and a pending ready
    /// hook is dropped unfired.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            tracing::debug!(phase = %self.phase, "intro torn down");
        }
        self.torn_down = true;
        self.on_ready = None;
    }
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntroSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntroSequencer")
            .field("phase", &self.phase)
            .field("torn_down", &self.torn_down)
            .field("ready_hook_pending", &self.on_ready.is_some())
            .finish()
    }
}
