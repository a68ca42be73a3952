//! Drives the hero intro with browser timers.
//!
//! The typewriter ticks on an interval until the greeting is complete, then a
//! settle timeout reports `TextFullyTyped`. The two animation events come back
//! from the hero through [`IntroView`] callbacks. When the owning component is
//! torn down every timer is cleared and the sequencer stops accepting events,
//! so anything still in flight lands as a no-op.

use std::time::Duration;

use leptos::prelude::*;
use portfolio::config::IntroSettings;
use portfolio::{IntroEvent, IntroPhase, IntroSequencer, Tick, Typewriter};
use portfolio_site::components::IntroView;

/// Wire the intro for the current component. `ready` is raised exactly once,
/// when the sequencer reaches its final phase.
pub fn use_intro(settings: &IntroSettings, ready: RwSignal<bool>) -> IntroView {
    let timing = settings.timing();

    let typewriter = RwSignal::new(Typewriter::idle(
        settings.greeting.clone(),
        timing.type_interval,
    ));
    let sequencer = RwSignal::new(IntroSequencer::with_on_ready(move || {
        tracing::info!("intro finished, revealing page");
        ready.try_set(true);
    }));

    let settle_timer = StoredValue::new(None::<TimeoutHandle>);
    let on_typed = Callback::new(move |_: ()| {
        let fire = move || dispatch(sequencer, IntroEvent::TextFullyTyped);
        match set_timeout_with_handle(fire, timing.settle) {
            Ok(handle) => {
                settle_timer.try_set_value(Some(handle));
            }
            Err(err) => tracing::warn!(?err, "settle timer unavailable"),
        }
    });

    let task = TypewriterTask {
        typewriter,
        ticker: StoredValue::new(None),
        on_complete: on_typed,
    };
    task.start(&settings.greeting, timing.type_interval);

    on_cleanup(move || {
        task.cancel();
        if let Some(Some(handle)) = settle_timer.try_update_value(Option::take) {
            handle.clear();
        }
        sequencer.try_update(IntroSequencer::teardown);
    });

    let phase = Signal::derive(move || sequencer.with(IntroSequencer::phase));
    IntroView {
        phase,
        typed: Signal::derive(move || typewriter.with(|tw| tw.output().to_owned())),
        cursor: Signal::derive(move || {
            phase.get() == IntroPhase::Typing && !typewriter.with(Typewriter::is_done)
        }),
        on_text_exit: Callback::new(move |_| {
            dispatch(sequencer, IntroEvent::OutgoingAnimationComplete)
        }),
        on_image_enter: Callback::new(move |_| {
            dispatch(sequencer, IntroEvent::IncomingAnimationComplete)
        }),
    }
}

fn dispatch(sequencer: RwSignal<IntroSequencer>, event: IntroEvent) {
    sequencer.try_update(|seq| seq.handle(event));
}

/// Interval-backed typewriter. Ticks from a replaced run carry an old
/// generation and are dropped.
#[derive(Clone, Copy)]
struct TypewriterTask {
    typewriter: RwSignal<Typewriter>,
    ticker: StoredValue<Option<IntervalHandle>>,
    on_complete: Callback<()>,
}

impl TypewriterTask {
    fn start(self, target: &str, interval: Duration) {
        let Some(restarted) = self
            .typewriter
            .try_update(|tw| tw.configure(target, interval, true))
        else {
            return;
        };
        let running = self.ticker.try_with_value(Option::is_some).unwrap_or(false);
        if !restarted && running {
            return;
        }

        self.cancel();
        let Some(generation) = self.typewriter.try_with_untracked(Typewriter::generation) else {
            return;
        };
        match set_interval_with_handle(move || self.tick(generation), interval) {
            Ok(handle) => {
                self.ticker.try_set_value(Some(handle));
            }
            Err(err) => tracing::warn!(?err, "typewriter timer unavailable"),
        }
    }

    fn tick(self, generation: u64) {
        let step = self.typewriter.try_update(|tw| tw.tick_for(generation));

        match step {
            Some(Some(Tick::Advanced)) => {}
            Some(Some(Tick::Completed)) => {
                self.cancel();
                tracing::debug!("greeting typed");
                self.on_complete.run(());
            }
            Some(Some(Tick::Idle)) => self.cancel(),
            // stale run or disposed owner; the current timer is not ours to stop
            Some(None) | None => {}
        }
    }

    fn cancel(self) {
        if let Some(Some(handle)) = self.ticker.try_update_value(Option::take) {
            handle.clear();
        }
    }
}
