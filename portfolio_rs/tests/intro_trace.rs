//! Whole-intro behaviour: typewriter feeding the phase sequencer, and the
//! phase trace under every short event sequence.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use portfolio::intro::{IntroEvent, IntroPhase, IntroSequencer};
use portfolio::{Tick, Typewriter};

const EVENTS: [IntroEvent; 3] = [
    IntroEvent::TextFullyTyped,
    IntroEvent::OutgoingAnimationComplete,
    IntroEvent::IncomingAnimationComplete,
];

/// Every event sequence of length `len` over the three events.
fn sequences(len: usize) -> Vec<Vec<IntroEvent>> {
    (0..len).fold(vec![Vec::new()], |acc, _| {
        acc.into_iter()
            .flat_map(|prefix| {
                EVENTS.iter().map(move |event| {
                    let mut next = prefix.clone();
                    next.push(*event);
                    next
                })
            })
            .collect()
    })
}

#[test]
fn trace_is_always_a_prefix_of_the_phase_order() {
    for len in 0..=6 {
        for events in sequences(len) {
            let ready_hits = Arc::new(AtomicUsize::new(0));
            let hits = ready_hits.clone();
            let mut seq = IntroSequencer::with_on_ready(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });

            let mut trace = vec![seq.phase()];
            for event in &events {
                let before = seq.phase();
                if let Some(step) = seq.handle(*event) {
                    assert_eq!(step.from, before);
                    assert_eq!(step.to, before.next());
                    trace.push(step.to);
                }
            }

            assert!(
                IntroPhase::ALL.starts_with(&trace),
                "trace {trace:?} for {events:?}"
            );
            let expected_hits = usize::from(seq.is_ready());
            assert_eq!(ready_hits.load(Ordering::SeqCst), expected_hits);
        }
    }
}

#[test]
fn typed_greeting_drives_the_intro_to_ready() {
    let mut typewriter = Typewriter::new("{ hello world }", Duration::from_millis(70));
    let mut seq = IntroSequencer::new();
    let mut completions = 0;

    while !typewriter.is_done() {
        if typewriter.tick() == Tick::Completed {
            completions += 1;
            // settle delay elapses in the driver, then:
            seq.handle(IntroEvent::TextFullyTyped);
        }
        assert!(seq.phase() <= IntroPhase::ZoomText);
    }
    assert_eq!(completions, 1);
    assert_eq!(seq.phase(), IntroPhase::ZoomText);

    seq.handle(IntroEvent::OutgoingAnimationComplete);
    seq.handle(IntroEvent::IncomingAnimationComplete);
    assert!(seq.is_ready());
}

#[test]
fn restarted_typewriter_does_not_retrigger_a_finished_intro() {
    let mut typewriter = Typewriter::new("ab", Duration::from_millis(70));
    let mut seq = IntroSequencer::new();
    for event in EVENTS {
        seq.handle(event);
    }
    assert!(seq.is_ready());

    typewriter.configure("cd", Duration::from_millis(70), true);
    while typewriter.tick() != Tick::Idle {}
    assert_eq!(seq.handle(IntroEvent::TextFullyTyped), None);
    assert_eq!(seq.phase(), IntroPhase::Ready);
}

#[test]
fn timers_firing_after_teardown_change_nothing() {
    let ready_hits = Arc::new(AtomicUsize::new(0));
    let hits = ready_hits.clone();
    let mut seq = IntroSequencer::with_on_ready(move || {
        hits.fetch_add(1, Ordering::SeqCst);
    });
    let mut typewriter = Typewriter::new("hi", Duration::from_millis(70));
    let run = typewriter.generation();

    assert_eq!(typewriter.tick_for(run), Some(Tick::Advanced));
    seq.teardown();

    // interval and settle callbacks still queued at teardown
    assert_eq!(typewriter.tick_for(run), Some(Tick::Completed));
    for event in EVENTS {
        assert_eq!(seq.handle(event), None);
    }
    assert_eq!(seq.phase(), IntroPhase::Typing);
    assert_eq!(ready_hits.load(Ordering::SeqCst), 0);
}
