//! Typewriter prefix sequencer.
//!
//! Reveals a target string one character per tick. The timer itself belongs
//! to the caller; this type only tracks how much is revealed, reports
//! completion once, and resets when its inputs change.

use std::time::Duration;

/// Result of a single [`Typewriter::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One more character is visible.
    Advanced,
    /// The full string is visible. Returned exactly once per run.
    Completed,
    /// Nothing happened: not started, or already complete.
    Idle,
}

/// Restartable sequence of string prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    target: String,
    /// Byte offset of every char boundary after the first char, plus the end.
    boundaries: Vec<usize>,
    revealed: usize,
    interval: Duration,
    started: bool,
    done: bool,
    generation: u64,
}

impl Typewriter {
    /// A started typewriter for `target`, ticking every `interval`.
    pub fn new(target: impl Into<String>, interval: Duration) -> Self {
        Self::build(target.into(), interval, true)
    }

    /// A typewriter that will not advance until reconfigured with
    /// `start = true`.
    pub fn idle(target: impl Into<String>, interval: Duration) -> Self {
        Self::build(target.into(), interval, false)
    }

    fn build(target: String, interval: Duration, started: bool) -> Self {
        let boundaries = char_ends(&target);
        Self {
            target,
            boundaries,
            revealed: 0,
            interval,
            started,
            done: false,
            generation: 0,
        }
    }

    /// Reveal the next character.
    pub fn tick(&mut self) -> Tick {
        if !self.started || self.done {
            return Tick::Idle;
        }
        if self.revealed < self.boundaries.len() {
            self.revealed += 1;
        }
        if self.revealed == self.boundaries.len() {
            self.done = true;
            tracing::trace!(generation = self.generation, "typewriter completed");
            Tick::Completed
        } else {
            Tick::Advanced
        }
    }

    /// Tick on behalf of a timer scheduled for run `generation`.
    ///
    /// Returns `None` without touching the state when that run has been
    /// replaced by a restart.
    pub fn tick_for(&mut self, generation: u64) -> Option<Tick> {
        if generation != self.generation {
            tracing::trace!(stale = generation, current = self.generation, "dropped tick");
            return None;
        }
        Some(self.tick())
    }

    /// Apply the restart policy: a change of target, interval or start flag
    /// resets to the empty prefix and begins a new generation. Returns
    /// whether a reset happened.
    pub fn configure(&mut self, target: &str, interval: Duration, start: bool) -> bool {
        if self.target == target && self.interval == interval && self.started == start {
            return false;
        }
        let generation = self.generation.wrapping_add(1);
        *self = Self::build(target.to_owned(), interval, start);
        self.generation = generation;
        tracing::trace!(generation, start, "typewriter restarted");
        true
    }

    /// Currently visible prefix.
    pub fn output(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.target[..self.boundaries[n - 1]],
        }
    }

    /// Full target string.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Length of the target in characters.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Whether the target is empty.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Whether the full string has been revealed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether ticks advance the sequence.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Delay the driver should wait between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run counter, bumped on every restart. Timer callbacks compare it to
    /// the value they were scheduled with to detect a stale run.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Lazy iterator over every prefix of the target, from `""` to the
    /// full string.
    pub fn prefixes(&self) -> Prefixes<'_> {
        Prefixes {
            target: &self.target,
            boundaries: &self.boundaries,
            next: 0,
        }
    }
}

fn char_ends(s: &str) -> Vec<usize> {
    s.char_indices().map(|(i, c)| i + c.len_utf8()).collect()
}

/// Iterator returned by [`Typewriter::prefixes`].
#[derive(Clone, Debug)]
pub struct Prefixes<'a> {
    target: &'a str,
    boundaries: &'a [usize],
    next: usize,
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let item = match self.next {
            0 => "",
            n if n <= self.boundaries.len() => &self.target[..self.boundaries[n - 1]],
            _ => return None,
        };
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.boundaries.len() + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Prefixes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STEP: Duration = Duration::from_millis(70);

    fn run_to_end(tw: &mut Typewriter) -> (Vec<String>, usize) {
        let mut seen = vec![tw.output().to_owned()];
        let mut completions = 0;
        for _ in 0..tw.len() + 5 {
            match tw.tick() {
                Tick::Advanced => seen.push(tw.output().to_owned()),
                Tick::Completed => {
                    seen.push(tw.output().to_owned());
                    completions += 1;
                }
                Tick::Idle => {}
            }
        }
        (seen, completions)
    }

    #[test]
    fn greeting_yields_len_plus_one_prefixes() {
        let mut tw = Typewriter::new("{ hello world }", STEP);
        let (seen, completions) = run_to_end(&mut tw);

        assert_eq!(seen.len(), "{ hello world }".len() + 1);
        assert_eq!(seen.first().map(String::as_str), Some(""));
        assert_eq!(seen.last().map(String::as_str), Some("{ hello world }"));
        assert_eq!(completions, 1);
        assert!(tw.is_done());
    }

    #[test]
    fn multibyte_text_is_split_on_char_boundaries() {
        let mut tw = Typewriter::new("héllo ✓", STEP);
        let (seen, completions) = run_to_end(&mut tw);

        assert_eq!(seen.len(), 8);
        assert_eq!(seen[2], "hé");
        assert_eq!(seen[7], "héllo ✓");
        assert_eq!(completions, 1);
    }

    #[test]
    fn empty_target_completes_on_first_tick() {
        let mut tw = Typewriter::new("", STEP);
        assert_eq!(tw.tick(), Tick::Completed);
        assert_eq!(tw.tick(), Tick::Idle);
        assert_eq!(tw.output(), "");
        assert_eq!(tw.prefixes().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn idle_typewriter_does_not_advance() {
        let mut tw = Typewriter::idle("abc", STEP);
        assert_eq!(tw.tick(), Tick::Idle);
        assert_eq!(tw.output(), "");

        assert!(tw.configure("abc", STEP, true));
        assert_eq!(tw.tick(), Tick::Advanced);
        assert_eq!(tw.output(), "a");
    }

    #[test]
    fn restart_policy() {
        let mut tw = Typewriter::new("abc", STEP);
        tw.tick();
        tw.tick();
        assert_eq!(tw.output(), "ab");

        assert!(!tw.configure("abc", STEP, true));
        assert_eq!(tw.output(), "ab");
        assert_eq!(tw.generation(), 0);

        assert!(tw.configure("xyz", STEP, true));
        assert_eq!(tw.output(), "");
        assert_eq!(tw.generation(), 1);

        tw.tick();
        assert!(tw.configure("xyz", Duration::from_millis(10), true));
        assert_eq!(tw.output(), "");
        assert_eq!(tw.generation(), 2);

        assert!(tw.configure("xyz", Duration::from_millis(10), false));
        assert_eq!(tw.tick(), Tick::Idle);
        assert_eq!(tw.generation(), 3);
    }

    #[test]
    fn ticks_from_a_replaced_run_are_dropped() {
        let mut tw = Typewriter::new("abc", STEP);
        let old = tw.generation();
        assert_eq!(tw.tick_for(old), Some(Tick::Advanced));

        tw.configure("xy", STEP, true);
        let current = tw.generation();

        assert_eq!(tw.tick_for(old), None);
        assert_eq!(tw.output(), "");
        assert_eq!(tw.tick_for(current), Some(Tick::Advanced));
        assert_eq!(tw.tick_for(old), None);
        assert_eq!(tw.tick_for(current), Some(Tick::Completed));
        assert_eq!(tw.output(), "xy");
    }

    #[test]
    fn restart_after_completion_completes_again() {
        let mut tw = Typewriter::new("ab", STEP);
        let (_, first) = run_to_end(&mut tw);
        tw.configure("cd", STEP, true);
        let (_, second) = run_to_end(&mut tw);
        assert_eq!((first, second), (1, 1));
        assert_eq!(tw.output(), "cd");
    }

    #[test]
    fn prefixes_are_lazy_and_sized() {
        let tw = Typewriter::new("abcd", STEP);
        let mut it = tw.prefixes();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(""));
        assert_eq!(it.next(), Some("a"));
        assert_eq!(it.len(), 3);
        assert_eq!(it.collect::<Vec<_>>(), vec!["ab", "abc", "abcd"]);
    }
}
