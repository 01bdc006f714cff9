//! Timed replay of a [`Trace`] onto a [`DisplayArray`]
//!
//! The [`Player`] turns a trace into scheduled cues on its own
//! [`Scheduler`]: operation `k` of a run (counted from the starting cursor)
//! is due `k * delay` after the run was started, and once the last operation
//! has fired a finalization cue follows one `delay` later. The caller drives
//! time by calling [`Player::advance`] from its event loop.
//!
//! Every token the player schedules belongs to its current *scope*. Pausing,
//! stopping, stepping and starting a new run all release the scope first, which
//! cancels every pending cue. Operations therefore reach the display strictly
//! in trace order and two runs can never interleave.
//!
//! Completion is reported as a [`Completion`] value returned from
//! [`Player::advance`] or [`Player::step`], exactly once per run.

pub mod scheduler;

use crate::display::DisplayArray;
use crate::trace::Trace;
use rustc_hash::FxHashSet;
use std::rc::Rc;
use std::time::Duration;

pub use scheduler::{Millis, Scheduler, TimerToken};

/// What a scheduled entry does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    /// Apply the operation at this trace index
    Apply(usize),
    /// Force every cell sorted and complete the run
    Finalize,
}

/// A run reached its end
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Wall-clock time since the run was started, pauses included
    pub elapsed: Duration,
}

#[derive(Debug)]
struct Run {
    trace: Rc<Trace>,
    cursor: usize,
    started_at: Millis,
    delay: Millis,
    completed: bool,
}

/// Replays one trace at a time
#[derive(Debug, Default)]
pub struct Player {
    scheduler: Scheduler<Cue>,
    scope: FxHashSet<TimerToken>,
    run: Option<Run>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run over `trace` at operation `from`.
    ///
    /// Any previously scheduled cues are cancelled first.
    pub fn start(&mut self, trace: Rc<Trace>, from: usize, delay: Duration, now: Millis) {
        self.release_scope();

        let cursor = from.min(trace.len());
        tracing::debug!(ops = trace.len(), cursor, ?delay, "starting playback");

        self.run = Some(Run {
            trace,
            cursor,
            started_at: now,
            delay: as_millis(delay),
            completed: false,
        });
        self.schedule_remaining(now);
    }

    /// Cancel pending cues, keeping the cursor and display untouched
    pub fn pause(&mut self) {
        self.release_scope();
        tracing::debug!(cursor = self.cursor(), "playback paused");
    }

    /// Continue a paused run from its cursor with a possibly new delay.
    ///
    /// Returns false if there is no unfinished run.
    pub fn resume(&mut self, delay: Duration, now: Millis) -> bool {
        self.release_scope();

        match self.run.as_mut() {
            Some(run) if !run.completed => {
                run.delay = as_millis(delay);
                tracing::debug!(cursor = run.cursor, ?delay, "resuming playback");
            }
            _ => return false,
        }
        self.schedule_remaining(now);
        true
    }

    /// Apply exactly one pending operation right away.
    ///
    /// Stepping onto the end of the trace also finalizes the display and
    /// completes the run.
    pub fn step(&mut self, display: &mut DisplayArray, now: Millis) -> Option<Completion> {
        self.release_scope();

        let run = self.run.as_mut().filter(|run| !run.completed)?;

        if let Some(op) = run.trace.get(run.cursor) {
            tracing::trace!(index = run.cursor, ?op, "step");
            display.apply(op);
            run.cursor += 1;
        }

        if run.cursor < run.trace.len() {
            return None;
        }

        display.finalize();
        run.completed = true;
        Some(Completion {
            elapsed: elapsed_since(run.started_at, now),
        })
    }

    /// Cancel everything and forget the run
    pub fn stop(&mut self) {
        self.release_scope();
        if self.run.take().is_some() {
            tracing::debug!("playback stopped");
        }
    }

    /// Fire every cue due at or before `now`, in order
    pub fn advance(&mut self, display: &mut DisplayArray, now: Millis) -> Option<Completion> {
        while let Some((at, token, cue)) = self.scheduler.pop_due(now) {
            self.scope.remove(&token);

            let Some(run) = self.run.as_mut() else {
                continue;
            };

            match cue {
                Cue::Apply(index) => {
                    if let Some(op) = run.trace.get(index) {
                        tracing::trace!(index, ?op, "apply");
                        display.apply(op);
                    }
                    run.cursor = index + 1;

                    if run.cursor == run.trace.len() {
                        let token = self
                            .scheduler
                            .schedule(at.saturating_add(run.delay), Cue::Finalize);
                        self.scope.insert(token);
                    }
                }
                Cue::Finalize => {
                    display.finalize();
                    run.completed = true;
                    let elapsed = elapsed_since(run.started_at, now);
                    tracing::debug!(?elapsed, "playback complete");
                    return Some(Completion { elapsed });
                }
            }
        }

        None
    }

    /// Index of the next operation to apply
    pub fn cursor(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.cursor)
    }

    /// Length of the trace being played, 0 without a run
    pub fn trace_len(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.trace.len())
    }

    /// Whether any cue of the current scope is still pending
    pub fn is_scheduled(&self) -> bool {
        !self.scope.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.completed)
    }

    /// When the next cue is due
    pub fn next_due(&self) -> Option<Millis> {
        self.scheduler.next_due()
    }

    fn schedule_remaining(&mut self, now: Millis) {
        let Some(run) = self.run.as_ref() else {
            return;
        };

        if run.cursor >= run.trace.len() {
            let token = self
                .scheduler
                .schedule(now.saturating_add(run.delay), Cue::Finalize);
            self.scope.insert(token);
            return;
        }

        for (k, index) in (run.cursor..run.trace.len()).enumerate() {
            let at = now.saturating_add((k as Millis).saturating_mul(run.delay));
            let token = self.scheduler.schedule(at, Cue::Apply(index));
            self.scope.insert(token);
        }
    }

    fn release_scope(&mut self) {
        for token in self.scope.drain() {
            self.scheduler.cancel(token);
        }
    }
}

fn as_millis(delay: Duration) -> Millis {
    Millis::try_from(delay.as_millis()).unwrap_or(Millis::MAX)
}

fn elapsed_since(started_at: Millis, now: Millis) -> Duration {
    Duration::from_millis(now.saturating_sub(started_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::VisualTag;
    use crate::trace::Algorithm;

    const DELAY: Duration = Duration::from_millis(10);

    fn setup(values: &[u32]) -> (Player, DisplayArray, Rc<Trace>) {
        let trace = Rc::new(Algorithm::Bubble.generate(values));
        (Player::new(), DisplayArray::from_values(values), trace)
    }

    #[test]
    fn test_operations_fire_on_their_delay() {
        let (mut player, mut display, trace) = setup(&[5, 3, 8, 1]);
        player.start(Rc::clone(&trace), 0, DELAY, 1000);

        assert!(player.advance(&mut display, 1000).is_none());
        assert_eq!(player.cursor(), 1);
        assert_eq!(display.tags()[..2], [VisualTag::Comparing; 2]);

        assert!(player.advance(&mut display, 1015).is_none());
        assert_eq!(player.cursor(), 2);
        assert_eq!(display.values(), vec![3, 5, 8, 1]);
    }

    #[test]
    fn test_completion_follows_last_operation_by_one_delay() {
        let (mut player, mut display, trace) = setup(&[2, 1]);
        // compare, swap, mark 1, mark 0 at 0/10/20/30, finalize at 40
        player.start(trace, 0, DELAY, 0);

        assert!(player.advance(&mut display, 39).is_none());
        assert_eq!(player.cursor(), 4);

        let completion = player.advance(&mut display, 42).unwrap();
        assert_eq!(completion.elapsed, Duration::from_millis(42));
        assert!(display.cells().iter().all(|c| c.is_sorted()));
        assert!(player.is_completed());
        assert!(!player.is_scheduled());
        assert!(player.advance(&mut display, 10_000).is_none());
    }

    #[test]
    fn test_pause_cancels_and_resume_continues() {
        let (mut player, mut display, trace) = setup(&[4, 3, 2, 1]);
        player.start(trace, 0, DELAY, 0);
        let _ = player.advance(&mut display, 25);
        assert_eq!(player.cursor(), 3);

        player.pause();
        assert!(!player.is_scheduled());
        assert!(player.advance(&mut display, 5_000).is_none());
        assert_eq!(player.cursor(), 3);

        assert!(player.resume(DELAY, 6_000));
        let _ = player.advance(&mut display, 6_000);
        assert_eq!(player.cursor(), 4);
    }

    #[test]
    fn test_step_applies_one_and_completes_at_end() {
        let (mut player, mut display, trace) = setup(&[2, 1]);
        player.start(trace, 0, DELAY, 0);
        player.pause();

        for expected in 1..4 {
            assert!(player.step(&mut display, 5).is_none());
            assert_eq!(player.cursor(), expected);
        }
        let completion = player.step(&mut display, 7).unwrap();
        assert_eq!(completion.elapsed, Duration::from_millis(7));
        assert_eq!(display.values(), vec![1, 2]);
        assert!(player.step(&mut display, 8).is_none());
        assert!(!player.resume(DELAY, 9));
    }

    #[test]
    fn test_step_finalizes_when_only_finalize_is_pending() {
        let (mut player, mut display, trace) = setup(&[2, 1]);
        player.start(trace, 0, DELAY, 0);

        // All four operations fired; finalize is still due at 40
        assert!(player.advance(&mut display, 35).is_none());
        assert_eq!(player.cursor(), 4);
        assert!(player.is_scheduled());

        player.pause();
        let completion = player.step(&mut display, 50).unwrap();
        assert_eq!(completion.elapsed, Duration::from_millis(50));
        assert!(display.cells().iter().all(|c| c.is_sorted()));
        assert!(player.is_completed());
        assert!(player.advance(&mut display, 1_000).is_none());
    }

    #[test]
    fn test_huge_delay_saturates_deadlines() {
        let (mut player, mut display, trace) = setup(&[3, 2, 1]);
        let delay = Duration::from_secs(u64::MAX / 1000);
        player.start(Rc::clone(&trace), 0, delay, 0);

        assert!(player.advance(&mut display, 0).is_none());
        assert_eq!(player.cursor(), 1);

        let completion = player.advance(&mut display, Millis::MAX);
        assert!(completion.is_some());
        assert_eq!(display.values(), vec![1, 2, 3]);

        // Resuming late in the clock with the same delay must not overflow either
        let (mut player, mut display, trace) = setup(&[3, 2, 1]);
        player.start(trace, 0, DELAY, Millis::MAX - 5);
        player.pause();
        assert!(player.resume(delay, Millis::MAX - 1));
        assert!(player.advance(&mut display, Millis::MAX).is_some());
        assert_eq!(display.values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_new_start_cancels_previous_scope() {
        let (mut player, mut display, trace) = setup(&[3, 2, 1]);
        player.start(Rc::clone(&trace), 0, DELAY, 0);
        player.start(Rc::new(Trace::new()), 0, DELAY, 0);

        // Only the finalize cue of the empty run remains
        let completion = player.advance(&mut display, 100).unwrap();
        assert_eq!(completion.elapsed, Duration::from_millis(100));
        assert_eq!(display.values(), vec![3, 2, 1]);
    }

    #[test]
    fn test_stop_forgets_run() {
        let (mut player, mut display, trace) = setup(&[3, 2, 1]);
        player.start(trace, 0, DELAY, 0);
        player.stop();
        assert_eq!(player.trace_len(), 0);
        assert!(player.next_due().is_none());
        assert!(player.step(&mut display, 1).is_none());
    }
}
