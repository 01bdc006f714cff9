//! Lifecycle of a visualization session
//!
//! A [`Session`] owns the user's settings, the [`DisplayArray`] and the
//! [`Player`], and turns user intent into player calls according to this
//! state machine:
//!
//! ```text
//!            start              pause
//!   Idle ───────────▶ Running ◀──────▶ Paused
//!    ▲                   │      resume   │
//!    │                   │ last cue      │ step onto the end
//!    │ reset             ▼               ▼
//!    └─────────────── Completed ◀────────┘
//! ```
//!
//! `reset` is accepted in every phase; `start` from `Completed` regenerates
//! the array and starts a fresh run on it. Any other request made in the
//! wrong phase is ignored and reported as `false`.
//!
//! Completed runs are forwarded to the [`HistorySink`] when a user name is
//! set. Sink failures are logged and otherwise ignored.

use crate::config::Settings;
use crate::display::{ArraySource, DisplayArray};
use crate::history::{HistorySink, RunRecord};
use crate::player::{Completion, Millis, Player};
use crate::trace::{Algorithm, Operation, Trace};
use std::rc::Rc;
use std::time::Duration;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// Outcome of a completed run, for status reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub array_size: usize,
    pub elapsed: Duration,
}

/// The run in flight, as configured when it started
#[derive(Debug)]
struct ActiveRun {
    algorithm: Algorithm,
    array_size: usize,
    trace: Rc<Trace>,
}

/// Settings, display state and playback for one user
pub struct Session<S, H> {
    settings: Settings,
    phase: Phase,
    display: DisplayArray,
    player: Player,
    run: Option<ActiveRun>,
    source: S,
    history: H,
    user: Option<String>,
}

impl<S: ArraySource, H: HistorySink> Session<S, H> {
    /// Create an idle session with a freshly generated array
    pub fn new(settings: Settings, mut source: S, history: H, user: Option<String>) -> Self {
        let display = DisplayArray::new(source.regenerate(settings.array_size()));
        Session {
            settings,
            phase: Phase::Idle,
            display,
            player: Player::new(),
            run: None,
            source,
            history,
            user,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn display(&self) -> &DisplayArray {
        &self.display
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Playback cursor of the current run
    pub fn cursor(&self) -> usize {
        self.player.cursor()
    }

    /// Number of operations in the current run's trace
    pub fn trace_len(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.trace.len())
    }

    /// The most recently applied operation
    pub fn last_operation(&self) -> Option<&Operation> {
        let run = self.run.as_ref()?;
        run.trace.get(self.player.cursor().checked_sub(1)?)
    }

    /// When [`Session::tick`] next has work to do
    pub fn next_deadline(&self) -> Option<Millis> {
        match self.phase {
            Phase::Running => self.player.next_due(),
            _ => None,
        }
    }

    /// Choose the algorithm for the next run
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        self.settings.algorithm = algorithm;
        true
    }

    /// Change the array size; a different size discards any paused or
    /// completed run and regenerates the array
    pub fn set_array_size(&mut self, size: usize) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        let before = self.settings.array_size();
        self.settings.set_array_size(size);
        if self.settings.array_size() != before {
            self.reset();
        }
        true
    }

    /// Change the speed; a paused run picks it up on resume
    pub fn set_speed(&mut self, speed: u8) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        self.settings.set_speed(speed);
        true
    }

    /// Generate a trace for the current array and start playing it
    pub fn start(&mut self, now: Millis) -> bool {
        match self.phase {
            Phase::Idle => {}
            Phase::Completed => self.reset(),
            Phase::Running | Phase::Paused => return false,
        }

        let algorithm = self.settings.algorithm;
        let trace = Rc::new(algorithm.generate(&self.display.values()));
        tracing::info!(
            algorithm = algorithm.name(),
            size = self.display.len(),
            ops = trace.len(),
            "starting run"
        );

        self.player
            .start(Rc::clone(&trace), 0, self.settings.step_delay(), now);
        self.run = Some(ActiveRun {
            algorithm,
            array_size: self.display.len(),
            trace,
        });
        self.phase = Phase::Running;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.player.pause();
        self.phase = Phase::Paused;
        true
    }

    pub fn resume(&mut self, now: Millis) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        if self.player.resume(self.settings.step_delay(), now) {
            self.phase = Phase::Running;
            true
        } else {
            false
        }
    }

    /// Apply one operation while paused
    pub fn step(&mut self, now: Millis) -> Option<RunSummary> {
        if self.phase != Phase::Paused {
            return None;
        }
        let completion = self.player.step(&mut self.display, now)?;
        Some(self.complete(completion))
    }

    /// Stop playback, regenerate the array and return to idle
    pub fn reset(&mut self) {
        self.player.stop();
        self.run = None;
        self.display = DisplayArray::new(self.source.regenerate(self.settings.array_size()));
        self.phase = Phase::Idle;
        tracing::debug!(size = self.display.len(), "session reset");
    }

    /// Deliver every cue due by `now`
    pub fn tick(&mut self, now: Millis) -> Option<RunSummary> {
        if self.phase != Phase::Running {
            return None;
        }
        let completion = self.player.advance(&mut self.display, now)?;
        Some(self.complete(completion))
    }

    fn complete(&mut self, completion: Completion) -> RunSummary {
        self.phase = Phase::Completed;

        let (algorithm, array_size) = self.run.as_ref().map_or(
            (self.settings.algorithm, self.display.len()),
            |run| (run.algorithm, run.array_size),
        );
        let summary = RunSummary {
            algorithm,
            array_size,
            elapsed: completion.elapsed,
        };
        tracing::info!(
            algorithm = algorithm.name(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "run completed"
        );

        if let Some(user) = self.user.as_deref() {
            let elapsed_ms = summary.elapsed.as_secs_f64() * 1000.0;
            let record = RunRecord::now(algorithm.name(), array_size, elapsed_ms, user);
            if let Err(e) = self.history.record(&record) {
                tracing::warn!(error = %e, "failed to record run history");
            }
        }

        summary
    }
}
