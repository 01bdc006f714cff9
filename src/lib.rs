//! # Introduction
//!
//! SorTTY visualizes comparison-based sorting algorithms in the terminal. Each
//! algorithm records every comparison and mutation it performs as a trace of
//! operations; the trace is then replayed, step by step, onto a tagged array
//! that the UI draws as a bar chart built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! ArraySource → DisplayArray → Generator → Trace → Player → DisplayArray → TUI
//!                                                      ↓
//!                                               Session → HistorySink
//! ```
//!
//! 1. [`trace`] — the [`trace::Operation`] model and the five generators
//!    (bubble, selection, insertion, merge, quick), plus the algorithm catalogue.
//! 2. [`display`] — [`display::DisplayArray`] of tagged cells and the
//!    [`display::ArraySource`]s that fill it.
//! 3. [`player`] — a single-threaded [`player::Scheduler`] and the
//!    [`player::Player`] that replays a trace with a per-step delay, with
//!    pause, resume, single-step and cancellation.
//! 4. [`session`] — the Idle/Running/Paused/Completed state machine tying
//!    settings, player and history together.
//! 5. [`history`] — run-history sinks notified on completion.
//! 6. [`config`] — ranges, defaults and command-line arguments.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod display;
pub mod errors;
pub mod history;
pub mod player;
pub mod session;
pub mod trace;
pub mod ui;
