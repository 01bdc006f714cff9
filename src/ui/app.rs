//! Main TUI application state and logic

use crate::config::HISTORY_LIMIT;
use crate::display::ArraySource;
use crate::history::{HistorySink, RunRecord};
use crate::player::Millis;
use crate::session::{Phase, RunSummary, Session};
use crate::trace::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Upper bound on how long the loop waits for input
const MAX_POLL: Duration = Duration::from_millis(50);

/// Speed change per `+`/`-` press
const SPEED_STEP: u8 = 5;

/// The main application state
pub struct App<S, H> {
    /// The session being visualized
    pub session: Session<S, H>,

    /// Origin of the millisecond clock handed to the session
    epoch: Instant,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Recent runs shown in the history pane
    pub recent: Vec<RunRecord>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl<S: ArraySource, H: HistorySink> App<S, H> {
    /// Create a new app around a session
    pub fn new(session: Session<S, H>) -> Self {
        let mut app = App {
            session,
            epoch: Instant::now(),
            should_quit: false,
            status_message: String::from("Ready!"),
            recent: Vec::new(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.refresh_history();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if let Some(summary) = self.session.tick(self.now()) {
                self.on_complete(summary);
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up in time for the next scheduled operation
            if event::poll(self.poll_timeout())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn now(&self) -> Millis {
        Millis::try_from(self.epoch.elapsed().as_millis()).unwrap_or(Millis::MAX)
    }

    fn poll_timeout(&self) -> Duration {
        match self.session.next_deadline() {
            Some(due) => Duration::from_millis(due.saturating_sub(self.now())).min(MAX_POLL),
            None => MAX_POLL,
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, three info panes below, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(12),
                Constraint::Length(1),
            ])
            .split(size);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .split(main_chunks[1]);

        let settings = *self.session.settings();

        super::panes::render_bars_pane(frame, main_chunks[0], self.session.display());

        super::panes::render_controls_pane(
            frame,
            bottom[0],
            settings.algorithm,
            settings.array_size(),
            settings.speed(),
            settings.step_delay().as_millis(),
            self.session.last_operation(),
            self.session.user(),
        );

        super::panes::render_info_pane(frame, bottom[1], settings.algorithm);

        super::panes::render_history_pane(frame, bottom[2], &self.recent, self.session.user());

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.cursor(),
            self.session.trace_len(),
            self.session.phase(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Debounce key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Right | KeyCode::Char('n') => self.step(),
            KeyCode::Char('r') | KeyCode::Backspace => {
                self.session.reset();
                self.status_message = "New array".to_string();
            }
            KeyCode::Tab => self.select_algorithm(self.session.settings().algorithm.next()),
            KeyCode::BackTab => self.select_algorithm(self.session.settings().algorithm.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.select_algorithm(Algorithm::ALL[idx]);
            }
            KeyCode::Up => {
                let size = self.session.settings().array_size() + 1;
                self.resize(size);
            }
            KeyCode::Down => {
                let size = self.session.settings().array_size().saturating_sub(1);
                self.resize(size);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.session.settings().speed().saturating_add(SPEED_STEP);
                self.change_speed(speed);
            }
            KeyCode::Char('-') => {
                let speed = self.session.settings().speed().saturating_sub(SPEED_STEP);
                self.change_speed(speed);
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        let now = self.now();
        let algorithm = self.session.settings().algorithm;

        self.status_message = match self.session.phase() {
            Phase::Idle | Phase::Completed => {
                self.session.start(now);
                format!("Started {}", algorithm)
            }
            Phase::Running => {
                self.session.pause();
                "Paused".to_string()
            }
            Phase::Paused => {
                self.session.resume(now);
                "Playing...".to_string()
            }
        };
    }

    fn step(&mut self) {
        if self.session.phase() != Phase::Paused {
            self.status_message = "Pause first to step".to_string();
            return;
        }

        match self.session.step(self.now()) {
            Some(summary) => self.on_complete(summary),
            None => self.status_message = "Stepped forward".to_string(),
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        if self.session.set_algorithm(algorithm) {
            self.status_message = format!("Selected {}", algorithm);
        } else {
            self.status_message = "Cannot change algorithm while running".to_string();
        }
    }

    fn resize(&mut self, size: usize) {
        if self.session.set_array_size(size) {
            self.status_message = format!("Array size {}", self.session.settings().array_size());
        } else {
            self.status_message = "Cannot resize while running".to_string();
        }
    }

    fn change_speed(&mut self, speed: u8) {
        if self.session.set_speed(speed) {
            self.status_message = format!("Speed {}%", self.session.settings().speed());
        } else {
            self.status_message = "Cannot change speed while running".to_string();
        }
    }

    fn on_complete(&mut self, summary: RunSummary) {
        self.status_message = format!(
            "{} completed in {:.2} ms",
            summary.algorithm,
            summary.elapsed.as_secs_f64() * 1000.0
        );
        self.refresh_history();
    }

    fn refresh_history(&mut self) {
        if self.session.user().is_none() {
            return;
        }
        match self.session.history().recent(HISTORY_LIMIT) {
            Ok(records) => self.recent = records,
            Err(e) => tracing::warn!(error = %e, "failed to load run history"),
        }
    }
}
