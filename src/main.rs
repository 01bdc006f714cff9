// SorTTY: Step-Through Sorting Algorithm Visualizer

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use sortty::config::Cli;
use sortty::display::{ArraySource, FixedSource, RandomSource};
use sortty::history::JsonlHistory;
use sortty::player::Millis;
use sortty::session::Session;
use sortty::trace::{Algorithm, Trace, Value};
use sortty::ui::App;

/// Shape of the `--dump-trace` output
#[derive(Serialize)]
struct TraceDump<'a> {
    algorithm: Algorithm,
    values: &'a [Value],
    operations: &'a Trace,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut source: Box<dyn ArraySource> = if !cli.values.is_empty() {
        Box::new(FixedSource::new(cli.values.clone()))
    } else if let Some(seed) = cli.seed {
        Box::new(RandomSource::seeded(seed))
    } else {
        Box::new(RandomSource::new())
    };

    // Dumping accepts any number of values, so it skips size validation
    if cli.dump_trace {
        let values: Vec<Value> = if cli.values.is_empty() {
            source.regenerate(cli.size).iter().map(|c| c.value).collect()
        } else {
            cli.values.clone()
        };
        let trace = cli.algorithm.generate(&values);
        let dump = TraceDump {
            algorithm: cli.algorithm,
            values: &values,
            operations: &trace,
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let history = JsonlHistory::new(&cli.history);
    let mut session = Session::new(settings, source, history, cli.user.clone());

    if cli.headless {
        run_headless(&mut session);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Log to `path`; the TUI owns stdout and stderr
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Play one run in real time and print the outcome
fn run_headless(session: &mut Session<Box<dyn ArraySource>, JsonlHistory>) {
    let epoch = Instant::now();
    let now = || Millis::try_from(epoch.elapsed().as_millis()).unwrap_or(Millis::MAX);

    let settings = *session.settings();
    println!(
        "{} on {} values, {} ms/step",
        settings.algorithm,
        settings.array_size(),
        settings.step_delay().as_millis()
    );
    println!("Input:  {:?}", session.display().values());

    session.start(now());
    println!("Operations: {}", session.trace_len());

    loop {
        if let Some(summary) = session.tick(now()) {
            println!("Output: {:?}", session.display().values());
            println!(
                "Completed in {:.2} ms",
                summary.elapsed.as_secs_f64() * 1000.0
            );
            break;
        }

        if let Some(due) = session.next_deadline() {
            std::thread::sleep(Duration::from_millis(due.saturating_sub(now())));
        }
    }
}
