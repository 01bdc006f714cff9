//! Ranges, defaults and command-line configuration

use crate::errors::ConfigError;
use crate::trace::{Algorithm, Value};
use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

/// Allowed array sizes
pub const ARRAY_SIZE_RANGE: RangeInclusive<usize> = 5..=50;

/// Allowed speed percentages
pub const SPEED_RANGE: RangeInclusive<u8> = 1..=95;

/// Range random values are drawn from
pub const VALUE_RANGE: RangeInclusive<Value> = 5..=95;

pub const DEFAULT_ARRAY_SIZE: usize = 20;
pub const DEFAULT_SPEED: u8 = 50;

/// Number of runs shown in the history pane
pub const HISTORY_LIMIT: usize = 10;

pub const DEFAULT_HISTORY_PATH: &str = "sortty-history.jsonl";

/// Step delay is `SPEED_CEILING - speed` milliseconds
const SPEED_CEILING: u64 = 100;

/// User-adjustable playback parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    array_size: usize,
    speed: u8,
}

impl Settings {
    /// Build settings, clamping size and speed into their ranges
    pub fn new(algorithm: Algorithm, array_size: usize, speed: u8) -> Self {
        let mut settings = Settings {
            algorithm,
            array_size: DEFAULT_ARRAY_SIZE,
            speed: DEFAULT_SPEED,
        };
        settings.set_array_size(array_size);
        settings.set_speed(speed);
        settings
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn set_array_size(&mut self, size: usize) {
        self.array_size = size.clamp(*ARRAY_SIZE_RANGE.start(), *ARRAY_SIZE_RANGE.end());
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end());
    }

    /// Delay between two consecutive operations
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(SPEED_CEILING - u64::from(self.speed))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(Algorithm::default(), DEFAULT_ARRAY_SIZE, DEFAULT_SPEED)
    }
}

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sortty",
    about = "Step through sorting algorithms in the terminal",
    version
)]
pub struct Cli {
    /// Algorithm to visualize
    #[arg(long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,

    /// Number of bars
    #[arg(
        long,
        default_value_t = DEFAULT_ARRAY_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(5..=50)
    )]
    pub size: usize,

    /// Playback speed in percent; the step delay is 100 - speed ms
    #[arg(long, default_value_t = DEFAULT_SPEED, value_parser = clap::value_parser!(u8).range(1..=95))]
    pub speed: u8,

    /// Seed for the random array source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use these values instead of random ones (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub values: Vec<Value>,

    /// Name recorded with each completed run; history is only kept with a user
    #[arg(long)]
    pub user: Option<String>,

    /// Run-history file (JSON lines)
    #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
    pub history: PathBuf,

    /// Write logs to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Print the trace for the initial array as JSON and exit
    #[arg(long = "dump-trace")]
    pub dump_trace: bool,

    /// Play the run to completion without the terminal UI
    #[arg(long, conflicts_with = "dump_trace")]
    pub headless: bool,
}

impl Cli {
    /// Validate `--values` and resolve the initial settings
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        if let Some(&value) = self.values.iter().find(|v| !VALUE_RANGE.contains(v)) {
            return Err(ConfigError::ValueOutOfRange {
                value,
                min: *VALUE_RANGE.start(),
                max: *VALUE_RANGE.end(),
            });
        }

        let size = if self.values.is_empty() {
            self.size
        } else if ARRAY_SIZE_RANGE.contains(&self.values.len()) {
            self.values.len()
        } else {
            return Err(ConfigError::ValueCount {
                count: self.values.len(),
                min: *ARRAY_SIZE_RANGE.start(),
                max: *ARRAY_SIZE_RANGE.end(),
            });
        };

        Ok(Settings::new(self.algorithm, size, self.speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_shrinks_with_speed() {
        assert_eq!(
            Settings::new(Algorithm::Quick, 20, 95).step_delay(),
            Duration::from_millis(5)
        );
        assert_eq!(Settings::default().step_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_setters_clamp() {
        let mut settings = Settings::default();
        settings.set_array_size(500);
        settings.set_speed(0);
        assert_eq!(settings.array_size(), 50);
        assert_eq!(settings.speed(), 1);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sortty"]);
        assert_eq!(cli.settings(), Ok(Settings::default()));
        assert!(cli.user.is_none());
    }

    #[test]
    fn test_cli_values_set_size() {
        let cli = Cli::parse_from(["sortty", "--values", "5,9,7,30,12,6", "--algorithm", "merge"]);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.array_size(), 6);
        assert_eq!(settings.algorithm, Algorithm::Merge);
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        let cli = Cli::parse_from(["sortty", "--values", "5,300"]);
        assert!(matches!(
            cli.settings(),
            Err(ConfigError::ValueOutOfRange { value: 300, .. })
        ));

        let cli = Cli::parse_from(["sortty", "--values", "5,6"]);
        assert!(matches!(
            cli.settings(),
            Err(ConfigError::ValueCount { count: 2, .. })
        ));
    }

    #[test]
    fn test_cli_range_checks() {
        assert!(Cli::try_parse_from(["sortty", "--speed", "99"]).is_err());
        assert!(Cli::try_parse_from(["sortty", "--size", "4"]).is_err());
        assert!(Cli::try_parse_from(["sortty", "--dump-trace", "--headless"]).is_err());
    }
}
