//! Configuration structures for the reservation engine
//!
//! This module contains the engine configuration, its command line surface and
//! validation logic.

use super::OutputFormat;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Occupancy rules enforced by the reservation configurator
pub mod occupancy {
    /// Maximum number of adults that may share one room
    pub const MAX_ADULTS_PER_ROOM: u32 = 3;

    /// Minimum adults on any booking
    pub const MIN_ADULTS: u32 = 1;

    /// Minimum rooms on any booking
    pub const MIN_ROOMS: u32 = 1;

    /// Rooms needed to seat `adults` under the occupancy ceiling
    pub fn rooms_required(adults: u32) -> u32 {
        adults.div_ceil(MAX_ADULTS_PER_ROOM)
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shyam-booking",
    version = "0.1.0",
    about = "Shyam Heritage Palace - room catalog and booking engine",
    long_about = "Loads the room catalog, normalizes it for display and walks a reservation through the booking wizard.

EXAMPLES:
    # List the rooms in a catalog file
    shyam-booking --catalog rooms.json

    # Book a room
    shyam-booking --catalog rooms.json --room deluxe --adults 4 \\
        --check-in 2026-12-20 --check-out 2026-12-23 \\
        --guest-name \"Asha Verma\" --guest-phone \"+91 98765 43210\"

    # Generate configuration template
    shyam-booking --print-config > booking.json

    # Validate configuration without running
    shyam-booking --config booking.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Room catalog file (JSON array of raw room documents)
    #[arg(long, help = "Room catalog file (JSON array of room documents)")]
    pub catalog: Option<String>,

    /// Room to book; rooms are listed when omitted
    #[arg(long, help = "Id of the room to book")]
    pub room: Option<String>,

    /// Number of adults
    #[arg(long, allow_negative_numbers = true, help = "Number of adults (max 3 per room)")]
    pub adults: Option<i64>,

    /// Number of children
    #[arg(long, allow_negative_numbers = true, help = "Number of children")]
    pub children: Option<i64>,

    /// Number of rooms
    #[arg(long, allow_negative_numbers = true, help = "Number of rooms")]
    pub rooms: Option<i64>,

    /// Check-in date
    #[arg(long, help = "Check-in date (YYYY-MM-DD)")]
    pub check_in: Option<NaiveDate>,

    /// Check-out date
    #[arg(long, help = "Check-out date (YYYY-MM-DD)")]
    pub check_out: Option<NaiveDate>,

    /// Guest full name
    #[arg(long, help = "Guest full name")]
    pub guest_name: Option<String>,

    /// Guest phone number
    #[arg(long, help = "Guest phone number")]
    pub guest_phone: Option<String>,

    /// Simulated submission latency in milliseconds
    #[arg(long, help = "Simulated submission latency in milliseconds")]
    pub submission_delay_ms: Option<u64>,

    /// Probability that the simulated sink rejects a booking (0.0-1.0)
    #[arg(
        long,
        help = "Simulated submission failure rate (0.0-1.0)",
        long_help = "Probability that the simulated submission sink rejects a booking. Range: 0.0-1.0. Default: 0.0"
    )]
    pub submission_failure_rate: Option<f64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for catalog listings and confirmations. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running
    #[arg(long, help = "Validate configuration without running")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Room catalog file
    pub catalog_path: Option<String>,

    /// Simulated submission latency in milliseconds
    pub submission_delay_ms: Option<u64>,

    /// Probability that the simulated sink rejects a booking
    pub submission_failure_rate: Option<f64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format
    pub output_format: Option<String>,
}

/// Configuration for the reservation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Room catalog file
    pub catalog_path: Option<String>,

    /// Simulated submission latency in milliseconds
    pub submission_delay_ms: u64,

    /// Probability that the simulated sink rejects a booking (0.0-1.0)
    pub submission_failure_rate: f64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for engine configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            submission_delay_ms: 1500,
            submission_failure_rate: 0.0,
            seed: None,
            output_format: "text".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            catalog_path: config_file.catalog_path.or(defaults.catalog_path),
            submission_delay_ms: config_file
                .submission_delay_ms
                .unwrap_or(defaults.submission_delay_ms),
            submission_failure_rate: config_file
                .submission_failure_rate
                .unwrap_or(defaults.submission_failure_rate),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    /// Apply command line overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(catalog) = args.catalog {
            config.catalog_path = Some(catalog);
        }
        if let Some(delay) = args.submission_delay_ms {
            config.submission_delay_ms = delay;
        }
        if let Some(rate) = args.submission_failure_rate {
            config.submission_failure_rate = rate;
        }
        if let Some(seed) = args.seed {
            config.seed = Some(seed);
        }
        if let Some(format) = args.output_format {
            config.output_format = format;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.submission_failure_rate) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: "submission_failure_rate".to_string(),
                value: self.submission_failure_rate,
            });
        }

        self.get_output_format()?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}
