use crate::constants::{LOG_FILE_NAME, defaults};
use crate::dataset::UnresolvedPolicy;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Environment variable overriding the main player
pub const ENV_MAIN_PLAYER: &str = "TENNIS_STATS_MAIN_PLAYER";
/// Environment variable relocating the input files and the output directory
pub const ENV_DATA_DIR: &str = "TENNIS_STATS_DATA_DIR";
/// Environment variable overriding the log file path
pub const ENV_LOG_FILE: &str = "TENNIS_STATS_LOG_FILE";

/// Configuration structure for the application.
/// Handles loading, saving, and managing pipeline settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Player studied, written the way the match results write names (`Nadal R.`).
    pub main_player: String,
    /// Canonical name of the main player. Resolved through the name matcher when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_player_full_name: Option<String>,
    pub matches_csv: String,
    pub players_json: String,
    /// Directory receiving the cleaned datasets and the report.
    pub output_dir: String,
    pub unresolved_policy: UnresolvedPolicy,
    /// Ace % quantile above which a player is flagged as a great server.
    pub great_serve_quantile: f64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Extra abbreviated-name to canonical-name pairs, applied after the built-in ones.
    /// Must stay the last field: TOML tables follow plain values.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub name_overrides: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            main_player: defaults::MAIN_PLAYER.to_string(),
            main_player_full_name: None,
            matches_csv: defaults::MATCHES_CSV.to_string(),
            players_json: defaults::PLAYERS_JSON.to_string(),
            output_dir: defaults::OUTPUT_DIR.to_string(),
            unresolved_policy: UnresolvedPolicy::default(),
            great_serve_quantile: defaults::GREAT_SERVE_QUANTILE,
            log_file_path: None,
            name_overrides: BTreeMap::new(),
        }
    }
}

/// Re-roots a default data path under `data_dir`: `data/x/y.csv` becomes `<data_dir>/x/y.csv`.
fn rebase_data_path(default_path: &str, data_dir: &str) -> String {
    let relative = Path::new(default_path)
        .strip_prefix(defaults::OUTPUT_DIR)
        .unwrap_or_else(|_| Path::new(default_path));
    Path::new(data_dir)
        .join(relative)
        .to_string_lossy()
        .to_string()
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults; nothing is written.
    ///
    /// # Environment Variables
    /// - `TENNIS_STATS_MAIN_PLAYER` - Override the main player
    /// - `TENNIS_STATS_DATA_DIR` - Root directory for the input files and outputs
    /// - `TENNIS_STATS_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable, malformed or invalid
    pub fn load() -> Result<Self, AppError> {
        let mut config = Self::load_stored(&get_config_path())?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the stored configuration as written in the file, without
    /// environment overrides. A missing file yields the defaults.
    ///
    /// Use this before [`Config::save`] so that transient environment values
    /// are not persisted.
    pub fn load_stored(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Applies the `TENNIS_STATS_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(main_player) = std::env::var(ENV_MAIN_PLAYER) {
            self.main_player = main_player;
            // The stored full name belongs to the previous main player
            self.main_player_full_name = None;
        }

        if let Ok(data_dir) = std::env::var(ENV_DATA_DIR) {
            self.matches_csv = rebase_data_path(defaults::MATCHES_CSV, &data_dir);
            self.players_json = rebase_data_path(defaults::PLAYERS_JSON, &data_dir);
            self.output_dir = data_dir;
        }

        if let Ok(log_file_path) = std::env::var(ENV_LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.main_player,
            self.great_serve_quantile,
            &self.log_file_path,
        )
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.output_dir).join(file_name)
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and the effective settings
    /// - Without a config file the defaults are shown
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load()?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Main Player:");
        match &config.main_player_full_name {
            Some(full_name) => println!("{} ({full_name})", config.main_player),
            None => println!("{}", config.main_player),
        }
        println!("────────────────────────────────────");
        println!("Input Files:");
        println!("{}", config.matches_csv);
        println!("{}", config.players_json);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", config.output_dir);
        println!("────────────────────────────────────");
        println!("Unresolved Opponents:");
        println!("{}", config.unresolved_policy);
        println!("────────────────────────────────────");
        println!("Great Serve Quantile:");
        println!("{}", config.great_serve_quantile);
        if !config.name_overrides.is_empty() {
            println!("────────────────────────────────────");
            println!("Name Overrides:");
            for (abbreviated, canonical) in &config.name_overrides {
                println!("{abbreviated} -> {canonical}");
            }
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads configuration from a custom file path. Missing fields take their defaults.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
