//! Application-wide constants and configuration values
//!
//! This module centralizes file names, column names and tuning values
//! shared between the pipeline stages.

/// Display value for an opponent that could not be resolved to a profile
pub const NO_MATCH: &str = "No match";

/// Name used for the config directory, the log file and the env var prefix
pub const APP_NAME: &str = "tennis_stats";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "tennis_stats.log";

/// Default settings used when no config file exists
pub mod defaults {
    /// Player studied by default, in the abbreviated match-results format
    pub const MAIN_PLAYER: &str = "Nadal R.";

    /// Match results table (tennis-data.co.uk layout)
    pub const MATCHES_CSV: &str = "data/kaggle_dataset/Data.csv";

    /// Scraped player profiles, a JSON array of objects
    pub const PLAYERS_JSON: &str = "data/scraped_dataset/players_info.json";

    /// Directory receiving the cleaned datasets and reports
    pub const OUTPUT_DIR: &str = "data";

    /// Ace % quantile above which a player counts as a great server
    pub const GREAT_SERVE_QUANTILE: f64 = 0.85;
}

/// Output file names written into the configured output directory
pub mod outputs {
    pub const CLEAN_GAMES_CSV: &str = "dataset_clean.csv";
    pub const CLEAN_PLAYERS_CSV: &str = "players_stats_clean.csv";
    pub const UNRESOLVED_CSV: &str = "unresolved_opponents.csv";
    pub const REPORT_JSON: &str = "report.json";
}

/// Number of leading columns of the match results table that carry game data.
/// The remaining columns hold betting odds and are ignored.
pub const MATCH_DATA_COLUMNS: usize = 26;

/// Number of entries shown in the "top" report sections
pub const REPORT_TOP_N: usize = 5;

/// Scraped profile column holding the ace percentage
pub const ACE_COLUMN: &str = "Ace %";

/// Scraped stat columns converted from percentage strings to numbers
pub const STAT_COLUMNS: [&str; 22] = [
    "Ace %",
    "Double Fault %",
    "1st Serve %",
    "1st Serve Won %",
    "2nd Serve Won %",
    "Break Points Saved %",
    "Service Points Won %",
    "Service Games Won %",
    "Ace Against %",
    "Double Fault Against %",
    "1st Srv. Return Won %",
    "2nd Srv. Return Won %",
    "Break Points Won %",
    "Return Points Won %",
    "Return Games Won %",
    "Points Dominance",
    "Games Dominance",
    "Break Points Ratio",
    "Total Points Won %",
    "Games Won %",
    "Sets Won %",
    "Matches Won %",
];

/// Handedness values used by the profile `Plays` column
pub mod plays {
    pub const LEFT_HANDED: &str = "Left-handed";
    pub const RIGHT_HANDED: &str = "Right-handed";
}
