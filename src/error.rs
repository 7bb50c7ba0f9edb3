use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse player profiles: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Dataset content errors
    #[error("Data validation error: {message} (file: {path})")]
    DataValidation { message: String, path: String },

    #[error("Player not found in profiles: {0}")]
    MissingPlayer(String),

    #[error("No games found for player: {0}")]
    NoGames(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a data validation error for a specific input file
    pub fn data_validation(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a missing player error
    pub fn missing_player(name: impl Into<String>) -> Self {
        Self::MissingPlayer(name.into())
    }

    /// Create an error for a main player without any games in the dataset
    pub fn no_games(name: impl Into<String>) -> Self {
        Self::NoGames(name.into())
    }

    /// Check if the error comes from malformed input data rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::Csv(_)
                | AppError::Json(_)
                | AppError::DataValidation { .. }
                | AppError::MissingPlayer(_)
                | AppError::NoGames(_)
        )
    }
}
