//! Readers for the two input datasets.
//!
//! The reader-based functions take any `Read` so they can be exercised
//! without touching the filesystem.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{info, warn};

use super::models::{MatchRecord, RawProfile};
use crate::constants::MATCH_DATA_COLUMNS;
use crate::error::AppError;

/// Columns the merge cannot work without
const REQUIRED_MATCH_COLUMNS: [&str; 3] = ["Winner", "Loser", "Surface"];

/// Loads the match results table.
///
/// The file is decoded lossily so stray Latin-1 bytes in tournament or
/// location names do not abort the run.
pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>, AppError> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let records = load_matches_from_reader(content.as_bytes()).map_err(|e| match e {
        AppError::DataValidation { message, .. } => {
            AppError::data_validation(message, path.display().to_string())
        }
        other => other,
    })?;
    info!("Loaded {} match records from {}", records.len(), path.display());
    Ok(records)
}

/// Parses match results from any reader. Columns past the game data are ignored.
pub fn load_matches_from_reader<R: Read>(rdr: R) -> Result<Vec<MatchRecord>, AppError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_MATCH_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(AppError::data_validation(
                format!("missing column {column}"),
                "<reader>",
            ));
        }
    }
    if headers.len() > MATCH_DATA_COLUMNS {
        info!(
            "Ignoring {} trailing columns of match results",
            headers.len() - MATCH_DATA_COLUMNS
        );
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<MatchRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed match row: {e}"),
        }
    }
    Ok(records)
}

/// Loads the scraped player profiles, a JSON array of objects with a `name` field.
pub fn load_profiles(path: &Path) -> Result<Vec<RawProfile>, AppError> {
    let file = File::open(path)?;
    let profiles = load_profiles_from_reader(BufReader::new(file))?;
    info!("Loaded {} player profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

pub fn load_profiles_from_reader<R: Read>(rdr: R) -> Result<Vec<RawProfile>, AppError> {
    Ok(serde_json::from_reader(rdr)?)
}
