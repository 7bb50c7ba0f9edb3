//! CSV snapshots of the cleaned datasets.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use super::merge::UnresolvedOpponent;
use super::models::{MergedGame, PlayerSnapshot};
use crate::error::AppError;

fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Serializes rows to any writer with a header line.
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_rows<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, AppError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

fn write_file<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), AppError> {
    ensure_parent_dir(path)?;
    let file = fs::File::create(path)?;
    write_rows(file, rows)?;
    info!("Saved {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn write_games_csv(path: &Path, games: &[MergedGame]) -> Result<(), AppError> {
    write_file(path, games)
}

pub fn write_players_csv(path: &Path, players: &[PlayerSnapshot]) -> Result<(), AppError> {
    write_file(path, players)
}

pub fn write_unresolved_csv(path: &Path, unresolved: &[UnresolvedOpponent]) -> Result<(), AppError> {
    write_file(path, unresolved)
}

pub fn read_games_csv(path: &Path) -> Result<Vec<MergedGame>, AppError> {
    read_rows(fs::File::open(path)?)
}

pub fn read_players_csv(path: &Path) -> Result<Vec<PlayerSnapshot>, AppError> {
    read_rows(fs::File::open(path)?)
}
