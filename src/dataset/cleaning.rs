//! Cleaning of both datasets before they are merged.
//!
//! - Match results are narrowed to the main player's games, with the opponent
//!   and the win flag derived per row
//! - Profiles lose their unit suffixes (`cm`, `kg`, `%`) and stat columns
//!   become numbers
//! - Players whose ace percentage is above the configured quantile are
//!   flagged as great servers

use std::collections::HashSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::{debug, warn};

use super::models::{CleanPlayer, GameRow, MatchRecord, RawProfile};
use crate::constants::{ACE_COLUMN, STAT_COLUMNS};

static STAT_COLUMN_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STAT_COLUMNS.iter().copied().collect());

/// Date layouts seen in the match results exports
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Returns the opponent of the main player in a game.
pub fn set_opponent<'a>(record: &'a MatchRecord, main_player: &str) -> &'a str {
    if record.loser != main_player {
        &record.loser
    } else {
        &record.winner
    }
}

pub fn is_winner(winner: &str, main_player: &str) -> bool {
    winner == main_player
}

/// Keeps only the games the main player took part in.
pub fn filter_games(records: Vec<MatchRecord>, main_player: &str) -> Vec<MatchRecord> {
    records
        .into_iter()
        .filter(|record| record.winner == main_player || record.loser == main_player)
        .collect()
}

pub fn parse_match_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Filters the main player's games and derives opponent, result and date.
pub fn prepare_games(records: Vec<MatchRecord>, main_player: &str) -> Vec<GameRow> {
    let total = records.len();
    let games: Vec<GameRow> = filter_games(records, main_player)
        .into_iter()
        .map(|record| {
            let opponent = set_opponent(&record, main_player).to_string();
            let won = is_winner(&record.winner, main_player);
            let date = record.date.as_deref().and_then(parse_match_date);
            GameRow {
                record,
                opponent,
                is_winner: won,
                date,
            }
        })
        .collect();
    debug!("Kept {} of {total} games for {main_player}", games.len());
    games
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Strips a unit suffix and parses the remainder: `"185 cm"` gives `185.0`.
pub fn clean_measure(value: &Value, unit: &str) -> Option<f64> {
    let text = value_text(value)?;
    let cleaned = text.replace(unit, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Parses a stat value such as `"6.1%"`, `"0.95"` or `12`.
///
/// Empty strings are missing values; anything else unparseable is logged and
/// treated as missing.
pub fn clean_stat(column: &str, value: &Value) -> Option<f64> {
    if let Value::Number(n) = value {
        return n.as_f64();
    }
    let text = value_text(value)?;
    let cleaned = text.replace('%', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            warn!("Ignoring non-numeric value '{text}' in column '{column}'");
            None
        }
    }
}

fn text_field(profile: &RawProfile, key: &str) -> Option<String> {
    profile
        .fields
        .get(key)
        .and_then(value_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Quantile with linear interpolation between the closest ranks.
///
/// # Examples
/// ```
/// use tennis_stats::dataset::quantile;
///
/// assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
/// assert_eq!(quantile(&[], 0.5), None);
/// ```
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Cleans every profile and sets the great-serve flag from the ace quantile.
pub fn clean_profiles(profiles: &[RawProfile], great_serve_quantile: f64) -> Vec<CleanPlayer> {
    let mut players: Vec<CleanPlayer> = profiles.iter().map(clean_profile).collect();

    let aces: Vec<f64> = players
        .iter()
        .filter_map(|player| player.stat(ACE_COLUMN))
        .collect();
    let threshold = quantile(&aces, great_serve_quantile);
    debug!(
        "Great serve threshold at quantile {great_serve_quantile}: {threshold:?} ({} players with aces)",
        aces.len()
    );

    if let Some(threshold) = threshold {
        for player in &mut players {
            player.great_serve = player.stat(ACE_COLUMN).map(|ace| ace > threshold);
        }
    }
    players
}

fn clean_profile(profile: &RawProfile) -> CleanPlayer {
    let stats = STAT_COLUMNS
        .iter()
        .map(|column| {
            let value = profile
                .fields
                .get(*column)
                .and_then(|value| clean_stat(column, value));
            (column.to_string(), value)
        })
        .collect();

    let extra = profile
        .fields
        .keys()
        .filter(|key| key.ends_with('%') && !STAT_COLUMN_SET.contains(key.as_str()))
        .count();
    if extra > 0 {
        debug!("Profile '{}' has {extra} unknown percentage columns", profile.name);
    }

    CleanPlayer {
        name: profile.name.trim().to_string(),
        country: text_field(profile, "Country"),
        plays: text_field(profile, "Plays"),
        backhand: text_field(profile, "Backhand"),
        height_cm: profile
            .fields
            .get("Height")
            .and_then(|value| clean_measure(value, "cm")),
        weight_kg: profile
            .fields
            .get("Weight")
            .and_then(|value| clean_measure(value, "kg")),
        stats,
        great_serve: None,
    }
}
