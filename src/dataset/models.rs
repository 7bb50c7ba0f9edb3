use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the match results table.
///
/// Only the leading game columns are mapped; betting columns are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "ATP", default)]
    pub atp: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Tournament", default)]
    pub tournament: Option<String>,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Series", default)]
    pub series: Option<String>,
    #[serde(rename = "Court", default)]
    pub court: Option<String>,
    #[serde(rename = "Surface", default)]
    pub surface: Option<String>,
    #[serde(rename = "Round", default)]
    pub round: Option<String>,
    #[serde(rename = "Best of", default)]
    pub best_of: Option<String>,
    #[serde(rename = "Winner")]
    pub winner: String,
    #[serde(rename = "Loser")]
    pub loser: String,
    #[serde(rename = "WRank", default)]
    pub w_rank: Option<String>,
    #[serde(rename = "LRank", default)]
    pub l_rank: Option<String>,
    #[serde(rename = "W1", default)]
    pub w1: Option<String>,
    #[serde(rename = "L1", default)]
    pub l1: Option<String>,
    #[serde(rename = "W2", default)]
    pub w2: Option<String>,
    #[serde(rename = "L2", default)]
    pub l2: Option<String>,
    #[serde(rename = "W3", default)]
    pub w3: Option<String>,
    #[serde(rename = "L3", default)]
    pub l3: Option<String>,
    #[serde(rename = "W4", default)]
    pub w4: Option<String>,
    #[serde(rename = "L4", default)]
    pub l4: Option<String>,
    #[serde(rename = "W5", default)]
    pub w5: Option<String>,
    #[serde(rename = "L5", default)]
    pub l5: Option<String>,
    #[serde(rename = "Wsets", default)]
    pub w_sets: Option<String>,
    #[serde(rename = "Lsets", default)]
    pub l_sets: Option<String>,
    #[serde(rename = "Comment", default)]
    pub comment: Option<String>,
}

/// A game of the main player with the opponent and result derived.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub record: MatchRecord,
    /// Opponent name as written in the match results (abbreviated)
    pub opponent: String,
    pub is_winner: bool,
    pub date: Option<NaiveDate>,
}

/// One scraped player profile: the canonical name plus every scraped field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    pub name: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// A profile after unit stripping and numeric conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanPlayer {
    pub name: String,
    pub country: Option<String>,
    pub plays: Option<String>,
    pub backhand: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    /// Stat column to value; `None` when the profile had no usable value
    pub stats: BTreeMap<String, Option<f64>>,
    /// `None` when the player has no ace percentage
    pub great_serve: Option<bool>,
}

impl CleanPlayer {
    pub fn stat(&self, column: &str) -> Option<f64> {
        self.stats.get(column).copied().flatten()
    }
}

/// Player columns kept in the clean players snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Plays")]
    pub plays: Option<String>,
    #[serde(rename = "Backhand")]
    pub backhand: Option<String>,
    pub great_serve: Option<bool>,
    #[serde(rename = "Ace %")]
    pub ace_pct: Option<f64>,
}

impl From<&CleanPlayer> for PlayerSnapshot {
    fn from(player: &CleanPlayer) -> Self {
        Self {
            name: player.name.clone(),
            country: player.country.clone(),
            plays: player.plays.clone(),
            backhand: player.backhand.clone(),
            great_serve: player.great_serve,
            ace_pct: player.stat(crate::constants::ACE_COLUMN),
        }
    }
}

/// A game joined with the opponent's profile.
///
/// Winner/Loser names, set scores and the comment column are dropped; the
/// opponent is the canonical name when resolved and the original otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedGame {
    #[serde(rename = "ATP")]
    pub atp: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Tournament")]
    pub tournament: Option<String>,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Series")]
    pub series: Option<String>,
    #[serde(rename = "Court")]
    pub court: Option<String>,
    #[serde(rename = "Surface")]
    pub surface: Option<String>,
    #[serde(rename = "Round")]
    pub round: Option<String>,
    #[serde(rename = "Best of")]
    pub best_of: Option<String>,
    #[serde(rename = "WRank")]
    pub w_rank: Option<String>,
    #[serde(rename = "LRank")]
    pub l_rank: Option<String>,
    #[serde(rename = "Wsets")]
    pub w_sets: Option<String>,
    #[serde(rename = "Lsets")]
    pub l_sets: Option<String>,
    #[serde(rename = "Opponent")]
    pub opponent: String,
    #[serde(rename = "Is_winner")]
    pub is_winner: bool,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Plays")]
    pub plays: Option<String>,
    #[serde(rename = "Backhand")]
    pub backhand: Option<String>,
    pub great_serve: Option<bool>,
    #[serde(rename = "Resolved")]
    pub resolved: bool,
}

impl MergedGame {
    /// Builds the merged row from a game, the resolved opponent name and the
    /// matching profile, if any.
    pub fn from_game(game: &GameRow, opponent: String, player: Option<&CleanPlayer>) -> Self {
        let record = &game.record;
        Self {
            atp: record.atp.clone(),
            location: record.location.clone(),
            tournament: record.tournament.clone(),
            date: record.date.clone(),
            series: record.series.clone(),
            court: record.court.clone(),
            surface: record.surface.clone(),
            round: record.round.clone(),
            best_of: record.best_of.clone(),
            w_rank: record.w_rank.clone(),
            l_rank: record.l_rank.clone(),
            w_sets: record.w_sets.clone(),
            l_sets: record.l_sets.clone(),
            opponent,
            is_winner: game.is_winner,
            country: player.and_then(|p| p.country.clone()),
            plays: player.and_then(|p| p.plays.clone()),
            backhand: player.and_then(|p| p.backhand.clone()),
            great_serve: player.and_then(|p| p.great_serve),
            resolved: false,
        }
    }
}
