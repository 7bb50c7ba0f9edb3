//! Figures computed from the merged games and the players snapshot.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::constants::{REPORT_TOP_N, plays};
use crate::dataset::cleaning::{parse_match_date, quantile};
use crate::dataset::models::{MergedGame, PlayerSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceRecord {
    pub surface: String,
    pub wins: usize,
    pub total: usize,
    pub win_pct: f64,
}

/// Losses against one kind of opponent on one surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossDetail {
    pub surface: String,
    pub left_handed: bool,
    pub great_serve: bool,
    pub total: usize,
    pub wins: usize,
    pub loss_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryWins {
    pub country: String,
    pub wins: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nemesis {
    pub opponent: String,
    pub losses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AceDistribution {
    pub players: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Ace % of the main player, when present in the snapshot
    pub main_player: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonRecord {
    pub year: i32,
    pub wins: usize,
    pub losses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub main_player: String,
    pub games: usize,
    pub wins: usize,
    pub surfaces: Vec<SurfaceRecord>,
    pub loss_details: Vec<LossDetail>,
    pub top_defeated_countries: Vec<CountryWins>,
    pub nemeses: Vec<Nemesis>,
    pub aces: Option<AceDistribution>,
    pub seasons: Vec<SeasonRecord>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(part as f64 / total as f64 * 100.0)
    }
}

/// Wins and win rate per surface, surfaces in order of first appearance.
pub fn surface_win_rates(games: &[MergedGame]) -> Vec<SurfaceRecord> {
    let mut records: Vec<SurfaceRecord> = Vec::new();
    for game in games {
        let Some(surface) = game.surface.as_deref() else {
            continue;
        };
        let position = match records.iter().position(|r| r.surface == surface) {
            Some(position) => position,
            None => {
                records.push(SurfaceRecord {
                    surface: surface.to_string(),
                    wins: 0,
                    total: 0,
                    win_pct: 0.0,
                });
                records.len() - 1
            }
        };
        let record = &mut records[position];
        record.total += 1;
        if game.is_winner {
            record.wins += 1;
        }
    }
    for record in &mut records {
        record.win_pct = percentage(record.wins, record.total);
    }
    records
}

fn is_left_handed(plays_value: &str) -> Option<bool> {
    match plays_value {
        plays::LEFT_HANDED => Some(true),
        plays::RIGHT_HANDED => Some(false),
        _ => None,
    }
}

/// Loss rate grouped by surface, opponent handedness and great-serve flag.
///
/// Games without a known surface, handedness or serve flag are left out.
pub fn loss_details(games: &[MergedGame]) -> Vec<LossDetail> {
    let mut groups: BTreeMap<(String, bool, bool), (usize, usize)> = BTreeMap::new();
    for game in games {
        let (Some(surface), Some(left_handed), Some(great_serve)) = (
            game.surface.as_deref(),
            game.plays.as_deref().and_then(is_left_handed),
            game.great_serve,
        ) else {
            continue;
        };
        let entry = groups
            .entry((surface.to_string(), left_handed, great_serve))
            .or_default();
        entry.0 += 1;
        if game.is_winner {
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|((surface, left_handed, great_serve), (total, wins))| LossDetail {
            surface,
            left_handed,
            great_serve,
            total,
            wins,
            loss_pct: percentage(total - wins, total),
        })
        .collect()
}

/// Countries whose players the main player beat most often.
pub fn top_defeated_countries(games: &[MergedGame]) -> Vec<CountryWins> {
    let mut wins: BTreeMap<&str, usize> = BTreeMap::new();
    for game in games {
        if let Some(country) = game.country.as_deref() {
            *wins.entry(country).or_default() += usize::from(game.is_winner);
        }
    }
    let mut ranked: Vec<CountryWins> = wins
        .into_iter()
        .map(|(country, wins)| CountryWins {
            country: country.to_string(),
            wins,
        })
        .collect();
    ranked.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.country.cmp(&b.country)));
    ranked.truncate(REPORT_TOP_N);
    ranked
}

/// Opponents the main player lost to most often.
pub fn top_nemeses(games: &[MergedGame]) -> Vec<Nemesis> {
    let mut losses: BTreeMap<&str, usize> = BTreeMap::new();
    for game in games.iter().filter(|game| !game.is_winner) {
        *losses.entry(game.opponent.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<Nemesis> = losses
        .into_iter()
        .map(|(opponent, losses)| Nemesis {
            opponent: opponent.to_string(),
            losses,
        })
        .collect();
    ranked.sort_by(|a, b| b.losses.cmp(&a.losses).then_with(|| a.opponent.cmp(&b.opponent)));
    ranked.truncate(REPORT_TOP_N);
    ranked
}

/// Box-plot figures of the ace percentage over all players.
pub fn ace_distribution(players: &[PlayerSnapshot], main_player: &str) -> Option<AceDistribution> {
    let aces: Vec<f64> = players.iter().filter_map(|p| p.ace_pct).collect();
    Some(AceDistribution {
        players: aces.len(),
        min: quantile(&aces, 0.0)?,
        q1: quantile(&aces, 0.25)?,
        median: quantile(&aces, 0.5)?,
        q3: quantile(&aces, 0.75)?,
        max: quantile(&aces, 1.0)?,
        main_player: players
            .iter()
            .find(|p| p.name == main_player)
            .and_then(|p| p.ace_pct)
            .map(round1),
    })
}

/// Wins and losses per calendar year of the game date.
pub fn season_records(games: &[MergedGame]) -> Vec<SeasonRecord> {
    let mut seasons: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for game in games {
        let Some(date) = game.date.as_deref().and_then(parse_match_date) else {
            continue;
        };
        let entry = seasons.entry(date.year()).or_default();
        if game.is_winner {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }
    seasons
        .into_iter()
        .map(|(year, (wins, losses))| SeasonRecord { year, wins, losses })
        .collect()
}

/// Builds every report section.
pub fn build_report(main_player: &str, games: &[MergedGame], players: &[PlayerSnapshot]) -> Report {
    Report {
        main_player: main_player.to_string(),
        games: games.len(),
        wins: games.iter().filter(|game| game.is_winner).count(),
        surfaces: surface_win_rates(games),
        loss_details: loss_details(games),
        top_defeated_countries: top_defeated_countries(games),
        nemeses: top_nemeses(games),
        aces: ace_distribution(players, main_player),
        seasons: season_records(games),
    }
}
