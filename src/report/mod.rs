//! Descriptive statistics over the merged dataset.
//!
//! The report is built from the CSV snapshots written by the clean step, so
//! it can be regenerated without reloading the raw inputs.

pub mod rendering;
pub mod summaries;

use std::path::Path;

use tracing::info;

use crate::dataset::{read_games_csv, read_players_csv};
use crate::error::AppError;

pub use rendering::{SECTION_TITLES, render_report, write_report_json};
pub use summaries::{
    AceDistribution, CountryWins, LossDetail, Nemesis, Report, SeasonRecord, SurfaceRecord,
    ace_distribution, build_report, loss_details, season_records, surface_win_rates,
    top_defeated_countries, top_nemeses,
};

/// Reads both snapshots and builds the report for `main_player`.
///
/// `main_player` is the canonical (full) name, as it appears in the players
/// snapshot.
pub fn report_from_snapshots(
    games_csv: &Path,
    players_csv: &Path,
    main_player: &str,
) -> Result<Report, AppError> {
    let games = read_games_csv(games_csv)?;
    if games.is_empty() {
        return Err(AppError::no_games(main_player));
    }
    let players = read_players_csv(players_csv)?;
    info!(
        "Building report from {} games and {} players",
        games.len(),
        players.len()
    );
    Ok(build_report(main_player, &games, &players))
}
