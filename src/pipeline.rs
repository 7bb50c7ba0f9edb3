//! The clean and report runs, wired from a [`Config`].
//!
//! A clean run loads both inputs, resolves every opponent against the
//! profile roster and writes the CSV snapshots. A report run reads those
//! snapshots back, so it never needs the raw inputs.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::constants::outputs;
use crate::dataset::{
    CleanPlayer, DatasetMerger, PlayerSnapshot, ResolutionSummary, UnresolvedPolicy,
    clean_profiles, load_matches, load_profiles, prepare_games, read_players_csv,
    write_games_csv, write_players_csv, write_unresolved_csv,
};
use crate::error::AppError;
use crate::player_names::{IdentityMatcher, MatchOutcome, OverrideStage, Roster};
use crate::report::{Report, report_from_snapshots, write_report_json};

/// What a clean run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanSummary {
    pub main_player: String,
    pub games: usize,
    pub players: usize,
    pub resolution: ResolutionSummary,
    pub unresolved_opponents: usize,
    /// Files written, in writing order
    pub outputs: Vec<PathBuf>,
}

/// Builds the matcher for a roster with the configured extra overrides.
pub fn build_matcher<I, S>(names: I, config: &Config) -> IdentityMatcher
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let roster = Roster::from_names(names);
    let overrides = OverrideStage::with_extra(config.name_overrides.clone());
    IdentityMatcher::with_overrides(roster, overrides)
}

/// Canonical name of the main player: the configured full name, or the main
/// player resolved like any opponent.
pub fn main_player_full_name(config: &Config, matcher: &IdentityMatcher) -> Result<String, AppError> {
    if let Some(full_name) = &config.main_player_full_name {
        return Ok(full_name.clone());
    }
    match matcher.resolve(&config.main_player) {
        MatchOutcome::Matched { canonical, .. } => Ok(canonical),
        MatchOutcome::NoMatch => Err(AppError::missing_player(&config.main_player)),
    }
}

fn display_name(config: &Config, matcher: &IdentityMatcher) -> String {
    main_player_full_name(config, matcher).unwrap_or_else(|e| {
        warn!("{e}; using '{}' as written", config.main_player);
        config.main_player.clone()
    })
}

fn load_clean_players(config: &Config) -> Result<Vec<CleanPlayer>, AppError> {
    let profiles = load_profiles(Path::new(&config.players_json))?;
    Ok(clean_profiles(&profiles, config.great_serve_quantile))
}

/// Runs loading, cleaning, opponent resolution and export.
pub fn run_clean(config: &Config) -> Result<CleanSummary, AppError> {
    info!("Cleaning games of {}", config.main_player);
    let records = load_matches(Path::new(&config.matches_csv))?;
    let games = prepare_games(records, &config.main_player);
    if games.is_empty() {
        return Err(AppError::no_games(&config.main_player));
    }

    let players = load_clean_players(config)?;
    let matcher = build_matcher(players.iter().map(|p| p.name.clone()), config);
    let main_player = display_name(config, &matcher);

    let merger = DatasetMerger::new(&matcher, config.unresolved_policy);
    let merged = merger.merge(&games, &players);

    let mut written = Vec::new();
    let games_path = config.output_path(outputs::CLEAN_GAMES_CSV);
    write_games_csv(&games_path, &merged.games)?;
    written.push(games_path);

    let snapshots: Vec<PlayerSnapshot> = players.iter().map(PlayerSnapshot::from).collect();
    let players_path = config.output_path(outputs::CLEAN_PLAYERS_CSV);
    write_players_csv(&players_path, &snapshots)?;
    written.push(players_path);

    if config.unresolved_policy == UnresolvedPolicy::Flag {
        let unresolved_path = config.output_path(outputs::UNRESOLVED_CSV);
        write_unresolved_csv(&unresolved_path, &merged.unresolved)?;
        written.push(unresolved_path);
    }

    Ok(CleanSummary {
        main_player,
        games: merged.games.len(),
        players: players.len(),
        unresolved_opponents: merged.unresolved.len(),
        resolution: merged.summary,
        outputs: written,
    })
}

/// Builds the report from the snapshots of a previous clean run and writes
/// `report.json` next to them.
pub fn run_report(config: &Config) -> Result<Report, AppError> {
    let players_path = config.output_path(outputs::CLEAN_PLAYERS_CSV);
    let main_player = match &config.main_player_full_name {
        Some(full_name) => full_name.clone(),
        None => {
            let players = read_players_csv(&players_path)?;
            let matcher = build_matcher(players.into_iter().map(|p| p.name), config);
            display_name(config, &matcher)
        }
    };

    let report = report_from_snapshots(
        &config.output_path(outputs::CLEAN_GAMES_CSV),
        &players_path,
        &main_player,
    )?;
    write_report_json(&config.output_path(outputs::REPORT_JSON), &report)?;
    Ok(report)
}

/// Resolves free-form names against the profile roster.
pub fn resolve_names<S: AsRef<str>>(
    config: &Config,
    names: &[S],
) -> Result<Vec<(String, MatchOutcome)>, AppError> {
    let players = load_clean_players(config)?;
    let matcher = build_matcher(players.into_iter().map(|p| p.name), config);
    let outcomes = matcher.resolve_all(names);
    Ok(names
        .iter()
        .map(|name| name.as_ref().to_string())
        .zip(outcomes)
        .collect())
}
