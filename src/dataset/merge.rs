//! Joins the main player's games with the opponents' profiles.
//!
//! Every opponent is resolved through the [`IdentityMatcher`]; what happens to
//! rows whose opponent cannot be resolved is decided by the caller through
//! [`UnresolvedPolicy`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::models::{CleanPlayer, GameRow, MergedGame};
use crate::player_names::{IdentityMatcher, MatchOutcome};

/// What to do with a game whose opponent resolves to no profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Keep the row with the original opponent string and empty player columns
    #[default]
    KeepOriginal,
    /// Leave the row out of the merged dataset
    Drop,
    /// Keep the row like `KeepOriginal` and report the opponent as unresolved
    Flag,
}

impl fmt::Display for UnresolvedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnresolvedPolicy::KeepOriginal => "keep_original",
            UnresolvedPolicy::Drop => "drop",
            UnresolvedPolicy::Flag => "flag",
        };
        f.write_str(name)
    }
}

impl FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" | "keep_original" | "keep-original" => Ok(UnresolvedPolicy::KeepOriginal),
            "drop" => Ok(UnresolvedPolicy::Drop),
            "flag" => Ok(UnresolvedPolicy::Flag),
            other => Err(format!(
                "unknown unresolved policy '{other}' (expected keep, drop or flag)"
            )),
        }
    }
}

/// An opponent that no matching stage could resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedOpponent {
    #[serde(rename = "Opponent")]
    pub opponent: String,
    #[serde(rename = "Games")]
    pub games: usize,
}

/// Counts of how opponents were resolved during one merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    pub total_games: usize,
    pub by_stage: BTreeMap<&'static str, usize>,
    pub unresolved_games: usize,
    pub dropped_games: usize,
    /// Resolved names that have no profile to join (override targets missing from the roster)
    pub missing_profiles: usize,
}

impl ResolutionSummary {
    pub fn resolved_games(&self) -> usize {
        self.by_stage.values().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutput {
    pub games: Vec<MergedGame>,
    /// Unresolved opponents in first-seen order
    pub unresolved: Vec<UnresolvedOpponent>,
    pub summary: ResolutionSummary,
}

pub struct DatasetMerger<'a> {
    matcher: &'a IdentityMatcher,
    policy: UnresolvedPolicy,
}

impl<'a> DatasetMerger<'a> {
    pub fn new(matcher: &'a IdentityMatcher, policy: UnresolvedPolicy) -> Self {
        Self { matcher, policy }
    }

    pub fn policy(&self) -> UnresolvedPolicy {
        self.policy
    }

    /// Resolves every opponent in row order and joins the matching profile.
    ///
    /// The opponent column is replaced by the canonical name only when the
    /// opponent was resolved.
    pub fn merge(&self, games: &[GameRow], players: &[CleanPlayer]) -> MergeOutput {
        let mut profiles: HashMap<&str, &CleanPlayer> = HashMap::with_capacity(players.len());
        for player in players {
            profiles.entry(player.name.as_str()).or_insert(player);
        }

        let mut output = MergeOutput::default();
        output.summary.total_games = games.len();
        let mut unresolved_positions: HashMap<String, usize> = HashMap::new();

        for game in games {
            match self.matcher.resolve(&game.opponent) {
                MatchOutcome::Matched { canonical, stage } => {
                    *output.summary.by_stage.entry(stage).or_default() += 1;
                    let profile = profiles.get(canonical.as_str()).copied();
                    if profile.is_none() {
                        output.summary.missing_profiles += 1;
                    }
                    let mut merged = MergedGame::from_game(game, canonical, profile);
                    merged.resolved = true;
                    output.games.push(merged);
                }
                MatchOutcome::NoMatch => {
                    output.summary.unresolved_games += 1;
                    match unresolved_positions.get(&game.opponent) {
                        Some(&position) => output.unresolved[position].games += 1,
                        None => {
                            unresolved_positions
                                .insert(game.opponent.clone(), output.unresolved.len());
                            output.unresolved.push(UnresolvedOpponent {
                                opponent: game.opponent.clone(),
                                games: 1,
                            });
                        }
                    }

                    match self.policy {
                        UnresolvedPolicy::Drop => output.summary.dropped_games += 1,
                        UnresolvedPolicy::KeepOriginal | UnresolvedPolicy::Flag => {
                            output
                                .games
                                .push(MergedGame::from_game(game, game.opponent.clone(), None));
                        }
                    }
                }
            }
        }

        if self.policy == UnresolvedPolicy::Flag {
            for opponent in &output.unresolved {
                warn!(
                    "Unresolved opponent '{}' ({} games)",
                    opponent.opponent, opponent.games
                );
            }
        }
        info!(
            "Merged {} games: {} resolved, {} unresolved, {} dropped",
            output.summary.total_games,
            output.summary.resolved_games(),
            output.summary.unresolved_games,
            output.summary.dropped_games
        );
        output
    }
}
