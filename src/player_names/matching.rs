//! Identity matching between abbreviated opponent names and the roster.
//!
//! Matching is an ordered list of [`MatchStage`] strategies. Each stage looks at
//! the abbreviated name and either commits to one canonical name or passes.
//! The first stage that commits wins; when every stage passes the opponent
//! resolves to [`MatchOutcome::NoMatch`].
//!
//! Default order:
//! 1. [`OverrideStage`] - fixed table for names the heuristics get wrong
//! 2. [`UniqueSurnameStage`] - leading surname is unique in the roster
//! 3. [`SurnameInitialStage`] - `"Surname I."` form is unique in the roster
//! 4. [`HyphenatedSurnameStage`] - hyphenated double surnames

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use tracing::debug;

use super::formatting::{abbreviated_parts, collapsed_surname_phrase, leading_token};
use super::index::CandidateIndex;
use super::roster::Roster;
use crate::constants::NO_MATCH;

/// Built-in overrides for compound names. These win over every heuristic.
pub const BUILTIN_OVERRIDES: [(&str, &str); 2] = [
    ("Del Potro J.M.", "Juan Martin Del Potro"),
    ("Bautista R.", "Roberto Bautista Agut"),
];

/// Result of resolving one opponent name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Resolved to a canonical name by the named stage
    Matched {
        canonical: String,
        stage: &'static str,
    },
    /// No stage could commit to a single candidate
    NoMatch,
}

impl MatchOutcome {
    pub fn canonical(&self) -> Option<&str> {
        match self {
            MatchOutcome::Matched { canonical, .. } => Some(canonical.as_str()),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn stage(&self) -> Option<&'static str> {
        match self {
            MatchOutcome::Matched { stage, .. } => Some(*stage),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Matched { canonical, .. } => f.write_str(canonical),
            MatchOutcome::NoMatch => f.write_str(NO_MATCH),
        }
    }
}

/// One matching strategy in the cascade.
pub trait MatchStage {
    /// Short identifier used in logs and resolution summaries
    fn name(&self) -> &'static str;

    /// Returns the canonical name this stage commits to, or `None` to pass.
    fn try_match(&self, name: &str, roster: &Roster, index: &CandidateIndex) -> Option<String>;
}

/// First roster entry containing `phrase` after its first character.
///
/// This is plain substring containment, not token matching: a phrase that
/// occurs inside a longer name (`"Smith"` in `"Tom Smithson"`) counts.
fn first_containing<'r>(roster: &'r Roster, phrase: &str) -> Option<&'r str> {
    roster
        .names()
        .find(|full_name| full_name.find(phrase).is_some_and(|pos| pos > 0))
}

/// Matches when the leading surname of the abbreviated name is the last name
/// of exactly one roster entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueSurnameStage;

impl MatchStage for UniqueSurnameStage {
    fn name(&self) -> &'static str {
        "unique_surname"
    }

    fn try_match(&self, name: &str, roster: &Roster, index: &CandidateIndex) -> Option<String> {
        let surname = leading_token(name);
        if surname.is_empty() || !index.is_unique_surname(surname) {
            return None;
        }
        first_containing(roster, surname).map(str::to_string)
    }
}

/// Matches when the whole abbreviated name equals the `"<surname> <initial>."`
/// form of exactly one roster entry, then picks the first roster entry where
/// the initial is followed by the surname.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurnameInitialStage;

impl MatchStage for SurnameInitialStage {
    fn name(&self) -> &'static str {
        "surname_initial"
    }

    fn try_match(&self, name: &str, roster: &Roster, index: &CandidateIndex) -> Option<String> {
        if !index.is_unique_surname_initial(name) {
            return None;
        }
        let (surname, initial) = abbreviated_parts(name)?;

        let pattern = format!(
            r"\b{}.*{}",
            regex::escape(initial),
            regex::escape(surname)
        );
        // Both parts are escaped, so the pattern always compiles.
        let matcher = Regex::new(&pattern).ok()?;

        roster
            .names()
            .find(|full_name| matcher.is_match(full_name))
            .map(str::to_string)
    }
}

/// Matches hyphenated double surnames (`"Carreno-Busta P."`) against roster
/// entries whose names after the given name are the same words.
#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenatedSurnameStage;

impl MatchStage for HyphenatedSurnameStage {
    fn name(&self) -> &'static str {
        "hyphenated_surname"
    }

    fn try_match(&self, name: &str, roster: &Roster, index: &CandidateIndex) -> Option<String> {
        let phrase = collapsed_surname_phrase(name);
        if phrase.is_empty() || !index.contains_surname_phrase(&phrase) {
            return None;
        }
        first_containing(roster, &phrase).map(str::to_string)
    }
}

/// Exact-string lookup table. Independent of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideStage {
    entries: BTreeMap<String, String>,
}

impl Default for OverrideStage {
    fn default() -> Self {
        Self {
            entries: BUILTIN_OVERRIDES
                .iter()
                .map(|(abbreviated, canonical)| (abbreviated.to_string(), canonical.to_string()))
                .collect(),
        }
    }
}

impl OverrideStage {
    /// Built-in table extended with extra entries.
    ///
    /// Extra entries never replace a built-in override.
    ///
    /// # Example
    /// ```
    /// use tennis_stats::player_names::{CandidateIndex, MatchStage, OverrideStage, Roster};
    ///
    /// let stage = OverrideStage::with_extra([("Ferrero J.C.", "Juan Carlos Ferrero")]);
    /// let roster = Roster::default();
    /// let index = CandidateIndex::build(&roster);
    ///
    /// assert_eq!(
    ///     stage.try_match("Ferrero J.C.", &roster, &index).as_deref(),
    ///     Some("Juan Carlos Ferrero")
    /// );
    /// assert_eq!(
    ///     stage.try_match("Bautista R.", &roster, &index).as_deref(),
    ///     Some("Roberto Bautista Agut")
    /// );
    /// ```
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut stage = Self::default();
        for (abbreviated, canonical) in extra {
            stage
                .entries
                .entry(abbreviated.into())
                .or_insert_with(|| canonical.into());
        }
        stage
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MatchStage for OverrideStage {
    fn name(&self) -> &'static str {
        "override"
    }

    fn try_match(&self, name: &str, _roster: &Roster, _index: &CandidateIndex) -> Option<String> {
        self.entries.get(name).cloned()
    }
}

/// Default cascade: overrides, unique surname, surname+initial, hyphenated surname.
pub fn default_stages() -> Vec<Box<dyn MatchStage>> {
    stages_with_overrides(OverrideStage::default())
}

/// Default cascade with a custom override table as the first stage.
pub fn stages_with_overrides(overrides: OverrideStage) -> Vec<Box<dyn MatchStage>> {
    vec![
        Box::new(overrides),
        Box::new(UniqueSurnameStage),
        Box::new(SurnameInitialStage),
        Box::new(HyphenatedSurnameStage),
    ]
}

/// Resolves abbreviated names against a fixed roster.
///
/// The candidate index is built once on construction and shared by every
/// call; resolving keeps no state between calls.
///
/// # Example
/// ```
/// use tennis_stats::player_names::{IdentityMatcher, Roster};
///
/// let roster = Roster::from_names(["Rafael Nadal", "Roger Federer", "Novak Djokovic"]);
/// let matcher = IdentityMatcher::new(roster);
///
/// let outcome = matcher.resolve("Federer R.");
/// assert_eq!(outcome.canonical(), Some("Roger Federer"));
/// assert_eq!(outcome.stage(), Some("unique_surname"));
/// assert!(!matcher.resolve("Zzyzx Q.").is_match());
/// ```
pub struct IdentityMatcher {
    roster: Roster,
    index: CandidateIndex,
    stages: Vec<Box<dyn MatchStage>>,
}

impl IdentityMatcher {
    pub fn new(roster: Roster) -> Self {
        Self::with_stages(roster, default_stages())
    }

    pub fn with_overrides(roster: Roster, overrides: OverrideStage) -> Self {
        Self::with_stages(roster, stages_with_overrides(overrides))
    }

    /// Uses the given stages in the given order.
    pub fn with_stages(roster: Roster, stages: Vec<Box<dyn MatchStage>>) -> Self {
        let index = CandidateIndex::build(&roster);
        debug!(
            "Built candidate index: {} players, {} distinct surnames",
            roster.len(),
            index.surname_counts.len()
        );
        Self {
            roster,
            index,
            stages,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn index(&self) -> &CandidateIndex {
        &self.index
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Runs the cascade for one abbreviated name.
    pub fn resolve(&self, name: &str) -> MatchOutcome {
        for stage in &self.stages {
            if let Some(canonical) = stage.try_match(name, &self.roster, &self.index) {
                debug!("Resolved '{name}' to '{canonical}' via {}", stage.name());
                return MatchOutcome::Matched {
                    canonical,
                    stage: stage.name(),
                };
            }
        }
        debug!("No match for '{name}'");
        MatchOutcome::NoMatch
    }

    /// Resolves names independently, preserving input order.
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Vec<MatchOutcome> {
        names.iter().map(|name| self.resolve(name.as_ref())).collect()
    }
}

impl fmt::Debug for IdentityMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityMatcher")
            .field("roster_len", &self.roster.len())
            .field("stages", &self.stage_names())
            .finish()
    }
}
