//! Player name handling and identity matching.
//!
//! The match results and the scraped profiles name players differently
//! (`"Nadal R."` versus `"Rafael Nadal"`). This module reconciles the two:
//! - `formatting`: surname, initial and abbreviated-form helpers
//! - `roster`: the ordered reference collection of canonical names
//! - `index`: uniqueness counts built once per matching run
//! - `matching`: the ordered cascade of matching stages

mod formatting;
mod index;
mod matching;
mod roster;

pub use formatting::{
    abbreviated_parts, collapsed_surname_phrase, hyphen_collapsed, initial_of, leading_token,
    surname_initial_form, surname_of, trailing_names,
};

pub use index::CandidateIndex;

pub use matching::{
    BUILTIN_OVERRIDES, HyphenatedSurnameStage, IdentityMatcher, MatchOutcome, MatchStage,
    OverrideStage, SurnameInitialStage, UniqueSurnameStage, default_stages,
    stages_with_overrides,
};

pub use roster::{PlayerRecord, Roster};
