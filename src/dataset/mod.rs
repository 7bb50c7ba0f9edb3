//! Loading, cleaning, merging and exporting of the two input datasets.
//!
//! - `models`: match rows, scraped profiles and their cleaned forms
//! - `loading`: CSV match results and JSON profiles
//! - `cleaning`: main-player filtering, unit stripping, great-serve flag
//! - `merge`: opponent resolution and the profile join
//! - `export`: CSV snapshots of the results

pub mod cleaning;
pub mod export;
pub mod loading;
pub mod merge;
pub mod models;

pub use cleaning::{clean_profiles, filter_games, is_winner, prepare_games, quantile, set_opponent};
pub use export::{
    read_games_csv, read_players_csv, write_games_csv, write_players_csv, write_unresolved_csv,
};
pub use loading::{load_matches, load_profiles};
pub use merge::{DatasetMerger, MergeOutput, ResolutionSummary, UnresolvedOpponent, UnresolvedPolicy};
pub use models::{CleanPlayer, GameRow, MatchRecord, MergedGame, PlayerSnapshot, RawProfile};
