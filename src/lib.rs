//! Tennis Match Statistics Library
//!
//! This library narrows a match results table to one player's games, resolves
//! the abbreviated opponent names of that table ("Federer R.") to the
//! canonical names of scraped player profiles ("Roger Federer"), joins the two
//! datasets and summarizes the result.
//!
//! # Examples
//!
//! ```rust
//! use tennis_stats::player_names::{IdentityMatcher, Roster};
//!
//! let roster = Roster::from_names(["Rafael Nadal", "Roger Federer", "Novak Djokovic"]);
//! let matcher = IdentityMatcher::new(roster);
//!
//! let resolved: Vec<String> = matcher
//!     .resolve_all(&["Federer R.", "Djokovic N.", "Nadal R."])
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(resolved, ["Roger Federer", "Novak Djokovic", "Rafael Nadal"]);
//! assert!(!matcher.resolve("Zzyzx Q.").is_match());
//! ```
//!
//! ```rust,no_run
//! use tennis_stats::config::Config;
//! use tennis_stats::error::AppError;
//! use tennis_stats::pipeline::{run_clean, run_report};
//!
//! fn main() -> Result<(), AppError> {
//!     let config = Config::load()?;
//!     let summary = run_clean(&config)?;
//!     println!("{} games merged", summary.games);
//!
//!     let report = run_report(&config)?;
//!     println!("{} wins", report.wins);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod player_names;
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use dataset::{DatasetMerger, MergedGame, UnresolvedPolicy};
pub use error::AppError;
pub use player_names::{IdentityMatcher, MatchOutcome, Roster};
pub use report::Report;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
