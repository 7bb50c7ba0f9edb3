//! Reference roster of canonical player identities.

use super::formatting::{initial_of, surname_of};

/// One canonical player identity with its derived name parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub full_name: String,
    pub surname: String,
    pub initial: Option<char>,
}

impl PlayerRecord {
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into().trim().to_string();
        let surname = surname_of(&full_name).to_string();
        let initial = initial_of(&full_name);
        Self {
            full_name,
            surname,
            initial,
        }
    }
}

/// Ordered collection of canonical player names.
///
/// Order is significant: stages that scan the roster return the first entry
/// that fits, so the roster keeps the order the profiles were loaded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

impl Roster {
    /// Builds a roster from canonical names, skipping blank entries.
    ///
    /// # Example
    /// ```
    /// use tennis_stats::player_names::Roster;
    ///
    /// let roster = Roster::from_names(["Rafael Nadal", "  ", "Roger Federer"]);
    /// assert_eq!(roster.len(), 2);
    /// assert_eq!(roster.names().collect::<Vec<_>>(), ["Rafael Nadal", "Roger Federer"]);
    /// ```
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .map(PlayerRecord::new)
            .filter(|record| !record.full_name.is_empty())
            .collect();
        Self { players }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|record| record.full_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether the exact canonical name is part of the roster.
    pub fn contains(&self, full_name: &str) -> bool {
        self.names().any(|name| name == full_name)
    }
}
