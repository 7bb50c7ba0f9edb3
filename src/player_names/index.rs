//! Uniqueness indices over the roster.
//!
//! A matching stage may only commit to a roster entry when the roster holds
//! exactly one candidate consistent with the abbreviated name. The counts
//! built here answer that question without rescanning the roster per row.

use std::collections::HashMap;

use super::formatting::{surname_initial_form, trailing_names};
use super::roster::Roster;

/// Lookup structures built once per matching run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateIndex {
    /// Surname (last token) to number of roster entries ending with it
    pub surname_counts: HashMap<String, usize>,
    /// `"<surname> <initial>."` to number of roster entries producing it
    pub surname_initial_counts: HashMap<String, usize>,
    /// Trailing names of every roster entry, in roster order, not deduplicated
    pub surname_list: Vec<String>,
}

impl CandidateIndex {
    /// Builds all indices in one pass over the roster.
    ///
    /// # Example
    /// ```
    /// use tennis_stats::player_names::{CandidateIndex, Roster};
    ///
    /// let roster = Roster::from_names(["Andy Murray", "Jamie Murray", "Roger Federer"]);
    /// let index = CandidateIndex::build(&roster);
    ///
    /// assert!(!index.is_unique_surname("Murray"));
    /// assert!(index.is_unique_surname("Federer"));
    /// assert!(index.is_unique_surname_initial("Murray A."));
    /// ```
    pub fn build(roster: &Roster) -> Self {
        let mut index = CandidateIndex {
            surname_counts: HashMap::with_capacity(roster.len()),
            surname_initial_counts: HashMap::with_capacity(roster.len()),
            surname_list: Vec::with_capacity(roster.len()),
        };

        for record in roster.iter() {
            *index
                .surname_counts
                .entry(record.surname.clone())
                .or_default() += 1;

            if let Some(form) = surname_initial_form(&record.full_name) {
                *index.surname_initial_counts.entry(form).or_default() += 1;
            }

            index
                .surname_list
                .push(trailing_names(&record.full_name).to_string());
        }

        index
    }

    /// Number of roster entries whose last token is `surname`.
    pub fn surname_count(&self, surname: &str) -> usize {
        self.surname_counts.get(surname).copied().unwrap_or(0)
    }

    /// Number of roster entries whose abbreviated form equals `form`.
    pub fn surname_initial_count(&self, form: &str) -> usize {
        self.surname_initial_counts.get(form).copied().unwrap_or(0)
    }

    pub fn is_unique_surname(&self, surname: &str) -> bool {
        self.surname_count(surname) == 1
    }

    pub fn is_unique_surname_initial(&self, form: &str) -> bool {
        self.surname_initial_count(form) == 1
    }

    /// Whether some roster entry has exactly `phrase` as its trailing names.
    pub fn contains_surname_phrase(&self, phrase: &str) -> bool {
        self.surname_list.iter().any(|surname| surname == phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::from_names([
            "Rafael Nadal",
            "Andy Murray",
            "Jamie Murray",
            "Juan Martin Del Potro",
            "Pablo Carreno-Busta",
            "Guga",
        ])
    }

    #[test]
    fn test_surname_counts() {
        let index = CandidateIndex::build(&sample_roster());
        assert_eq!(index.surname_count("Murray"), 2);
        assert_eq!(index.surname_count("Nadal"), 1);
        assert_eq!(index.surname_count("Potro"), 1);
        assert_eq!(index.surname_count("Guga"), 1);
        assert_eq!(index.surname_count("Federer"), 0);
    }

    #[test]
    fn test_surname_initial_counts() {
        let index = CandidateIndex::build(&sample_roster());
        assert_eq!(index.surname_initial_count("Murray A."), 1);
        assert_eq!(index.surname_initial_count("Murray J."), 1);
        assert_eq!(index.surname_initial_count("Martin Del Potro J."), 1);
        assert_eq!(index.surname_initial_count("Carreno-Busta P."), 1);
        // Single-token names produce no abbreviated form
        assert_eq!(index.surname_initial_counts.len(), 5);
    }

    #[test]
    fn test_shared_surname_and_initial_is_not_unique() {
        let roster = Roster::from_names(["Andy Murray", "Alex Murray"]);
        let index = CandidateIndex::build(&roster);
        assert_eq!(index.surname_initial_count("Murray A."), 2);
        assert!(!index.is_unique_surname_initial("Murray A."));
    }

    #[test]
    fn test_surname_list_keeps_roster_order() {
        let index = CandidateIndex::build(&sample_roster());
        assert_eq!(
            index.surname_list,
            vec![
                "Nadal",
                "Murray",
                "Murray",
                "Martin Del Potro",
                "Carreno-Busta",
                "Guga"
            ]
        );
        assert!(index.contains_surname_phrase("Martin Del Potro"));
        assert!(!index.contains_surname_phrase("Del Potro"));
    }

    #[test]
    fn test_empty_roster_index() {
        let index = CandidateIndex::build(&Roster::default());
        assert!(index.surname_counts.is_empty());
        assert!(index.surname_list.is_empty());
        assert!(!index.is_unique_surname("Nadal"));
    }
}
