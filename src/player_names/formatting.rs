//! Basic player name helpers.
//!
//! The match results use abbreviated names (`"Nadal R."`, `"Del Potro J.M."`)
//! while scraped profiles use canonical full names (`"Rafael Nadal"`).
//! These functions derive the pieces both formats are compared on:
//! - Surname (last token) and given-name initial of a canonical name
//! - The trailing names after the given name, and the abbreviated form built from them
//! - Leading surname and initial part of an abbreviated name
//! - Hyphen-collapsed forms for double surnames

/// Returns the last whitespace-delimited token of a full name.
///
/// # Examples
/// ```
/// use tennis_stats::player_names::surname_of;
///
/// assert_eq!(surname_of("Rafael Nadal"), "Nadal");
/// assert_eq!(surname_of("Roberto Bautista Agut"), "Agut");
/// assert_eq!(surname_of(""), "");
/// ```
pub fn surname_of(full_name: &str) -> &str {
    full_name.split_whitespace().last().unwrap_or("")
}

/// Returns the first whitespace-delimited token of a name.
///
/// For abbreviated names this is the (first) surname: `"Nadal R."` gives `"Nadal"`.
pub fn leading_token(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// Returns the first character of the given name, if any.
pub fn initial_of(full_name: &str) -> Option<char> {
    leading_token(full_name).chars().next()
}

/// Returns everything after the given name.
///
/// Single-token names have no given name to strip and are returned whole.
///
/// # Examples
/// ```
/// use tennis_stats::player_names::trailing_names;
///
/// assert_eq!(trailing_names("Juan Martin Del Potro"), "Martin Del Potro");
/// assert_eq!(trailing_names("Rafael Nadal"), "Nadal");
/// assert_eq!(trailing_names("Guga"), "Guga");
/// ```
pub fn trailing_names(full_name: &str) -> &str {
    let trimmed = full_name.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim_start(),
        None => trimmed,
    }
}

/// Builds the abbreviated `"<surname> <initial>."` form of a canonical name.
///
/// The surname part is everything after the given name, so compound surnames
/// are kept whole. Returns `None` for names with a single token.
///
/// # Examples
/// ```
/// use tennis_stats::player_names::surname_initial_form;
///
/// assert_eq!(surname_initial_form("Rafael Nadal").as_deref(), Some("Nadal R."));
/// assert_eq!(
///     surname_initial_form("Roberto Bautista Agut").as_deref(),
///     Some("Bautista Agut R.")
/// );
/// assert_eq!(surname_initial_form("Guga"), None);
/// ```
pub fn surname_initial_form(full_name: &str) -> Option<String> {
    let trimmed = full_name.trim();
    let (given, rest) = trimmed.split_once(char::is_whitespace)?;
    let initial = given.chars().next()?;
    Some(format!("{} {initial}.", rest.trim_start()))
}

/// Splits an abbreviated name into its leading surname and initial part.
///
/// The initial part is everything after the first token, cut at its last dot:
/// `"Nadal R."` gives `("Nadal", "R")` and `"Del Potro J.M."` gives `("Del", "Potro J.M")`.
/// Returns `None` when the name has a single token.
pub fn abbreviated_parts(name: &str) -> Option<(&str, &str)> {
    let trimmed = name.trim();
    let (surname, rest) = trimmed.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let initial = rest.rsplit_once('.').map_or(rest, |(head, _)| head);
    Some((surname, initial))
}

/// Replaces hyphens with spaces, turning `"Carreno-Busta"` into `"Carreno Busta"`.
pub fn hyphen_collapsed(name: &str) -> String {
    name.replace('-', " ")
}

/// Returns the surname phrase of an abbreviated name after collapsing hyphens:
/// every token except the trailing initial.
///
/// # Examples
/// ```
/// use tennis_stats::player_names::collapsed_surname_phrase;
///
/// assert_eq!(collapsed_surname_phrase("Del Potro-Gomez J."), "Del Potro Gomez");
/// assert_eq!(collapsed_surname_phrase("Nadal R."), "Nadal");
/// ```
pub fn collapsed_surname_phrase(name: &str) -> String {
    let collapsed = hyphen_collapsed(name.trim());
    match collapsed.rsplit_once(' ') {
        Some((head, _)) => head.to_string(),
        None => collapsed,
    }
}
