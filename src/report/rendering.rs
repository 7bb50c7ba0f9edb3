//! Text and JSON output of a [`Report`].

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use super::summaries::Report;
use crate::error::AppError;

/// Section titles in rendering order, used by callers that style headings.
pub const SECTION_TITLES: [&str; 6] = [
    "Win rate by surface",
    "Losses by surface, opponent hand and serve",
    "Countries most defeated",
    "Nemesis players",
    "Ace % across players",
    "Record by season",
];

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Renders every report section as plain text.
///
/// Section titles are the lines from [`SECTION_TITLES`]; each is followed by
/// its rows and a blank line.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    let losses = report.games - report.wins;
    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "{}: {} games, {} won, {} lost\n",
        report.main_player, report.games, report.wins, losses
    );

    let _ = writeln!(out, "{}", SECTION_TITLES[0]);
    for surface in &report.surfaces {
        let _ = writeln!(
            out,
            "  {:<8} {:>4}/{:<4} {:>5.1}%",
            surface.surface, surface.wins, surface.total, surface.win_pct
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{}", SECTION_TITLES[1]);
    let _ = writeln!(
        out,
        "  {:<8} {:<6} {:<6} {:>5} {:>5} {:>7}",
        "surface", "leftie", "server", "games", "wins", "loss %"
    );
    for detail in &report.loss_details {
        let _ = writeln!(
            out,
            "  {:<8} {:<6} {:<6} {:>5} {:>5} {:>6.1}%",
            detail.surface,
            yes_no(detail.left_handed),
            yes_no(detail.great_serve),
            detail.total,
            detail.wins,
            detail.loss_pct
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{}", SECTION_TITLES[2]);
    for (rank, country) in report.top_defeated_countries.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({} wins)", rank + 1, country.country, country.wins);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", SECTION_TITLES[3]);
    for (rank, nemesis) in report.nemeses.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} ({} losses)",
            rank + 1,
            nemesis.opponent,
            nemesis.losses
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{}", SECTION_TITLES[4]);
    match &report.aces {
        Some(aces) => {
            let _ = writeln!(
                out,
                "  {} players: min {:.1}, q1 {:.1}, median {:.1}, q3 {:.1}, max {:.1}",
                aces.players, aces.min, aces.q1, aces.median, aces.q3, aces.max
            );
            match aces.main_player {
                Some(value) => {
                    let _ = writeln!(out, "  {}: {:.1}", report.main_player, value);
                }
                None => {
                    let _ = writeln!(out, "  {}: no ace data", report.main_player);
                }
            }
        }
        None => {
            let _ = writeln!(out, "  no ace data");
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{}", SECTION_TITLES[5]);
    for season in &report.seasons {
        let _ = writeln!(out, "  {}  {:>3}-{:<3}", season.year, season.wins, season.losses);
    }

    out
}

/// Writes the report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &Report) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("Saved report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::summaries::{Nemesis, SeasonRecord, SurfaceRecord};
    use tempfile::tempdir;

    fn sample() -> Report {
        Report {
            main_player: "Rafael Nadal".to_string(),
            games: 3,
            wins: 2,
            surfaces: vec![SurfaceRecord {
                surface: "Clay".to_string(),
                wins: 2,
                total: 3,
                win_pct: 66.7,
            }],
            loss_details: Vec::new(),
            top_defeated_countries: Vec::new(),
            nemeses: vec![Nemesis {
                opponent: "Novak Djokovic".to_string(),
                losses: 1,
            }],
            aces: None,
            seasons: vec![SeasonRecord {
                year: 2010,
                wins: 2,
                losses: 1,
            }],
        }
    }

    #[test]
    fn test_render_contains_every_section() {
        let text = render_report(&sample());
        assert!(text.starts_with("Rafael Nadal: 3 games, 2 won, 1 lost"));
        for title in SECTION_TITLES {
            assert!(text.contains(title), "missing section {title}");
        }
        assert!(text.contains("66.7%"));
        assert!(text.contains("1. Novak Djokovic (1 losses)"));
        assert!(text.contains("no ace data"));
        assert!(text.contains("2010"));
    }

    #[test]
    fn test_write_report_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        write_report_json(&path, &sample()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["main_player"], "Rafael Nadal");
        assert_eq!(value["surfaces"][0]["win_pct"], 66.7);
        assert_eq!(value["aces"], serde_json::Value::Null);
    }
}
