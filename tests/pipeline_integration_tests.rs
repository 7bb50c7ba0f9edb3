use std::fs;
use std::path::Path;

use tempfile::{TempDir, tempdir};
use tennis_stats::config::Config;
use tennis_stats::constants::outputs;
use tennis_stats::dataset::{UnresolvedPolicy, read_games_csv, read_players_csv};
use tennis_stats::error::AppError;
use tennis_stats::pipeline::{resolve_names, run_clean, run_report};

const MATCHES_CSV: &str = "\
ATP,Location,Tournament,Date,Series,Court,Surface,Round,Best of,Winner,Loser,WRank,LRank,W1,L1,W2,L2,W3,L3,W4,L4,W5,L5,Wsets,Lsets,Comment,B365W,B365L
33,Paris,French Open,2008-06-08,Grand Slam,Outdoor,Clay,The Final,5,Nadal R.,Federer R.,2,1,6,1,6,3,6,0,,,,,3,0,Completed,1.25,3.75
40,London,Wimbledon,2011-07-03,Grand Slam,Outdoor,Grass,The Final,5,Djokovic N.,Nadal R.,2,1,6,4,6,1,1,6,6,3,,,3,1,Completed,2.1,1.7
41,Halle,Gerry Weber Open,2011-06-20,ATP250,Outdoor,Grass,1st Round,3,Nadal R.,Zzyzx Q.,1,300,6,2,6,2,,,,,,,2,0,Completed,1.01,15
2,Melbourne,Australian Open,2012-01-20,Grand Slam,Outdoor,Hard,3rd Round,5,Federer R.,Murray A.,3,4,6,4,6,4,6,4,,,,,3,0,Completed,1.5,2.5
3,Melbourne,Australian Open,2012-01-22,Grand Slam,Outdoor,Hard,4th Round,5,Nadal R.,Bautista R.,2,60,6,4,6,4,6,2,,,,,3,0,Completed,1.02,12
";

const PLAYERS_JSON: &str = r#"[
  {"name": "Rafael Nadal", "Country": "Spain", "Plays": "Left-handed", "Backhand": "Two-handed",
   "Height": "185 cm", "Weight": "85 kg", "Ace %": "3.9%", "Double Fault %": "2.1%"},
  {"name": "Roger Federer", "Country": "Switzerland", "Plays": "Right-handed", "Backhand": "One-handed",
   "Height": "185 cm", "Weight": "85 kg", "Ace %": "11.2%", "Double Fault %": "2.6%"},
  {"name": "Novak Djokovic", "Country": "Serbia", "Plays": "Right-handed", "Backhand": "Two-handed",
   "Height": "188 cm", "Weight": "77 kg", "Ace %": "6.5%", "Double Fault %": "2.7%"},
  {"name": "Andy Murray", "Country": "United Kingdom", "Plays": "Right-handed", "Backhand": "Two-handed",
   "Height": "191 cm", "Weight": "84 kg", "Ace %": "8.0%", "Double Fault %": "3.2%"}
]"#;

fn fixture(policy: UnresolvedPolicy) -> (TempDir, Config) {
    let dir = tempdir().unwrap();
    let matches_path = dir.path().join("Data.csv");
    let players_path = dir.path().join("players_info.json");
    fs::write(&matches_path, MATCHES_CSV).unwrap();
    fs::write(&players_path, PLAYERS_JSON).unwrap();

    let config = Config {
        matches_csv: matches_path.to_string_lossy().to_string(),
        players_json: players_path.to_string_lossy().to_string(),
        output_dir: dir.path().join("out").to_string_lossy().to_string(),
        unresolved_policy: policy,
        ..Default::default()
    };
    (dir, config)
}

fn out_file(config: &Config, name: &str) -> std::path::PathBuf {
    Path::new(&config.output_dir).join(name)
}

#[test]
fn test_clean_run_with_flag_policy() {
    let (_dir, config) = fixture(UnresolvedPolicy::Flag);

    let summary = run_clean(&config).unwrap();

    assert_eq!(summary.main_player, "Rafael Nadal");
    assert_eq!(summary.games, 4);
    assert_eq!(summary.players, 4);
    assert_eq!(summary.resolution.by_stage.get("unique_surname"), Some(&2));
    assert_eq!(summary.resolution.by_stage.get("override"), Some(&1));
    assert_eq!(summary.resolution.unresolved_games, 1);
    assert_eq!(summary.resolution.missing_profiles, 1);
    assert_eq!(summary.outputs.len(), 3);

    let games = read_games_csv(&out_file(&config, outputs::CLEAN_GAMES_CSV)).unwrap();
    let opponents: Vec<&str> = games.iter().map(|g| g.opponent.as_str()).collect();
    assert_eq!(
        opponents,
        ["Roger Federer", "Novak Djokovic", "Zzyzx Q.", "Roberto Bautista Agut"]
    );
    assert_eq!(games[0].country.as_deref(), Some("Switzerland"));
    assert_eq!(games[0].great_serve, Some(true));
    assert!(games[0].is_winner);
    assert!(!games[1].is_winner);
    assert!(!games[2].resolved);

    let unresolved = fs::read_to_string(out_file(&config, outputs::UNRESOLVED_CSV)).unwrap();
    assert_eq!(unresolved, "Opponent,Games\nZzyzx Q.,1\n");

    let players = read_players_csv(&out_file(&config, outputs::CLEAN_PLAYERS_CSV)).unwrap();
    assert_eq!(players.len(), 4);
    assert_eq!(players[0].ace_pct, Some(3.9));
    assert_eq!(players[0].great_serve, Some(false));
}

#[test]
fn test_clean_run_with_drop_policy() {
    let (_dir, config) = fixture(UnresolvedPolicy::Drop);

    let summary = run_clean(&config).unwrap();

    assert_eq!(summary.games, 3);
    assert_eq!(summary.resolution.dropped_games, 1);
    assert_eq!(summary.outputs.len(), 2);
    assert!(!out_file(&config, outputs::UNRESOLVED_CSV).exists());
}

#[test]
fn test_report_after_clean() {
    let (_dir, config) = fixture(UnresolvedPolicy::KeepOriginal);
    run_clean(&config).unwrap();

    let report = run_report(&config).unwrap();

    assert_eq!(report.main_player, "Rafael Nadal");
    assert_eq!(report.games, 4);
    assert_eq!(report.wins, 3);

    let surfaces: Vec<(&str, f64)> = report
        .surfaces
        .iter()
        .map(|s| (s.surface.as_str(), s.win_pct))
        .collect();
    assert_eq!(surfaces, [("Clay", 100.0), ("Grass", 50.0), ("Hard", 100.0)]);

    assert_eq!(report.nemeses.len(), 1);
    assert_eq!(report.nemeses[0].opponent, "Novak Djokovic");
    assert_eq!(report.top_defeated_countries[0].country, "Switzerland");
    assert_eq!(report.top_defeated_countries[0].wins, 1);

    let aces = report.aces.as_ref().unwrap();
    assert_eq!(aces.players, 4);
    assert_eq!(aces.main_player, Some(3.9));

    let years: Vec<i32> = report.seasons.iter().map(|s| s.year).collect();
    assert_eq!(years, [2008, 2011, 2012]);

    let json = fs::read_to_string(out_file(&config, outputs::REPORT_JSON)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["wins"], 3);
}

#[test]
fn test_report_without_snapshots_fails() {
    let (_dir, config) = fixture(UnresolvedPolicy::KeepOriginal);
    let result = run_report(&config);
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_unknown_main_player_has_no_games() {
    let (_dir, mut config) = fixture(UnresolvedPolicy::KeepOriginal);
    config.main_player = "Nobody X.".to_string();

    let error = run_clean(&config).unwrap_err();
    assert!(matches!(error, AppError::NoGames(_)));
    assert!(error.is_data_error());
}

#[test]
fn test_resolve_names_against_profiles() {
    let (_dir, config) = fixture(UnresolvedPolicy::KeepOriginal);

    let resolved = resolve_names(&config, &["Murray A.", "Zzyzx Q."]).unwrap();

    assert_eq!(resolved[0].0, "Murray A.");
    assert_eq!(resolved[0].1.canonical(), Some("Andy Murray"));
    assert!(!resolved[1].1.is_match());
}
