use crate::cli::Args;
use crossterm::{execute, style::Stylize, terminal::SetTitle};
use std::io::stdout;
use tennis_stats::config::Config;
use tennis_stats::error::AppError;
use tennis_stats::pipeline::{resolve_names, run_clean, run_report};
use tennis_stats::report::{SECTION_TITLES, render_report};
use tracing::info;

const TERMINAL_TITLE: &str = "tennis_stats";

/// Applies the run-level flags on top of the loaded config.
///
/// Nothing here is persisted.
pub fn apply_run_overrides(config: &mut Config, args: &Args) {
    if let Some(main_player) = &args.main_player {
        config.main_player = main_player.clone();
        config.main_player_full_name = None;
    }
    if let Some(matches) = &args.matches {
        config.matches_csv = matches.clone();
    }
    if let Some(players) = &args.players {
        config.players_json = players.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(policy) = args.unresolved {
        config.unresolved_policy = policy;
    }
}

/// Loads the config and applies the run-level flags.
pub fn load_run_config(args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load()?;
    apply_run_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Handles the --clean command.
///
/// Runs the whole cleaning pipeline and prints where the snapshots went and
/// how the opponents were resolved.
pub fn handle_clean_command(config: &Config) -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    let summary = run_clean(config)?;
    let resolution = &summary.resolution;

    println!("\n{}", format!("Cleaned games of {}", summary.main_player).cyan().bold());
    println!("Games kept:        {}", summary.games);
    println!("Player profiles:   {}", summary.players);
    println!(
        "Resolved:          {} of {}",
        resolution.resolved_games(),
        resolution.total_games
    );
    for (stage, count) in &resolution.by_stage {
        println!("  {stage:<20} {count}");
    }
    if resolution.unresolved_games > 0 {
        println!(
            "{}",
            format!(
                "Unresolved:        {} games, {} opponents",
                resolution.unresolved_games, summary.unresolved_opponents
            )
            .yellow()
        );
    }
    if resolution.dropped_games > 0 {
        println!("Dropped:           {}", resolution.dropped_games);
    }
    if resolution.missing_profiles > 0 {
        println!("Without profile:   {}", resolution.missing_profiles);
    }
    for path in &summary.outputs {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Handles the --report command.
///
/// Section titles are highlighted; everything else is printed as rendered.
pub fn handle_report_command(config: &Config) -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    let report = run_report(config)?;
    let text = render_report(&report);
    for (index, line) in text.lines().enumerate() {
        if index == 0 {
            println!("{}", line.bold());
        } else if SECTION_TITLES.contains(&line) {
            println!("{}", line.cyan().bold());
        } else {
            println!("{line}");
        }
    }
    info!("Report built for {}", report.main_player);
    Ok(())
}

/// Handles the --resolve command.
pub fn handle_resolve_command(config: &Config, names: &[String]) -> Result<(), AppError> {
    for (name, outcome) in resolve_names(config, names)? {
        match outcome.stage() {
            Some(stage) => println!("{name} -> {} ({stage})", outcome.to_string().green()),
            None => println!("{name} -> {}", outcome.to_string().red()),
        }
    }
    Ok(())
}

/// Handles the --list-config command.
pub fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display()
}

/// Handles configuration update commands (--set-main-player, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(&Config::get_config_path(), args)?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the configuration flags to the file at `config_path`.
///
/// Starts from the stored file, not the effective config, so `TENNIS_STATS_*`
/// environment values never end up in the file.
fn update_config_file(config_path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_stored(config_path)?;

    if let Some(new_main_player) = &args.new_main_player {
        config.main_player = new_main_player.clone();
        config.main_player_full_name = None;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(config_path)?;
    info!("Saved configuration to {config_path}");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::tempdir;
    use tennis_stats::config::{ENV_DATA_DIR, ENV_LOG_FILE, ENV_MAIN_PLAYER};
    use tennis_stats::dataset::UnresolvedPolicy;

    fn clear_env() {
        unsafe {
            std::env::remove_var(ENV_MAIN_PLAYER);
            std::env::remove_var(ENV_DATA_DIR);
            std::env::remove_var(ENV_LOG_FILE);
        }
    }

    #[test]
    fn test_apply_run_overrides() {
        let args = Args::parse_from([
            "tennis_stats",
            "--main-player",
            "Federer R.",
            "--matches",
            "m.csv",
            "--players",
            "p.json",
            "--output-dir",
            "out",
            "--unresolved",
            "drop",
        ]);
        let mut config = Config {
            main_player_full_name: Some("Rafael Nadal".to_string()),
            ..Default::default()
        };
        apply_run_overrides(&mut config, &args);

        assert_eq!(config.main_player, "Federer R.");
        assert_eq!(config.main_player_full_name, None);
        assert_eq!(config.matches_csv, "m.csv");
        assert_eq!(config.players_json, "p.json");
        assert_eq!(config.output_dir, "out");
        assert_eq!(config.unresolved_policy, UnresolvedPolicy::Drop);
    }

    #[test]
    fn test_apply_run_overrides_without_flags() {
        let args = Args::parse_from(["tennis_stats", "-c"]);
        let mut config = Config::default();
        apply_run_overrides(&mut config, &args);
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_update_does_not_persist_env_overrides() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        Config {
            output_dir: "/home/me/tennis".to_string(),
            ..Default::default()
        }
        .save_to_path(&config_path_str)
        .unwrap();

        unsafe {
            std::env::set_var(ENV_DATA_DIR, "/tmp/scratch");
            std::env::set_var(ENV_LOG_FILE, "/tmp/scratch.log");
        }
        let args = Args::parse_from(["tennis_stats", "--set-main-player", "Federer R."]);
        let result = update_config_file(&config_path_str, &args);
        clear_env();
        result.unwrap();

        let stored = Config::load_from_path(&config_path_str).unwrap();
        assert_eq!(stored.main_player, "Federer R.");
        assert_eq!(stored.output_dir, "/home/me/tennis");
        assert_eq!(stored.matches_csv, Config::default().matches_csv);
        assert_eq!(stored.log_file_path, None);
    }

    #[test]
    #[serial]
    fn test_config_update_creates_missing_file() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("tennis_stats").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let args = Args::parse_from(["tennis_stats", "--set-log-file", "/var/log/tennis.log"]);
        let config = update_config_file(&config_path_str, &args).unwrap();

        assert_eq!(config.log_file_path.as_deref(), Some("/var/log/tennis.log"));
        assert_eq!(Config::load_from_path(&config_path_str).unwrap(), config);
    }
}
