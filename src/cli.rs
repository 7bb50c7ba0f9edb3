use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use tennis_stats::dataset::UnresolvedPolicy;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - an action flag is set (--clean, --report, --resolve)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.clean || args.report || !args.resolve.is_empty() || is_config_operation(args)
}

pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || is_config_update(args)
}

pub fn is_config_update(args: &Args) -> bool {
    args.new_main_player.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Tennis match statistics
///
/// Narrows a match results table to one player's games, resolves every
/// abbreviated opponent name ("Federer R.") to a scraped player profile
/// ("Roger Federer") and writes the merged dataset and a descriptive report.
///
/// Without an action flag an interactive menu is shown.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Clean both inputs, resolve opponents and write the merged CSV snapshots
    #[arg(short = 'c', long = "clean", help_heading = "Actions")]
    pub clean: bool,

    /// Print the report built from the snapshots and write report.json
    #[arg(short = 'r', long = "report", help_heading = "Actions")]
    pub report: bool,

    /// Resolve an abbreviated name against the player profiles. Can be repeated.
    #[arg(short = 'R', long = "resolve", value_name = "NAME", help_heading = "Actions")]
    pub resolve: Vec<String>,

    /// Player to study for this run, as written in the match results (e.g. "Nadal R.")
    #[arg(long = "main-player", help_heading = "Run Options")]
    pub main_player: Option<String>,

    /// Match results CSV for this run
    #[arg(long = "matches", value_name = "CSV", help_heading = "Run Options")]
    pub matches: Option<String>,

    /// Player profiles JSON for this run
    #[arg(long = "players", value_name = "JSON", help_heading = "Run Options")]
    pub players: Option<String>,

    /// Output directory for this run
    #[arg(long = "output-dir", value_name = "DIR", help_heading = "Run Options")]
    pub output_dir: Option<String>,

    /// What to do with games whose opponent cannot be resolved: keep, drop or flag
    #[arg(long = "unresolved", value_name = "POLICY", help_heading = "Run Options")]
    pub unresolved: Option<UnresolvedPolicy>,

    /// Update the main player in config.
    #[arg(long = "set-main-player", help_heading = "Configuration")]
    pub new_main_player: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging for the tennis_stats modules.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_interactive() {
        let args = Args::parse_from(["tennis_stats"]);
        assert!(!is_noninteractive_mode(&args));
    }

    #[test]
    fn test_action_flags() {
        let args = Args::parse_from(["tennis_stats", "-c", "--unresolved", "flag"]);
        assert!(args.clean);
        assert_eq!(args.unresolved, Some(UnresolvedPolicy::Flag));
        assert!(is_noninteractive_mode(&args));

        let args = Args::parse_from(["tennis_stats", "-R", "Federer R.", "-R", "Djokovic N."]);
        assert_eq!(args.resolve, vec!["Federer R.", "Djokovic N."]);
        assert!(is_noninteractive_mode(&args));
    }

    #[test]
    fn test_config_flags() {
        let args = Args::parse_from(["tennis_stats", "--set-main-player", "Federer R."]);
        assert!(is_config_update(&args));
        assert!(is_noninteractive_mode(&args));

        let args = Args::parse_from(["tennis_stats", "-l"]);
        assert!(is_config_operation(&args));
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        assert!(Args::try_parse_from(["tennis_stats", "--unresolved", "ignore"]).is_err());
    }
}
