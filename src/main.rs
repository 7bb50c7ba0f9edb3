// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use commands::{
    handle_clean_command, handle_config_update_command, handle_list_config_command,
    handle_report_command, handle_resolve_command, load_run_config,
};
use logging::setup_logging;
use tennis_stats::error::AppError;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Guard must stay alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command();
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args);
    }

    let config = load_run_config(&args)?;

    if !cli::is_noninteractive_mode(&args) {
        return app::run_interactive(&config);
    }

    if args.clean {
        handle_clean_command(&config)?;
    }
    if args.report {
        handle_report_command(&config)?;
    }
    if !args.resolve.is_empty() {
        handle_resolve_command(&config, &args.resolve)?;
    }

    Ok(())
}
