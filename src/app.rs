use crate::commands::{handle_clean_command, handle_report_command, handle_resolve_command};
use crossterm::{execute, style::Stylize, terminal::SetTitle};
use std::io::{BufRead, Write, stdin, stdout};
use tennis_stats::config::Config;
use tennis_stats::error::AppError;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Clean,
    Report,
    Resolve,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Clean,
            "2" => MenuChoice::Report,
            "3" => MenuChoice::Resolve,
            _ => MenuChoice::Quit,
        }
    }
}

fn print_menu(config: &Config) {
    println!();
    println!("{}", format!("tennis_stats: {}", config.main_player).cyan().bold());
    println!("  1) Clean datasets and resolve opponents");
    println!("  2) Show report");
    println!("  3) Resolve a player name");
    println!("  any other key to quit");
}

fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    stdout().flush()?;
    let mut input = String::new();
    if stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Run the interactive application flow.
///
/// - Shows the menu until a quit choice or end of input
/// - Errors from one action are printed and logged; the menu stays open
pub fn run_interactive(config: &Config) -> Result<(), AppError> {
    execute!(stdout(), SetTitle("tennis_stats"))?;

    loop {
        print_menu(config);
        let Some(input) = read_line("> ")? else {
            return Ok(());
        };

        let result = match MenuChoice::parse(&input) {
            MenuChoice::Clean => handle_clean_command(config),
            MenuChoice::Report => handle_report_command(config),
            MenuChoice::Resolve => match read_line("Name: ")? {
                Some(name) if !name.is_empty() => handle_resolve_command(config, &[name]),
                _ => Ok(()),
            },
            MenuChoice::Quit => return Ok(()),
        };

        if let Err(e) = result {
            error!("Menu action failed: {e}");
            println!("{}", format!("Error: {e}").red());
        }
    }
}
