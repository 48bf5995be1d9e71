use anyhow::{Context, Result};
use clap::Parser;

use menu_cli::utils::logger;
use menu_cli::{ChoiceRegistry, MenuLoop, MenuOutcome, MenuTheme, TerminalConsole};

#[derive(Parser)]
#[command(name = "menu-cli", version)]
#[command(about = "Menu CLI - pick an action from a numbered menu", long_about = None)]
struct Cli {
    /// Write debug logs to .menu-cli/logs/latest.log
    #[arg(short, long)]
    debug: bool,
}

/// 128 + SIGINT
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() -> Result<()> {
    // Panic reports only; errors are reported through anyhow
    let _ = color_eyre::install();

    let cli = Cli::parse();

    if cli.debug {
        if let Err(e) = logger::init_file_logger(&logger::default_log_path()) {
            eprintln!("⚠️ Failed to initialize logger: {}", e);
        }
    }

    let console = TerminalConsole::new();
    tracing::debug!(interactive = console.is_interactive(), "starting menu");

    let outcome = MenuLoop::new(ChoiceRegistry::standard(), console)
        .with_theme(MenuTheme::for_stdout())
        .run()
        .context("Menu loop failed")?;

    match outcome {
        MenuOutcome::Exited => Ok(()),
        MenuOutcome::InputClosed => {
            tracing::warn!("input closed before exit was confirmed");
            Ok(())
        }
        MenuOutcome::Interrupted => {
            // same status a shell reports for SIGINT at the line prompt
            tracing::warn!("interrupted at a key prompt");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
}
