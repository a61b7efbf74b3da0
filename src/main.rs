//! Main entry point for PhishCheck.
//!
//! One-shot mode prints a report and exits. Interactive mode initializes the
//! TUI terminal, runs the main event loop, and restores the terminal on exit.

use phishcheck::app::App;
use phishcheck::cli::{self, Cli, Mode};
use phishcheck::utils;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::utils::context::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize logging before anything else
    utils::logger::init_logging(args.log_dir.as_deref());

    match args.mode() {
        Mode::FromArg(text) => cli::run_once(text, args.format, args.echo_input, &mut std::io::stdout()),
        Mode::FromStdin => {
            let text = cli::read_all(&mut std::io::stdin())?;
            cli::run_once(&text, args.format, args.echo_input, &mut std::io::stdout())
        }
        Mode::Interactive { initial_text } => run_interactive(initial_text).await,
    }
}

async fn run_interactive(initial_text: Option<&str>) -> Result<()> {
    let mut terminal = ratatui::init();

    // Pasted text arrives as a single event instead of a burst of key presses
    execute!(std::io::stdout(), EnableBracketedPaste)?;

    // Context guard ensures cleanup on both normal exit and panic
    let _ctx = Context::with(|| {
        if let Err(e) = execute!(std::io::stdout(), DisableBracketedPaste) {
            tracing::error!("Failed to disable bracketed paste: {}", e);
        }
        ratatui::restore();
    });

    tracing::info!("Starting interactive checker");
    let mut app = App::new(initial_text);
    // draw 1st frame
    app.draw(&mut terminal)?;
    // run event-driven main loop of app
    app.run(&mut terminal).await
}
