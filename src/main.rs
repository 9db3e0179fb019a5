//! linepad - terminal front end

mod runtime;

use anyhow::{Context, Result};
use clap::Parser;

use linepad::cli::CliArgs;
use linepad::config::EditorConfig;
use linepad::theme::{load_theme, Theme};

use runtime::terminal::TerminalSession;
use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let _log_guard = linepad::tracing::init(args.log_level.as_deref());
    let startup = args.into_config();

    let config = EditorConfig::load();
    let theme = load_theme(&config.theme).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}", config.theme, e);
        Theme::default()
    });

    let mut session = TerminalSession::new().context("failed to initialize terminal")?;
    let (columns, rows) = session.size().context("failed to read terminal size")?;

    let mut app = App::new(config, theme, startup, columns, rows);
    app.run(&mut session)
}
