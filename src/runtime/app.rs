//! Event loop: read input, update the model, run commands, redraw

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use linepad::cli::StartupConfig;
use linepad::commands::Cmd;
use linepad::config::EditorConfig;
use linepad::file;
use linepad::messages::{AppMsg, EditorMsg, Msg};
use linepad::model::{AppModel, HELP_MESSAGE};
use linepad::theme::Theme;
use linepad::update::update;

use super::input::map_key;
use super::terminal::TerminalSession;
use super::view;

/// How often to wake up without input so expired messages disappear
const IDLE_REDRAW: Duration = Duration::from_millis(500);

/// Rows below the text area: status line and message line
const RESERVED_ROWS: u16 = 2;

pub struct App {
    model: AppModel,
}

impl App {
    /// Build the model for a terminal of `columns` x `rows`
    pub fn new(
        config: EditorConfig,
        theme: Theme,
        startup: StartupConfig,
        columns: u16,
        rows: u16,
    ) -> Self {
        let mut model = AppModel::with_config(
            config,
            theme,
            rows.saturating_sub(RESERVED_ROWS) as usize,
            columns as usize,
        );

        if let Some(path) = &startup.path {
            model.open(path);
        }
        if model.ui.transient_message.is_none() {
            model.set_status(HELP_MESSAGE);
        }
        if let Some(line) = startup.initial_line {
            update(&mut model, Msg::Editor(EditorMsg::GotoLine(line)));
        }

        Self { model }
    }

    pub fn run(&mut self, session: &mut TerminalSession) -> Result<()> {
        tracing::info!("event loop started");
        loop {
            self.model.scroll();
            view::draw(&self.model, session.writer()).context("failed to draw frame")?;

            if !event::poll(IDLE_REDRAW).context("failed to poll terminal events")? {
                continue;
            }

            let msg = match event::read().context("failed to read terminal event")? {
                Event::Key(key) => map_key(&self.model, key),
                Event::Resize(columns, rows) => Some(Msg::resize(
                    rows.saturating_sub(RESERVED_ROWS) as usize,
                    columns as usize,
                )),
                _ => None,
            };

            let Some(msg) = msg else {
                continue;
            };

            if let Some(cmd) = update(&mut self.model, msg) {
                if self.execute(cmd) {
                    break;
                }
            }
        }
        tracing::info!("event loop finished");
        Ok(())
    }

    /// Run a command; returns true when the app should exit
    fn execute(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None | Cmd::Redraw => false,
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.into_iter().fold(false, |quit, cmd| self.execute(cmd) || quit),
            Cmd::SaveFile { path, contents } => {
                let result = file::save(&path, &contents).map_err(|e| e.to_string());
                match &result {
                    Ok(bytes) => tracing::info!("Wrote {} bytes to {}", bytes, path.display()),
                    Err(e) => tracing::warn!("Failed to write {}: {}", path.display(), e),
                }
                update(&mut self.model, Msg::App(AppMsg::SaveCompleted(result)))
                    .is_some_and(|next| self.execute(next))
            }
        }
    }
}
