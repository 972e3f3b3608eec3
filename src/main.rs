// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # World Countries TUI.
//!
//! A terminal-based browser for the countries of the world, with a text
//! filter over one selectable field, population sorting and a detail popup.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all state, applies events one at a time and
//!   renders the UI after each of them.
//! * A **Task Worker** loads the country list without blocking the UI.
//! * An **Input Thread** forwards key presses to the main thread.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the run fails. Communication between
//! the UI and the background threads is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod source;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{error, info};

use crate::{
    components::{CountryTableState, DetailView, FilterBar},
    config::{AppConfig, Args},
    events::{AppEvent, Focus, process_events},
    model::{selection::SelectionController, view::ViewState},
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub view: ViewState,
    pub selection: SelectionController,

    pub filter_bar: FilterBar,
    pub country_table: CountryTableState,
    pub detail_view: DetailView,

    /// Last error reported by a background task.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::Filter,
            event_tx,
            event_rx,
            task_tx,
            view: ViewState::new(),
            selection: SelectionController::new(),
            filter_bar: FilterBar::new(),
            country_table: CountryTableState::new(),
            detail_view: DetailView::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, sets up the communication
/// channels, manages the terminal lifecycle, and returns an error if any
/// part of the execution fails.
fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load_config().with_args(&args);

    logging::init(&config.log_path()).context("Failed to initialise logging")?;
    info!(?config, "starting");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!("application error: {e:#}");
    }
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again. Failures are ignored, there is nothing left to do about
/// them at this point.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * A task worker to process [`AppTask`]s against the configured source.
/// * An input thread to forward keyboard presses.
///
/// After requesting the country list, it hands control to [`process_events`]
/// to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    let country_source = source::from_config(app.config.data_file.as_deref());
    tasks::spawn_task_worker(country_source, task_rx, app.event_tx.clone());

    // Key releases are reported on some platforms, only presses are wanted.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!("failed to read terminal event: {e}");
                    break;
                }
            }
        }
    });

    app.task_tx
        .send(AppTask::LoadCountries)
        .context("Failed to request country data")?;

    process_events(terminal, app)
}
