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

//! Application event handling and key routing.
//!
//! Every state change in the application goes through this module: key
//! presses from the input thread and results from the task worker arrive as
//! [`AppEvent`]s on one channel and are applied one at a time on the main
//! thread, after which the screen is redrawn.
//!
//! # Key routing
//!
//! 1. `Ctrl+C` always quits.
//! 2. While the detail popup is open it receives every key.
//! 3. Global keys: `Tab` switches focus, `F1`..`F4` pick the filter field and
//!    `F5`..`F7` press the sort buttons.
//! 4. Anything else goes to the focused component.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{Country, FilterableField, SortButton},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    CountriesLoaded(Vec<Country>),

    Error(String),

    ExitApplication,
}

/// Which component receives keys that are not handled globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Filter,
    Table,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::CountriesLoaded(countries) => handle_countries_loaded(app, countries),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::ExitApplication => {}
    }
    Ok(())
}

/// Maps keyboard input to application actions.
///
/// # Errors
///
/// Returns an error if the exit request cannot be sent to the event loop.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if app.selection.is_open() {
        if let Some(action) = app.detail_view.process_event(&event) {
            handle_detail_action(app, action);
        }
        return Ok(());
    }

    if process_global_key_event(app, key) {
        return Ok(());
    }

    match app.focus {
        Focus::Filter => {
            if let Some(action) = app.filter_bar.process_event(&event) {
                handle_filter_bar_action(app, action);
            }
        }
        Focus::Table => {
            if key.code == KeyCode::Char('q') {
                app.event_tx.send(AppEvent::ExitApplication)?;
                return Ok(());
            }

            let countries = app.view.derived().unwrap_or(&[]);
            let action = app.country_table.as_widget(countries, true).process_event(&event);
            if let Some(action) = action {
                handle_country_table_action(app, action);
            }
        }
    }

    Ok(())
}

/// Handles the keys that work regardless of focus, returning whether the key
/// was consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => handle_toggle_focus(app),

        KeyCode::F(n @ 1..=4) => handle_set_field(app, FilterableField::ALL[usize::from(n - 1)]),

        KeyCode::F(5) => handle_sort_button(app, SortButton::Ascending),
        KeyCode::F(6) => handle_sort_button(app, SortButton::Reset),
        KeyCode::F(7) => handle_sort_button(app, SortButton::Descending),

        _ => return false,
    }
    true
}
