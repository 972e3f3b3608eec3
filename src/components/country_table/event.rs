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

//! Input handling and event processing for the country table.
//!
//! This module maps raw terminal keyboard events to row navigation, and to
//! the selection and sort actions handed back to the caller.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{CountryTable, CountryTableAction},
    model::SortButton,
};

impl CountryTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<CountryTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter | KeyCode::Char(' ') => {
                return self.current().map(CountryTableAction::Select);
            }

            KeyCode::Char('a') => return Some(CountryTableAction::Sort(SortButton::Ascending)),
            KeyCode::Char('r') => return Some(CountryTableAction::Sort(SortButton::Reset)),
            KeyCode::Char('d') => return Some(CountryTableAction::Sort(SortButton::Descending)),

            _ => {}
        }

        None
    }
}
