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

//! Interactive country table widget and state management.
//!
//! This module separates persistent state (`CountryTableState`, the row
//! cursor) from the transient widget view (`CountryTable`) which borrows the
//! derived country list for the duration of one event or one frame.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{Country, SortButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountryTableAction {
    /// Open the detail surface for the row at this index.
    Select(usize),
    Sort(SortButton),
}

pub(crate) struct CountryTableState {
    pub(crate) table_state: TableState,
}

impl CountryTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget<'a>(&'a mut self, countries: &'a [Country], is_focused: bool) -> CountryTable<'a> {
        CountryTable {
            countries,
            table_state: &mut self.table_state,
            is_focused,
        }
    }

    /// Keeps the row cursor inside a list of `len` rows.
    pub(crate) fn ensure_selection(&mut self, len: usize) {
        let selected = match (self.table_state.selected(), len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
        if selected.is_none() {
            *self.table_state.offset_mut() = 0;
        }
    }
}

pub(crate) struct CountryTable<'a> {
    countries: &'a [Country],
    table_state: &'a mut TableState,
    is_focused: bool,
}

impl<'a> CountryTable<'a> {
    fn goto_next(&mut self) {
        let len = self.countries.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.countries.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.countries.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.countries.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    fn current(&self) -> Option<usize> {
        self.table_state.selected().filter(|&i| i < self.countries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_selection_clamps_into_range() {
        let mut state = CountryTableState::new();

        state.ensure_selection(4);
        assert_eq!(state.table_state.selected(), Some(0));

        state.table_state.select(Some(3));
        state.ensure_selection(2);
        assert_eq!(state.table_state.selected(), Some(1));

        state.ensure_selection(0);
        assert_eq!(state.table_state.selected(), None);
    }
}
