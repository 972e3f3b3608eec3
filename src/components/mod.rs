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

//! Interactive UI components.
//!
//! Each component owns only its transient widget state, translates raw
//! terminal events into a small action enum, and knows how to draw itself.
//! Applying an action to the application model is left to the event
//! handlers.

mod country_table;
mod detail;
mod filter_bar;

pub(crate) use country_table::{CountryTable, CountryTableAction, CountryTableState};
pub(crate) use detail::{DetailAction, DetailView};
pub(crate) use filter_bar::{FilterBar, FilterBarAction};
