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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the
//! [`Country`] record and the enumerations that drive filtering and sorting,
//! together with the state machines that reduce user input into the list of
//! countries actually shown.
//!
//! # Organization
//!
//! * [`filter`]: Field matchers and the rotating filter criteria cursor.
//! * [`view`]: The view reducer and the state it is re-applied to.
//! * [`selection`]: The selected country and the detail surface state.

pub(crate) mod filter;
pub(crate) mod selection;
pub(crate) mod view;

#[cfg(test)]
pub(crate) mod fixtures;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel some data sets use in place of a missing currency code.
pub(crate) const NO_CURRENCY_CODE: &str = "(none)";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Currency {
    #[serde(default)]
    pub code: Option<String>,
}

impl Currency {
    /// The currency code, with the missing and `"(none)"` forms both
    /// normalised to an empty string.
    pub fn display_code(&self) -> &str {
        match self.code.as_deref() {
            Some(NO_CURRENCY_CODE) | None => "",
            Some(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Language {
    pub name: String,
}

/// A single country record, identified by its `alpha3_code`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub alpha2_code: String,
    pub alpha3_code: String,
    pub population: u64,
    #[serde(default)]
    pub capital: String,
    #[serde(rename = "flag", default)]
    pub flag_url: String,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// The country attributes eligible for filtering, in rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterableField {
    #[default]
    Name,
    Alpha2Code,
    Alpha3Code,
    Currencies,
}

impl FilterableField {
    pub const ALL: [FilterableField; 4] = [
        FilterableField::Name,
        FilterableField::Alpha2Code,
        FilterableField::Alpha3Code,
        FilterableField::Currencies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterableField::Name => "name",
            FilterableField::Alpha2Code => "alpha2Code",
            FilterableField::Alpha3Code => "alpha3Code",
            FilterableField::Currencies => "currencies",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FilterableField::Name => 0,
            FilterableField::Alpha2Code => 1,
            FilterableField::Alpha3Code => 2,
            FilterableField::Currencies => 3,
        }
    }
}

impl fmt::Display for FilterableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to the filtered list, by population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    Descending,
    #[default]
    None,
}

/// The three mutually exclusive sort triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortButton {
    Ascending,
    Reset,
    Descending,
}

impl SortButton {
    pub const ALL: [SortButton; 3] = [SortButton::Ascending, SortButton::Reset, SortButton::Descending];

    pub fn label(self) -> &'static str {
        match self {
            SortButton::Ascending => "asc",
            SortButton::Reset => "reset",
            SortButton::Descending => "desc",
        }
    }

    pub fn target(self) -> SortOrder {
        match self {
            SortButton::Ascending => SortOrder::Ascending,
            SortButton::Reset => SortOrder::None,
            SortButton::Descending => SortOrder::Descending,
        }
    }

    /// A button is disabled while its own order is the active one.
    pub fn is_enabled(self, current: SortOrder) -> bool {
        self.target() != current
    }
}
