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

//! Filter matchers and criteria rotation.
//!
//! Each [`FilterableField`] maps to a static matching predicate. The
//! [`FilterCriteriaCursor`] holds the active field and rotates through
//! [`FilterableField::ALL`] with wraparound. Interpreting typed characters as
//! rotation commands is kept separate, in [`interpret_char`], so the cursor
//! can equally be driven by an explicit field selector.

use crate::model::{Country, FilterableField};

pub(crate) const ROTATE_FORWARD_CHAR: char = '/';
pub(crate) const ROTATE_BACKWARD_CHAR: char = '\\';

/// Predicate deciding whether a country matches an already lowercased filter
/// word.
pub(crate) type Matcher = fn(&str, &Country) -> bool;

fn contains_lowercase(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Returns the matching predicate for a field.
///
/// Text fields match on case-insensitive substring containment. Currencies
/// match when any currency code contains the word, with missing and
/// `"(none)"` codes treated as empty. An empty word matches every country for
/// every field.
pub(crate) fn matcher_for(field: FilterableField) -> Matcher {
    match field {
        FilterableField::Name => match_name,
        FilterableField::Alpha2Code => match_alpha2,
        FilterableField::Alpha3Code => match_alpha3,
        FilterableField::Currencies => match_currencies,
    }
}

fn match_name(word: &str, country: &Country) -> bool {
    contains_lowercase(&country.name, word)
}

fn match_alpha2(word: &str, country: &Country) -> bool {
    contains_lowercase(&country.alpha2_code, word)
}

fn match_alpha3(word: &str, country: &Country) -> bool {
    contains_lowercase(&country.alpha3_code, word)
}

fn match_currencies(word: &str, country: &Country) -> bool {
    word.is_empty()
        || country
            .currencies
            .iter()
            .any(|ccy| contains_lowercase(ccy.display_code(), word))
}

/// The active field together with its matcher and prompt.
#[derive(Debug, Clone)]
pub(crate) struct FilterCriteria {
    pub(crate) field: FilterableField,
    pub(crate) matcher: Matcher,
    pub(crate) prompt_text: String,
}

impl FilterCriteria {
    fn for_field(field: FilterableField) -> Self {
        Self {
            field,
            matcher: matcher_for(field),
            prompt_text: format!(
                "type to filter by {field}, press Escape to reset, '{ROTATE_FORWARD_CHAR}' or '{ROTATE_BACKWARD_CHAR}' to rotate filter"
            ),
        }
    }

    /// Clones the matching countries, keeping their order. The word is
    /// lowercased once for the whole list.
    pub(crate) fn matching(&self, word: &str, countries: &[Country]) -> Vec<Country> {
        let word = word.to_lowercase();
        countries
            .iter()
            .filter(|c| (self.matcher)(&word, *c))
            .cloned()
            .collect()
    }
}

/// Tracks the active filter field.
///
/// The transitions only move the cursor. The owner of the filter word is
/// responsible for clearing it whenever the field changes, see
/// [`crate::model::view::ViewState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FilterCriteriaCursor {
    field: FilterableField,
}

impl FilterCriteriaCursor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn field(&self) -> FilterableField {
        self.field
    }

    pub(crate) fn current_criteria(&self) -> FilterCriteria {
        FilterCriteria::for_field(self.field())
    }

    pub(crate) fn rotate_forward(&mut self) -> FilterableField {
        let len = FilterableField::ALL.len();
        self.field = FilterableField::ALL[(self.field.index() + 1) % len];
        self.field
    }

    pub(crate) fn rotate_backward(&mut self) -> FilterableField {
        let len = FilterableField::ALL.len();
        self.field = FilterableField::ALL[(self.field.index() + len - 1) % len];
        self.field
    }

    pub(crate) fn set_field(&mut self, field: FilterableField) -> FilterableField {
        self.field = field;
        self.field
    }
}

/// How a single typed character is applied to the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterInput {
    RotateForward,
    RotateBackward,
    Text(char),
}

pub(crate) fn interpret_char(c: char) -> FilterInput {
    match c {
        ROTATE_FORWARD_CHAR => FilterInput::RotateForward,
        ROTATE_BACKWARD_CHAR => FilterInput::RotateBackward,
        other => FilterInput::Text(other),
    }
}
