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

//! Country selection for the detail surface.
//!
//! Two states only: closed, or open on exactly one country. Selecting while
//! open replaces the country and stays open.

use tracing::debug;

use crate::model::Country;

#[derive(Debug, Default)]
pub(crate) struct SelectionController {
    selected: Option<Country>,
    detail_open: bool,
}

impl SelectionController {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn select(&mut self, country: Country) {
        debug!(alpha3 = %country.alpha3_code, "detail opened");
        self.selected = Some(country);
        self.detail_open = true;
    }

    /// Hides the detail surface. The last selection is kept.
    pub(crate) fn close(&mut self) {
        if self.detail_open {
            debug!("detail closed");
        }
        self.detail_open = false;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.detail_open
    }

    #[cfg(test)]
    pub(crate) fn selected(&self) -> Option<&Country> {
        self.selected.as_ref()
    }

    /// The country to show in the detail surface, if it is open.
    pub(crate) fn open_country(&self) -> Option<&Country> {
        self.selected.as_ref().filter(|_| self.detail_open)
    }

    /// Closes and clears the selection when its country is no longer shown.
    pub(crate) fn reconcile(&mut self, derived: Option<&[Country]>) {
        let Some(selected) = &self.selected else {
            return;
        };

        let present = derived
            .is_some_and(|countries| countries.iter().any(|c| c.alpha3_code == selected.alpha3_code));

        if !present {
            debug!(alpha3 = %selected.alpha3_code, "selection filtered away");
            self.selected = None;
            self.detail_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sample_countries;

    #[test]
    fn starts_closed() {
        let selection = SelectionController::new();
        assert!(!selection.is_open());
        assert!(selection.open_country().is_none());
    }

    #[test]
    fn select_opens_and_close_hides() {
        let mut selection = SelectionController::new();
        let france = sample_countries().remove(0);

        selection.select(france);
        assert!(selection.is_open());
        assert_eq!(selection.open_country().map(|c| c.name.as_str()), Some("France"));

        selection.close();
        assert!(!selection.is_open());
        assert!(selection.open_country().is_none());
        assert_eq!(selection.selected().map(|c| c.alpha3_code.as_str()), Some("FRA"));
    }

    #[test]
    fn reselecting_while_open_replaces_and_stays_open() {
        let mut selection = SelectionController::new();
        let mut countries = sample_countries();

        selection.select(countries.remove(0));
        selection.select(countries.remove(0));

        assert!(selection.is_open());
        assert_eq!(selection.open_country().map(|c| c.alpha3_code.as_str()), Some("RUS"));
    }

    #[test]
    fn reconcile_keeps_selection_that_is_still_shown() {
        let mut selection = SelectionController::new();
        let countries = sample_countries();
        selection.select(countries[1].clone());

        selection.reconcile(Some(&countries[..2]));
        assert!(selection.is_open());
    }

    #[test]
    fn reconcile_closes_selection_that_was_filtered_away() {
        let mut selection = SelectionController::new();
        let countries = sample_countries();
        selection.select(countries[3].clone());

        selection.reconcile(Some(&countries[..2]));
        assert!(!selection.is_open());
        assert!(selection.selected().is_none());
    }
}
