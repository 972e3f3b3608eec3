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

use tracing::{debug, warn};

use crate::{
    App,
    components::{CountryTableAction, DetailAction, FilterBarAction},
    events::Focus,
    model::{Country, FilterableField, SortButton},
};

pub(super) fn handle_countries_loaded(app: &mut App, countries: Vec<Country>) {
    app.view.set_countries(countries);
    app.status = None;
    after_view_change(app);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "showing error");
    app.status = Some(message);
}

pub(super) fn handle_filter_bar_action(app: &mut App, action: FilterBarAction) {
    match action {
        FilterBarAction::WordChanged(word) => app.view.set_filter_word(&word),
        FilterBarAction::RotateForward => app.view.rotate_forward(),
        FilterBarAction::RotateBackward => app.view.rotate_backward(),
        FilterBarAction::Clear => app.view.clear_filter_word(),
        FilterBarAction::Submit => {
            app.focus = Focus::Table;
            return;
        }
    }
    after_view_change(app);
}

pub(super) fn handle_country_table_action(app: &mut App, action: CountryTableAction) {
    match action {
        CountryTableAction::Select(index) => {
            let country = app.view.derived().and_then(|countries| countries.get(index)).cloned();
            if let Some(country) = country {
                app.selection.select(country);
            }
        }
        CountryTableAction::Sort(button) => handle_sort_button(app, button),
    }
}

pub(super) fn handle_detail_action(app: &mut App, action: DetailAction) {
    match action {
        DetailAction::Close => app.selection.close(),
    }
}

pub(super) fn handle_sort_button(app: &mut App, button: SortButton) {
    if !button.is_enabled(app.view.order()) {
        debug!(button = button.label(), "sort button disabled");
        return;
    }
    app.view.set_order(button.target());
    after_view_change(app);
}

pub(super) fn handle_set_field(app: &mut App, field: FilterableField) {
    app.view.set_field(field);
    app.filter_bar.reset();
    after_view_change(app);
}

pub(super) fn handle_toggle_focus(app: &mut App) {
    app.focus = match app.focus {
        Focus::Filter => Focus::Table,
        Focus::Table => Focus::Filter,
    };
}

/// Brings everything that depends on the derived list back in line with it.
fn after_view_change(app: &mut App) {
    app.selection.reconcile(app.view.derived());
    let len = app.view.derived().map_or(0, <[_]>::len);
    app.country_table.ensure_selection(len);
}
