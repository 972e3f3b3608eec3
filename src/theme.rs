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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) placeholder_fg: Color,
    pub(crate) disabled_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_code_fg: Color,
    pub(crate) table_population_fg: Color,
    pub(crate) table_currency_fg: Color,
    pub(crate) table_capital_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            placeholder_fg: Color::Rgb(120, 120, 130),
            disabled_fg: Color::Rgb(80, 80, 90),
            error_fg: Color::Rgb(235, 87, 87),

            highlight_bg: Color::Blue,
            highlight_fg: Color::White,

            table_name_fg: Color::Rgb(255, 255, 255),
            table_code_fg: Color::Rgb(162, 161, 166),
            table_population_fg: Color::Rgb(179, 157, 219),
            table_currency_fg: Color::Rgb(255, 215, 0),
            table_capital_fg: Color::Rgb(162, 161, 166),
        }
    }
}
