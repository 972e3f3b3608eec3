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

//! UI rendering logic for the country table.
//!
//! This module handles the visual representation of the derived country list,
//! including column layout, cursor highlighting, and theme application using
//! the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::CountryTable,
    render::Render,
    theme::Theme,
    util::format::{flag_emoji, format_currencies, format_population},
};

impl Render for CountryTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl CountryTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.countries.iter().map(|c| {
            Row::new(vec![
                Cell::from(flag_emoji(&c.alpha2_code)),
                Cell::from(Line::from(c.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(Line::from(c.alpha2_code.as_str()).style(Style::default().fg(theme.table_code_fg))),
                Cell::from(Line::from(c.alpha3_code.as_str()).style(Style::default().fg(theme.table_code_fg))),
                Cell::from(
                    Line::from(format_population(c.population))
                        .style(Style::default().fg(theme.table_population_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(format_currencies(&c.currencies))
                        .style(Style::default().fg(theme.table_currency_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(Line::from(c.capital.as_str()).style(Style::default().fg(theme.table_capital_fg))),
            ])
        });

        let highlight = if self.is_focused {
            Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(35),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(13),
                Constraint::Length(16),
                Constraint::Length(1),
                Constraint::Percentage(30),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Name"),
                Cell::from("A2"),
                Cell::from("A3"),
                Cell::from(Line::from("Population").alignment(Alignment::Right)),
                Cell::from(Line::from("Currencies").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Capital"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(highlight)
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
