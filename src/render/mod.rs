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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. It only reads the derived list; it never filters or
//! sorts anything itself.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, events::Focus, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

const LOADING_TEXT: &str = "loading...";

/// Renders the user interface to the terminal frame.
///
/// * **Header**: Title and the number of countries shown.
/// * **Filter bar**: Text input for the filter word and the sort buttons.
/// * **Table**: The derived country list, or a loading indicator until the
///   data source has delivered.
/// * **Footer**: Key hints, or the last error.
/// * **Detail**: Drawn over everything else while a country is selected.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    app.filter_bar.draw(
        f,
        outer[1],
        &app.view,
        app.focus == Focus::Filter && !app.selection.is_open(),
        &app.theme,
    );

    match app.view.derived() {
        Some(countries) => {
            let is_focused = app.focus == Focus::Table;
            app.country_table
                .as_widget(countries, is_focused)
                .draw(f, outer[2], &app.theme);
        }
        None => {
            let loading = Paragraph::new(LOADING_TEXT).block(Block::default().padding(Padding::horizontal(1)));
            f.render_widget(loading, outer[2]);
        }
    }

    draw_footer(f, outer[3], app);

    if let Some(country) = app.selection.open_country() {
        app.detail_view.draw(f, area, country, &app.theme);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        "World Countries",
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    );

    let mut spans = vec![Span::raw(" "), title];
    if let (Some(shown), Some(total)) = (app.view.derived().map(<[_]>::len), app.view.total_count()) {
        spans.push(Span::raw(format!(" | {shown} of {total} countries")));
    }

    let word = app.view.filter_word();
    if !word.is_empty() {
        spans.push(Span::raw(format!(" matching {:?} in {}", word, app.view.field())));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = match &app.status {
        Some(message) => Paragraph::new(message.as_str()).style(Style::default().fg(app.theme.error_fg)),
        None => {
            let hints = match app.focus {
                Focus::Filter => "[Tab] table  [F1-F4] field  [F5] asc  [F6] reset  [F7] desc  [Ctrl+C] quit",
                Focus::Table => "[Enter] details  [a] asc  [r] reset  [d] desc  [Tab] filter  [q] quit",
            };
            Paragraph::new(hints).style(Style::default().fg(app.theme.placeholder_fg))
        }
    };

    f.render_widget(footer.alignment(Alignment::Left).block(Block::default().borders(Borders::NONE)), area);
}

/// Returns a rectangle `percent_x` wide and `height` rows high, centered in
/// `area` and clamped to it.
pub(crate) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
