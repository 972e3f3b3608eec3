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

//! UI rendering logic for the detail popup.
//!
//! The popup is drawn over whatever is beneath it, clearing its own area
//! first.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::DetailView,
    model::Country,
    render::centered_rect,
    theme::Theme,
    util::format::{flag_emoji, format_currencies, format_languages, format_population, plural_label},
};

const POPUP_HEIGHT: u16 = 13;

impl DetailView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, country: &Country, theme: &Theme) {
        let popup = centered_rect(60, POPUP_HEIGHT, area);

        let label_style = Style::default().fg(theme.accent_colour);

        let field = |label: &str, value: String| {
            Line::from(vec![Span::styled(format!("{label}: "), label_style), Span::raw(value)])
        };

        let lines = vec![
            Line::from(Span::styled(
                country.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field("Capital", country.capital.clone()),
            field("Population", format_population(country.population)),
            field(
                plural_label("Currency", "Currencies", country.currencies.len()),
                format_currencies(&country.currencies),
            ),
            field(
                plural_label("Language", "Languages", country.languages.len()),
                format_languages(&country.languages),
            ),
            field("Flag", format!("{} {}", flag_emoji(&country.alpha2_code), country.flag_url)),
            Line::from(""),
            Line::from(Span::styled("[Esc] close", Style::default().fg(theme.placeholder_fg))),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(format!(" {} ", country.alpha3_code))
            .padding(Padding::horizontal(1));

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            popup,
        );
    }
}
