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

//! Render the filter input and the sort buttons.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::FilterBar,
    model::{SortButton, view::ViewState},
    theme::Theme,
};

impl FilterBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, view: &ViewState, is_focused: bool, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(24)])
            .split(area);

        let border_style = if is_focused {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.border_colour)
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" filter by {} ", view.field()));

        let text = if self.value().is_empty() {
            Paragraph::new(view.criteria().prompt_text.as_str())
                .style(Style::default().fg(theme.placeholder_fg))
        } else {
            Paragraph::new(self.value())
        };

        let input_area = input_block.inner(chunks[0]);
        f.render_widget(text.block(input_block), chunks[0]);

        if is_focused {
            let cursor_x = input_area.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(1)), input_area.y));
        }

        let buttons: Vec<Span> = SortButton::ALL
            .iter()
            .flat_map(|&button| {
                let style = if button.is_enabled(view.order()) {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.disabled_fg).add_modifier(Modifier::DIM)
                };
                [Span::styled(format!("[{}]", button.label()), style), Span::raw(" ")]
            })
            .collect();

        let sort_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" sort ");

        f.render_widget(Paragraph::new(Line::from(buttons)).block(sort_block), chunks[1]);
    }
}
