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

//! Input handling for the filter bar.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{FilterBar, FilterBarAction},
    model::filter::{FilterInput, interpret_char},
};

impl FilterBar {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<FilterBarAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) => {
                self.input.reset();
                Some(FilterBarAction::Clear)
            }

            (KeyCode::Enter, _) | (KeyCode::Down, _) => Some(FilterBarAction::Submit),

            (KeyCode::Char(c), modifiers)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                match interpret_char(c) {
                    FilterInput::RotateForward => {
                        self.input.reset();
                        Some(FilterBarAction::RotateForward)
                    }
                    FilterInput::RotateBackward => {
                        self.input.reset();
                        Some(FilterBarAction::RotateBackward)
                    }
                    FilterInput::Text(_) => self.edit(event),
                }
            }

            // Delegate everything else (backspace, cursor movement and so on)
            // to the managed input component.
            _ => self.edit(event),
        }
    }

    fn edit(&mut self, event: &Event) -> Option<FilterBarAction> {
        let before = self.input.value().to_string();
        self.input.handle_event(event);

        let after = self.input.value();
        (after != before).then(|| FilterBarAction::WordChanged(after.to_string()))
    }
}
