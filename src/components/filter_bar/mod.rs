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

//! Filter text input and sort controls.
//!
//! This module wraps a text input component. Typed text is reported back as
//! the new filter word, while the rotation characters and the Escape key are
//! turned into their own actions and never reach the text.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FilterBarAction {
    WordChanged(String),
    RotateForward,
    RotateBackward,
    Clear,
    /// Leave the input for the table.
    Submit,
}

pub(crate) struct FilterBar {
    pub(crate) input: Input,
}

impl FilterBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn reset(&mut self) {
        self.input.reset();
    }
}
