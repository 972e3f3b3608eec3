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

use crate::model::{Currency, Language};

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Joins currency codes with `", "`, skipping missing and `"(none)"` codes.
///
/// # Examples
///
/// ```ignore
/// // GBP plus a "(none)" sentinel
/// assert_eq!(format_currencies(&guernsey.currencies), "GBP");
/// ```
pub(crate) fn format_currencies(currencies: &[Currency]) -> String {
    currencies
        .iter()
        .map(Currency::display_code)
        .filter(|code| !code.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn format_languages(languages: &[Language]) -> String {
    languages
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Picks the singular label for fewer than two items.
pub(crate) fn plural_label<'a>(singular: &'a str, plural: &'a str, count: usize) -> &'a str {
    if count < 2 { singular } else { plural }
}

/// Formats a population with `,` digit grouping, e.g. `66,710,000`.
pub(crate) fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Builds the flag emoji for a two letter country code.
///
/// Returns an empty string when the code is not two ASCII letters.
pub(crate) fn flag_emoji(alpha2: &str) -> String {
    if alpha2.len() != 2 || !alpha2.chars().all(|c| c.is_ascii_alphabetic()) {
        return String::new();
    }

    alpha2
        .chars()
        .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_A + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}
