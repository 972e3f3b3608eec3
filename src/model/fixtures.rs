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

//! Shared test data.

use crate::model::{Country, Currency, Language};

pub(crate) fn country(
    name: &str,
    alpha2: &str,
    alpha3: &str,
    population: u64,
    capital: &str,
    currencies: &[Option<&str>],
    languages: &[&str],
) -> Country {
    Country {
        name: name.to_string(),
        alpha2_code: alpha2.to_string(),
        alpha3_code: alpha3.to_string(),
        population,
        capital: capital.to_string(),
        flag_url: format!("https://restcountries.eu/data/{}.svg", alpha3.to_lowercase()),
        currencies: currencies
            .iter()
            .map(|code| Currency { code: code.map(str::to_string) })
            .collect(),
        languages: languages
            .iter()
            .map(|name| Language { name: name.to_string() })
            .collect(),
    }
}

/// France, Russia, Belgium and Guernsey, in that order.
pub(crate) fn sample_countries() -> Vec<Country> {
    vec![
        country("France", "FR", "FRA", 66_710_000, "Paris", &[Some("EUR")], &["French"]),
        country(
            "Russian Federation",
            "RU",
            "RUS",
            146_599_183,
            "Moscow",
            &[Some("RUB")],
            &["Russian"],
        ),
        country(
            "Belgium",
            "BE",
            "BEL",
            11_319_511,
            "Brussels",
            &[Some("EUR")],
            &["Dutch", "French", "German"],
        ),
        country(
            "Guernsey",
            "GG",
            "GGY",
            62_999,
            "St. Peter Port",
            &[Some("GBP"), Some("(none)")],
            &["English", "French"],
        ),
    ]
}

pub(crate) fn alpha3_codes(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(|c| c.alpha3_code.as_str()).collect()
}
