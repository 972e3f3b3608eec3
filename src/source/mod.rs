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

//! Country data sources.
//!
//! A [`CountrySource`] produces the full, ordered country list once. Records
//! use the REST Countries v2 JSON shape; keys the application does not use
//! are ignored.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::model::Country;

const BUNDLED_COUNTRIES: &str = include_str!("../../data/countries.json");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read country data from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse country data from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) trait CountrySource: Send {
    fn fetch(&self) -> Result<Vec<Country>, SourceError>;

    /// Human readable origin, used for logging.
    fn describe(&self) -> String;
}

fn parse(json: &str, origin: &str) -> Result<Vec<Country>, SourceError> {
    serde_json::from_str(json).map_err(|source| SourceError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Reads countries from a JSON file on disk.
pub(crate) struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CountrySource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Country>, SourceError> {
        let json = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse(&json, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Countries compiled into the binary.
pub(crate) struct BundledSource;

impl CountrySource for BundledSource {
    fn fetch(&self) -> Result<Vec<Country>, SourceError> {
        parse(BUNDLED_COUNTRIES, &self.describe())
    }

    fn describe(&self) -> String {
        "bundled data".to_string()
    }
}

/// Picks the file source when a path is configured, the bundled data
/// otherwise.
pub(crate) fn from_config(data_file: Option<&Path>) -> Box<dyn CountrySource> {
    match data_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BundledSource),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_data_parses_with_unique_codes() {
        let countries = BundledSource.fetch().unwrap();
        assert!(!countries.is_empty());

        let mut codes: Vec<_> = countries.iter().map(|c| c.alpha3_code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), countries.len());
    }

    #[test]
    fn bundled_data_spans_every_continent() {
        let countries = BundledSource.fetch().unwrap();
        assert!(countries.len() > 90);

        for alpha3 in ["USA", "CHN", "IND", "NGA", "AUS", "ARG", "ATA"] {
            assert!(
                countries.iter().any(|c| c.alpha3_code == alpha3),
                "{alpha3} missing from bundled data"
            );
        }
    }

    #[test]
    fn file_source_reads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Belgium", "alpha2Code": "BE", "alpha3Code": "BEL", "population": 11319511, "capital": "Brussels"}}]"#
        )
        .unwrap();

        let countries = JsonFileSource::new(file.path()).fetch().unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].capital, "Brussels");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonFileSource::new(dir.path().join("absent.json")).fetch();
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = JsonFileSource::new(file.path()).fetch();
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }

    #[test]
    fn configured_path_selects_file_source() {
        let source = from_config(Some(Path::new("/tmp/countries.json")));
        assert_eq!(source.describe(), "/tmp/countries.json");
        assert_eq!(from_config(None).describe(), "bundled data");
    }
}
