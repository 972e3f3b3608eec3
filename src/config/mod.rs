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

//! Application configuration.
//!
//! This module manages the application configuration file and merges the
//! command-line overrides on top of it.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "countries";

const LOG_FILE_NAME: &str = "countries.log";

/// Browse, filter and sort world countries in the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "countries", version)]
pub struct Args {
    /// JSON file of countries to load instead of the bundled data
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// File to write logs to
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    pub data_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_file: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Command-line values take precedence over the configuration file.
    pub fn with_args(self, args: &Args) -> Self {
        Self {
            data_file: args.data.clone().or(self.data_file),
            log_file: args.log_file.clone().or(self.log_file),
            ..self
        }
    }

    /// The configured log file, or `countries.log` beside the configuration
    /// file.
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(LOG_FILE_NAME)))
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_override_config_values() {
        let config = AppConfig {
            version: 1,
            data_file: Some(PathBuf::from("config.json")),
            log_file: Some(PathBuf::from("config.log")),
        };
        let args = Args::parse_from(["countries", "--data", "cli.json"]);

        let merged = config.with_args(&args);
        assert_eq!(merged.data_file, Some(PathBuf::from("cli.json")));
        assert_eq!(merged.log_file, Some(PathBuf::from("config.log")));
    }

    #[test]
    fn no_args_keep_config() {
        let args = Args::parse_from(["countries"]);
        assert_eq!(AppConfig::default().with_args(&args), AppConfig::default());
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/var/tmp/c.log")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/var/tmp/c.log"));
    }

    #[test]
    fn default_log_file_is_named_after_the_app() {
        let path = AppConfig::default().log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
    }
}
