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

//! Asynchronous application task processing.
//!
//! This module offloads potentially blocking work, loading the country list,
//! from the main UI thread. A dedicated worker loop translates [`AppTask`]
//! requests into calls on the configured [`CountrySource`] and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block should be implemented as tasks. Everything
//! else is handled directly by events on the main thread.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{error, info};

use crate::{events::AppEvent, source::CountrySource};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadCountries,
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `source` - Where the country list comes from.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    source: Box<dyn CountrySource>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let ctx = TaskContext {
            source: source.as_ref(),
            event_tx: &event_tx,
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &ctx) {
                error!("task failed: {e:#}");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    source: &'a dyn CountrySource,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadCountries => load_countries(ctx),
    }
}

fn load_countries(ctx: &TaskContext) -> Result<()> {
    let origin = ctx.source.describe();
    info!(%origin, "loading countries");

    let countries = ctx.source.fetch()?;
    info!(%origin, count = countries.len(), "countries loaded");

    ctx.event_tx.send(AppEvent::CountriesLoaded(countries))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::*;
    use crate::{model::Country, model::fixtures::sample_countries, source::SourceError};

    struct FixedSource(Vec<Country>);

    impl CountrySource for FixedSource {
        fn fetch(&self) -> Result<Vec<Country>, SourceError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixture".to_string()
        }
    }

    struct BrokenSource;

    impl CountrySource for BrokenSource {
        fn fetch(&self) -> Result<Vec<Country>, SourceError> {
            Err(SourceError::Read {
                path: "missing.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn run_load(source: Box<dyn CountrySource>) -> AppEvent {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(source, task_rx, event_tx);

        task_tx.send(AppTask::LoadCountries).unwrap();
        event_rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn load_posts_countries() {
        match run_load(Box::new(FixedSource(sample_countries()))) {
            AppEvent::CountriesLoaded(countries) => assert_eq!(countries, sample_countries()),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn load_failure_posts_error() {
        match run_load(Box::new(BrokenSource)) {
            AppEvent::Error(message) => assert!(message.contains("missing.json")),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
