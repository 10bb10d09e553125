//! Resolution pipeline: lookup, status formatting, and result persistence.
//!
//! Each execution is a one-shot pass: resolve the queried name against the
//! gazetteer, format the human-readable status line, persist the result
//! section to the configured path, and hand the optional follow-up action
//! to the host. The only state carried between calls is the overwritten
//! `last_result` string and the overwritten output file.
//!
//! Failure policy: everything on the execute path is logged through the
//! host collaborator and absorbed. The status line is committed before the
//! persist attempt, so a failed write leaves the prior file content intact
//! while the in-memory status already reflects the new outcome. File and
//! status are therefore not guaranteed to be in sync; the output file has a
//! single writer and an external best-effort reader, with no locking.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::command::{self, Command};
use crate::config::Config;
use crate::constants::{INITIAL_STATUS, RESULT_METER, RESULT_METER_STYLE, RESULT_SECTION};
use crate::gazetteer::Gazetteer;
use crate::host::{ConsoleHost, Host, Severity};

/// Outcome of resolving a queried city name.
///
/// The `city` field carries the name as the caller typed it, not the
/// dataset's canonical casing; the original plugin echoes the query text
/// into both the status line and the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Found {
        city: String,
        country: String,
        latitude: String,
        longitude: String,
    },
    NotFound {
        city: String,
    },
}

/// Resolve a city name against the gazetteer.
pub fn resolve(table: &Gazetteer, city_name: &str) -> ResolutionOutcome {
    match table.lookup(city_name) {
        Some(record) => ResolutionOutcome::Found {
            city: city_name.to_string(),
            country: record.country.clone(),
            latitude: record.latitude.clone(),
            longitude: record.longitude.clone(),
        },
        None => ResolutionOutcome::NotFound {
            city: city_name.to_string(),
        },
    }
}

/// Format the human-readable status line for an outcome.
pub fn format_status(outcome: &ResolutionOutcome) -> String {
    match outcome {
        ResolutionOutcome::Found {
            city,
            country,
            latitude,
            longitude,
        } => format!(
            "City: {}, Country: {}, Lat: {}, Lng: {}",
            city, country, latitude, longitude
        ),
        ResolutionOutcome::NotFound { city } => {
            format!("No Result Found for city '{}'.", city)
        }
    }
}

/// Render the fixed-layout result section for an outcome.
///
/// The found case intentionally writes the latitude value into both the
/// Longitude and Latitude keys. The skins consuming this file were built
/// against that exact output, so it is preserved as observed rather than
/// corrected. Note the double space after the first quoted value.
pub fn render(outcome: &ResolutionOutcome) -> String {
    let mut block = String::new();
    block.push_str(RESULT_SECTION);
    block.push('\n');
    block.push_str(RESULT_METER);
    block.push('\n');

    match outcome {
        ResolutionOutcome::Found {
            city,
            country,
            latitude,
            ..
        } => {
            block.push_str(&format!("Text={},{}\n", city, country));
            block.push_str(RESULT_METER_STYLE);
            block.push('\n');
            block.push_str(&format!(
                "LeftMouseUpAction=[!WriteKeyValue Variables Longitude \"{lat}\"  \"#@#GlobalVar.nek\"][!WriteKeyValue Variables Latitude \"{lat}\" \"#@#GlobalVar.nek\"][!WriteKeyValue Variables City \"{city}\" \"#@#GlobalVar.nek\"][!UpdateMeasure mToggle]\n",
                lat = latitude,
                city = city
            ));
        }
        ResolutionOutcome::NotFound { city } => {
            block.push_str(&format!("Text=No Result Found \"{}\"\n", city));
            block.push_str(RESULT_METER_STYLE);
            block.push('\n');
            block.push_str("MouseOverAction=[]\n");
            block.push_str("MouseLeaveAction=[]\n");
        }
    }

    block
}

/// Persist an outcome to the destination path, replacing prior content.
///
/// The write goes through a temp file in the destination directory followed
/// by a rename, so a concurrent reader sees either the old content or the
/// new content, never a partial file.
pub fn persist(outcome: &ResolutionOutcome, path: &Path) -> Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    let mut file = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .with_context(|| format!("Failed to create temp file next to {}", path.display()))?;

    file.write_all(render(outcome).as_bytes())
        .with_context(|| format!("Failed to write result for {}", path.display()))?;

    file.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

/// Per-instance resolver state.
///
/// One of these is constructed per host-managed lifetime and owned by the
/// caller; every operation takes it by reference. It owns the gazetteer
/// (immutable after construction) and the mutable `last_result` status.
pub struct Resolver<H: Host = ConsoleHost> {
    gazetteer: Gazetteer,
    result_save: Option<PathBuf>,
    on_complete_action: Option<String>,
    last_result: String,
    host: H,
}

impl Resolver<ConsoleHost> {
    /// Build a resolver over the embedded dataset with console-backed logging.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_host(config, ConsoleHost)
    }
}

impl<H: Host> Resolver<H> {
    /// Build a resolver with an explicit host collaborator.
    pub fn with_host(config: &Config, host: H) -> Result<Self> {
        Ok(Self {
            gazetteer: Gazetteer::builtin()?,
            result_save: config.result_save.clone(),
            on_complete_action: config.on_complete_action.clone(),
            last_result: INITIAL_STATUS.to_string(),
            host,
        })
    }

    /// Current status line; valid before the first execution.
    pub fn last_result(&self) -> &str {
        &self.last_result
    }

    /// Parse and run a raw host command.
    ///
    /// Malformed command text is logged at Error severity and leaves both
    /// the status and the output file untouched.
    pub fn handle_command(&mut self, text: &str) {
        match command::parse(text) {
            Ok(Command::Execute(city)) => self.execute(&city),
            Err(err) => self.host.log(Severity::Error, err.message()),
        }
    }

    /// Run one resolution pass for a city name.
    ///
    /// The status line is updated before the persist attempt and is never
    /// rolled back; persist failures are logged and absorbed.
    pub fn execute(&mut self, city_name: &str) {
        let outcome = resolve(&self.gazetteer, city_name);
        self.last_result = format_status(&outcome);

        match &self.result_save {
            Some(path) => match persist(&outcome, path) {
                Ok(()) => self.host.log(
                    Severity::Debug,
                    &format!("Results saved to {}", path.display()),
                ),
                Err(err) => self
                    .host
                    .log(Severity::Error, &format!("Error saving results - {err:#}")),
            },
            None => self
                .host
                .log(Severity::Error, "'result_save' is not specified."),
        }

        self.host.log(Severity::Debug, &self.last_result);

        if let Some(action) = &self.on_complete_action {
            self.host.run_action(action);
        }
    }
}
