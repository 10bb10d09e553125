//! Embedded city gazetteer with case-insensitive name lookup.
//!
//! The dataset is a fixed CSV shipped inside the binary (see
//! [`crate::constants::CITY_DATASET`]). It is parsed once at startup into an
//! immutable mapping from normalized city name to coordinates and country.
//! Lookups are exact-match only; there is no fuzzy or substring matching.

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::constants::{CITY_DATASET, MIN_DATASET_COLUMNS};

/// A single city entry with its geographic attributes.
///
/// Latitude and longitude are kept as the decimal text they appear as in the
/// dataset. They are only ever echoed into output, never computed on, so
/// parsing them to floats would add a lossy round-trip for nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord {
    pub city: String,
    pub latitude: String,
    pub longitude: String,
    pub country: String,
}

/// Immutable mapping from case-folded city name to [`CityRecord`].
///
/// Case normalization happens exactly twice: once per row at insertion and
/// once per query at lookup. Duplicate names in the dataset overwrite
/// earlier rows silently; that is dataset policy, not an error.
#[derive(Debug)]
pub struct Gazetteer {
    records: HashMap<String, CityRecord>,
}

impl Gazetteer {
    /// Build the gazetteer from the embedded dataset.
    pub fn builtin() -> Result<Self> {
        Self::load(CITY_DATASET).context("Failed to load embedded city dataset")
    }

    /// Parse quoted-CSV text into a gazetteer.
    ///
    /// The header row is skipped. A data row with too few columns is a
    /// fatal error rather than a per-row skip: the dataset ships with the
    /// binary, so a malformed row is a packaging bug that should surface at
    /// startup instead of as mysterious lookup misses later.
    pub fn load(csv: &str) -> Result<Self> {
        let mut records = HashMap::new();

        for line in csv.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let fields: Vec<&str> = line.split(',').map(|f| f.trim_matches('"')).collect();

            // Header row carries the column names; skip it by its first cell
            if fields.first() == Some(&"city") {
                continue;
            }

            if fields.len() < MIN_DATASET_COLUMNS {
                anyhow::bail!(
                    "Malformed dataset row (expected at least {} columns, got {}): {}",
                    MIN_DATASET_COLUMNS,
                    fields.len(),
                    line
                );
            }

            let record = CityRecord {
                city: fields[0].to_string(),
                latitude: fields[2].to_string(),
                longitude: fields[3].to_string(),
                country: fields[4].to_string(),
            };

            // Later duplicates overwrite earlier ones
            records.insert(normalize(fields[0]), record);
        }

        Ok(Self { records })
    }

    /// Case-insensitive exact-match lookup.
    ///
    /// A miss is an expected outcome, not a failure.
    pub fn lookup(&self, name: &str) -> Option<&CityRecord> {
        self.records.get(&normalize(name))
    }

    /// Number of distinct cities in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Case-fold a city name into its lookup key.
fn normalize(name: &str) -> String {
    name.to_lowercase()
}
