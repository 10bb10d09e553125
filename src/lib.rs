//! # citypin
//!
//! Resolves a city name to geographic coordinates and country from an
//! embedded gazetteer, then persists the result as a Rainmeter-style config
//! section that a display host reads back. Runs on demand, driven by a
//! single `Execute <CityName>` command.
//!
//! ## Architecture
//!
//! - **command**: Parsing of host-issued command text
//! - **config**: Configuration loading and validation
//! - **constants**: Embedded dataset and application-wide constants
//! - **gazetteer**: Case-insensitive city lookup table
//! - **host**: Collaborator boundary to the embedding runtime
//! - **logger**: Structured logging with visual formatting
//! - **resolution**: Lookup, status formatting, and result persistence

pub mod command;
pub mod config;
pub mod constants;
pub mod gazetteer;
pub mod host;
pub mod logger;
pub mod resolution;

// Re-export important types for easier access
pub use config::Config;
pub use gazetteer::{CityRecord, Gazetteer};
pub use host::{ConsoleHost, Host, Severity};
pub use logger::{Log, LogLevel};
pub use resolution::{ResolutionOutcome, Resolver, format_status, persist, render, resolve};
