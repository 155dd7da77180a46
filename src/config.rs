// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `MSTBATCH_*` environment variables. Command-line flags are applied on top
//! by the binary.

use crate::display::{DisplayFormat, DisplayMode};
use crate::writer::OutputLayout;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `MSTBATCH_OUTPUT_LAYOUT`
pub const ENV_PREFIX: &str = "MSTBATCH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Layout of the result file(s)
    pub output_layout: OutputLayout,
    /// Which input graphs to print before solving
    pub display: DisplayMode,
    /// Rendering used for printed graphs
    pub display_format: DisplayFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_layout: OutputLayout::default(),
            display: DisplayMode::default(),
            display_format: DisplayFormat::default(),
        }
    }
}

/// Default location of the configuration file, if the platform has one
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "mstbatch")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An `explicit` file must exist; the default file is used only when present.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let mut builder = ::config::Config::builder();

    if let Some(path) = explicit {
        if !path.is_file() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        builder = builder.add_source(toml_file(path).required(true));
    } else if let Some(path) = default_path() {
        builder = builder.add_source(toml_file(&path).required(false));
    }

    builder = builder.add_source(::config::Environment::with_prefix(ENV_PREFIX));

    let layered = builder.build().context("Failed to load configuration")?;
    layered
        .try_deserialize()
        .context("Invalid configuration")
}

fn toml_file(
    path: &Path,
) -> ::config::File<::config::FileSourceFile, ::config::FileFormat> {
    ::config::File::new(&path.to_string_lossy(), ::config::FileFormat::Toml)
}
