// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Configuration Management Module
//
// Resolves the project root handed over by the build system and reads
// the optional stager.toml that renames the assets and data directories.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{self, StageReport};
use crate::errors::{Result, StageError};

pub const CONFIG_FILE: &str = "stager.toml";
pub const DEFAULT_SOURCE: &str = "assets";
pub const DEFAULT_DESTINATION: &str = "data";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StagerConfig {
    pub source: String,
    pub destination: String,
}

impl Default for StagerConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            destination: DEFAULT_DESTINATION.into(),
        }
    }
}

#[derive(Deserialize)]
struct StagerToml {
    stage: Option<StagerConfig>,
}

/// Pick the project root: the one the build system passed, or the
/// current directory.
pub fn resolve_project_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(root) => Ok(root),
        None => std::env::current_dir().map_err(|source| StageError::Io {
            path: PathBuf::from("."),
            source,
        }),
    }
}

/// Load `stager.toml` from the project root, falling back to defaults
/// when the file or its `[stage]` table is absent.
pub fn load_config(project_root: &Path) -> Result<StagerConfig> {
    let config_path = project_root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(StagerConfig::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|source| StageError::Io {
        path: config_path.clone(),
        source,
    })?;
    let parsed = toml::from_str::<StagerToml>(&content).map_err(|source| StageError::Config {
        path: config_path,
        source,
    })?;

    Ok(parsed.stage.unwrap_or_default())
}

/// The two directories a run works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePaths {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl StagePaths {
    pub fn resolve(project_root: &Path, config: &StagerConfig) -> Self {
        Self {
            source: project_root.join(&config.source),
            destination: project_root.join(&config.destination),
        }
    }

    pub fn stage(&self) -> Result<StageReport> {
        assets::stage(&self.source, &self.destination)
    }
}
