// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

//! SPIFFS Stager
//!
//! Copies the files of a project's `assets/` directory into its `data/`
//! directory so the firmware filesystem image can be packaged from it.
//! Runs as a pre-build hook; see the `stager` binary.

pub mod assets;
pub mod config;
pub mod errors;

pub use assets::{stage, StageReport};
pub use config::{load_config, resolve_project_root, StagePaths, StagerConfig};
pub use errors::{Result, StageError};
