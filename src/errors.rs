// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Error Module
//
// Every failure the stager can hit is a filesystem or config failure.
// None of them are handled locally; they carry the offending path up to
// the caller, which aborts the build step.

use std::io;
use std::path::PathBuf;

/// Error type for staging runs.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The destination (or one of its ancestors) could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source directory could not be enumerated.
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Copying a file, or its timestamps and permissions, failed.
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `stager.toml` exists but could not be parsed.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StageError>;
