// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

//! Stager - SPIFFS pre-build hook
//!
//! Invoked by the firmware build before the filesystem image is packaged:
//! - Resolves the project root handed over by the build system
//! - Reads stager.toml for directory overrides
//! - Copies assets/ into data/
//!
//! Any failure exits non-zero so the surrounding build aborts.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use spiffs_stager::{load_config, resolve_project_root, StagePaths, StageReport};

#[derive(Parser)]
#[command(version, about = "Stage assets into the SPIFFS data directory")]
struct Args {
    /// Project root; the build system usually passes this via PROJECT_DIR.
    #[arg(long, env = "PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    /// Source directory name, relative to the project root.
    #[arg(long)]
    source: Option<String>,

    /// Destination directory name, relative to the project root.
    #[arg(long)]
    destination: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stager: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> spiffs_stager::Result<StageReport> {
    let root = resolve_project_root(args.project_dir)?;

    let mut config = load_config(&root)?;
    if let Some(source) = args.source {
        config.source = source;
    }
    if let Some(destination) = args.destination {
        config.destination = destination;
    }

    StagePaths::resolve(&root, &config).stage()
}
