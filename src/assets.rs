// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Assets Staging Module
//
// Copies the regular files found directly inside the assets directory
// into the data directory that the SPIFFS image is packaged from.
// Subdirectories are never descended into and nothing in the data
// directory is ever removed.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{Result, StageError};

/// Outcome of a staging run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// File names written into the destination, in copy order.
    pub copied: Vec<PathBuf>,
    /// The source directory did not exist, so nothing was copied.
    pub source_missing: bool,
}

// Stage every regular file of `src` into `dst`. A missing `src` only
// ensures `dst` exists; files in `dst` without a counterpart are left alone.
pub fn stage(src: &Path, dst: &Path) -> Result<StageReport> {
    if !dst.exists() {
        fs::create_dir_all(dst).map_err(|source| StageError::CreateDir {
            path: dst.to_path_buf(),
            source,
        })?;
    }

    let mut report = StageReport::default();

    if src.exists() {
        println!("Copying assets to data directory for SPIFFS upload...");
        copy_flat_files(src, dst, &mut report)?;
    } else {
        report.source_missing = true;
    }

    println!("SPIFFS data upload configured");
    Ok(report)
}

fn copy_flat_files(src: &Path, dst: &Path, report: &mut StageReport) -> Result<()> {
    // WalkDir yields nothing for a file root at min_depth 1.
    if !src.is_dir() {
        return Err(StageError::Io {
            path: src.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    for entry in WalkDir::new(src)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| StageError::ReadDir {
            path: src.to_path_buf(),
            source,
        })?;

        if !is_regular_file(entry.path())? {
            continue;
        }

        let filename = entry.file_name();
        copy_with_metadata(entry.path(), &dst.join(filename))?;
        println!("Copied: {}", filename.to_string_lossy());
        report.copied.push(PathBuf::from(filename));
    }

    Ok(())
}

// Follows symlinks. Dangling links are skipped like directories are.
fn is_regular_file(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(StageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// Copy `src` to `dst`, then carry over timestamps and permission bits.
// Permissions go last so a read-only source does not block the timestamps.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> Result<()> {
    let copy_err = |source: io::Error| StageError::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    };

    let meta = fs::metadata(src).map_err(copy_err)?;
    // Creating `dst` truncates it, so it must not be `src` itself.
    if is_same_file(src, dst).map_err(copy_err)? {
        return Err(copy_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        )));
    }

    let mut reader = File::open(src).map_err(copy_err)?;
    let mut writer = File::create(dst).map_err(copy_err)?;
    io::copy(&mut reader, &mut writer).map_err(copy_err)?;

    let mut times = FileTimes::new().set_modified(meta.modified().map_err(copy_err)?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times).map_err(copy_err)?;
    drop(writer);

    fs::set_permissions(dst, meta.permissions()).map_err(copy_err)?;
    Ok(())
}

fn is_same_file(src: &Path, dst: &Path) -> io::Result<bool> {
    if !dst.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(src)? == fs::canonicalize(dst)?)
}
