//! Directory discovery: required-subdirectory checks and suffix-filtered
//! sorted listings. Read-only; no side effects beyond filesystem reads.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Verify that every expected subdirectory exists under `base`.
///
/// Returns a map from subdirectory name to its resolved path. All absent
/// directories are reported in one error rather than the first hit, so a
/// misconfigured layout is diagnosable in a single run. The base
/// directory itself is checked first.
///
/// # Errors
///
/// Returns [`Error::MissingDirectory`] naming every absent directory.
pub fn require_subdirs<'a>(base: &Path, names: &[&'a str]) -> Result<BTreeMap<&'a str, PathBuf>> {
    if !base.is_dir() {
        return Err(Error::MissingDirectory {
            directories: vec![format!("base: {}", base.display())],
        });
    }

    let mut found = BTreeMap::new();
    let mut missing = Vec::new();
    for name in names {
        let path = base.join(name);
        if path.is_dir() {
            found.insert(*name, path);
        } else {
            missing.push(format!("{name}: {}", path.display()));
        }
    }

    if missing.is_empty() {
        tracing::info!(base = %base.display(), "using base directory");
        Ok(found)
    } else {
        Err(Error::MissingDirectory {
            directories: missing,
        })
    }
}

/// List filenames in `dir` ending with `suffix`, sorted.
///
/// Only the final filename component is returned, never the full path.
/// The listing is sorted before being handed to the pairing validator:
/// positional correspondence between two independently-listed
/// directories depends on it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read.
pub fn list_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            if name.ends_with(suffix) {
                names.push(name);
            }
        }
    }
    names.sort();
    tracing::debug!(dir = %dir.display(), suffix, count = names.len(), "listed corpus");
    Ok(names)
}
