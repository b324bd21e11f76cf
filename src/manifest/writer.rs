//! Durable manifest writer: backup, sorted-key serialization, and
//! round-trip verification.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use super::record::{validate_required_keys, DatasetManifest};
use crate::{Error, Result};

/// Persist a manifest to `path`, never clobbering a prior version.
///
/// An existing file at `path` is first renamed to
/// `<stem>.backup_<YYYYMMDD_HHMMSS>.json` alongside it. The document is
/// written UTF-8 with keys in alphabetical order and 4-space
/// indentation, then immediately re-read, re-parsed, and compared to
/// the in-memory manifest. A write is not trusted until it round-trips.
///
/// # Errors
///
/// Returns [`Error::SerializationFailure`] if serialization, the
/// round-trip parse, or the equality check fails; [`Error::Io`] for
/// filesystem failures.
pub fn write_manifest(manifest: &DatasetManifest, path: &Path) -> Result<()> {
    if path.exists() {
        let backup = backup_path(path);
        fs::rename(path, &backup)?;
        tracing::info!(backup = %backup.display(), "created backup of prior manifest");
    }

    // Routing through serde_json::Value sorts the object keys: the
    // default map representation is a BTreeMap.
    let value = serde_json::to_value(manifest)
        .map_err(|e| Error::SerializationFailure(format!("encoding manifest: {e}")))?;
    validate_required_keys(&value)?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| Error::SerializationFailure(format!("writing manifest: {e}")))?;
    fs::write(path, &buf)?;

    let raw = fs::read_to_string(path)?;
    let reread: DatasetManifest = serde_json::from_str(&raw).map_err(|e| {
        Error::SerializationFailure(format!(
            "round-trip parse of just-written {} failed: {e}",
            path.display()
        ))
    })?;
    reread.validate()?;
    if &reread != manifest {
        return Err(Error::SerializationFailure(format!(
            "round-trip of {} does not match the manifest in memory",
            path.display()
        )));
    }

    tracing::info!(path = %path.display(), bytes = buf.len(), "manifest saved and verified");
    Ok(())
}

fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    path.with_file_name(format!("{stem}.backup_{timestamp}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{DatasetMetadata, TrainingPair};
    use tempfile::TempDir;

    fn manifest() -> DatasetManifest {
        DatasetManifest::builder(DatasetMetadata::new("ACT", "writer test"))
            .training(vec![TrainingPair::new("imagesTr/a.nii", "labelsTr/a.nii")])
            .validation(vec![])
            .test(vec!["imagesTs/b.nii".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn test_write_fresh_manifest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.json");
        write_manifest(&manifest(), &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("    \"description\""), "expected 4-space indent");
        let parsed: DatasetManifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, manifest());
    }

    #[test]
    fn test_keys_serialized_in_sorted_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.json");
        write_manifest(&manifest(), &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let positions: Vec<usize> = crate::manifest::REQUIRED_KEYS
            .iter()
            .map(|key| raw.find(&format!("\"{key}\"")).expect("key present"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "keys out of alphabetical order");
    }

    #[test]
    fn test_existing_manifest_backed_up_not_clobbered() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dataset.json");
        fs::write(&path, "{\"old\": true}").unwrap();

        write_manifest(&manifest(), &path).unwrap();

        let backups: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.starts_with("dataset.backup_") && name.ends_with(".json"))
            .collect();
        assert_eq!(backups.len(), 1, "expected exactly one backup");

        let prior = fs::read_to_string(tmp.path().join(&backups[0])).unwrap();
        assert_eq!(prior, "{\"old\": true}");
    }

    #[test]
    fn test_backup_path_shape() {
        let backup = backup_path(Path::new("/data/dataset.json"));
        let name = backup.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("dataset.backup_"));
        assert!(name.ends_with(".json"));
        // dataset.backup_YYYYMMDD_HHMMSS.json
        assert_eq!(name.len(), "dataset.backup_".len() + 15 + ".json".len());
    }
}
