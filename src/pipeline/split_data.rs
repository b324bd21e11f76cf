//! File-copy pipeline: partition paired volumes into train/test
//! directories on disk.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::corpus::{list_with_suffix, require_subdirs, validate_pairing};
use crate::split::{shuffle_split, SplitRatio};
use crate::{Error, Result};

/// Output directories populated by the split.
pub const DEST_DIRS: [&str; 4] = ["imagesTr", "imagesTs", "labelsTr", "labelsTs"];

/// Per-directory file counts after a completed split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSummary {
    /// Files copied into `imagesTr/` (== `labelsTr/`)
    pub train: usize,
    /// Files copied into `imagesTs/` (== `labelsTs/`)
    pub test: usize,
}

/// Split the corpus under `base_dir` into train/test subsets on disk.
///
/// Expects `images/` and `labels/` under `base_dir` holding
/// identically-named files. Pairing is validated before any output
/// directory is created or any file copied; a mismatched corpus leaves
/// the tree untouched. The partition is the seeded shuffle-split, so
/// re-running with the same corpus, ratio, and seed copies the same
/// files to the same sides.
///
/// # Errors
///
/// [`Error::MissingDirectory`] for an absent `images/` or `labels/`,
/// [`Error::EmptyCorpus`] when no file matches `suffix`,
/// [`Error::PairingMismatch`]/[`Error::StemMismatch`] for a broken
/// corpus, and [`Error::CopyFailure`] when an individual copy fails
/// (the run aborts; files already copied stay).
pub fn run(base_dir: &Path, ratio: SplitRatio, seed: u64, suffix: &str) -> Result<SplitSummary> {
    tracing::info!(
        base = %base_dir.display(),
        ratio = ratio.value(),
        seed,
        "starting data split"
    );

    let dirs = require_subdirs(base_dir, &["images", "labels"])?;
    let image_dir = dirs["images"].clone();
    let label_dir = dirs["labels"].clone();

    let images = list_with_suffix(&image_dir, suffix)?;
    if images.is_empty() {
        return Err(Error::EmptyCorpus(format!(
            "no *{suffix} files found in {}",
            image_dir.display()
        )));
    }
    tracing::info!(count = images.len(), suffix, "found corpus files");

    let labels = list_with_suffix(&label_dir, suffix)?;
    validate_pairing(&images, &labels)?;

    // Nothing is written until the corpus is known to be sound.
    for name in DEST_DIRS {
        fs::create_dir_all(base_dir.join(name))?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let (train, test) = shuffle_split(images, ratio, &mut rng);
    tracing::info!(train = train.len(), test = test.len(), "partition assigned");

    copy_group(&train, &image_dir, &label_dir, base_dir, "imagesTr", "labelsTr")?;
    copy_group(&test, &image_dir, &label_dir, base_dir, "imagesTs", "labelsTs")?;

    for name in DEST_DIRS {
        let count = list_with_suffix(&base_dir.join(name), suffix)?.len();
        tracing::info!(dir = name, count, "output directory populated");
    }

    Ok(SplitSummary {
        train: train.len(),
        test: test.len(),
    })
}

/// Copy each filename's image and label into the destination pair.
fn copy_group(
    names: &[String],
    image_dir: &Path,
    label_dir: &Path,
    base_dir: &Path,
    image_dest: &str,
    label_dest: &str,
) -> Result<()> {
    for name in names {
        copy_file(&image_dir.join(name), &base_dir.join(image_dest).join(name))?;
        copy_file(&label_dir.join(name), &base_dir.join(label_dest).join(name))?;
    }
    Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|source| Error::CopyFailure {
        path: src.to_path_buf(),
        source,
    })?;
    Ok(())
}
