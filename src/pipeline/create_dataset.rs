//! Manifest pipeline: build and durably write `dataset.json` from an
//! already-split directory tree.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::corpus::{list_with_suffix, pair_files, require_subdirs, validate_pairing};
use crate::manifest::{write_manifest, DatasetManifest, DatasetMetadata, TrainingPair};
use crate::split::holdout_split;
use crate::Result;

/// Fraction of training pairs held out as the validation set.
pub const VALIDATION_FRACTION: f64 = 0.10;

/// Fixed seed for the holdout split, so the validation membership is
/// stable across runs.
pub const HOLDOUT_SEED: u64 = 42;

/// Build the dataset manifest for the tree under `base_dir` and write
/// it to `output`.
///
/// Expects `imagesTr/`, `labelsTr/`, and `imagesTs/` under `base_dir`.
/// Training pairs are validated, then split 90/10 into train/validation
/// with a fixed seed. The manifest counts come from the emitted groups:
/// `numTraining` is the post-holdout training size, not the pre-split
/// corpus size.
///
/// Returns the written manifest.
///
/// # Errors
///
/// Propagates discovery, pairing, holdout, build, and writer errors;
/// every one is fatal to the run.
pub fn run(
    base_dir: &Path,
    metadata: DatasetMetadata,
    output: &Path,
    suffix: &str,
) -> Result<DatasetManifest> {
    tracing::info!(
        base = %base_dir.display(),
        dataset = %metadata.name,
        classes = metadata.labels.len(),
        "starting manifest creation"
    );

    let dirs = require_subdirs(base_dir, &["imagesTr", "labelsTr", "imagesTs"])?;

    let test_names = list_with_suffix(&dirs["imagesTs"], suffix)?;
    let test: Vec<String> = test_names
        .iter()
        .map(|name| dirs["imagesTs"].join(name).display().to_string())
        .collect();
    tracing::info!(count = test.len(), "test files");

    let train_images = list_with_suffix(&dirs["imagesTr"], suffix)?;
    let train_labels = list_with_suffix(&dirs["labelsTr"], suffix)?;
    validate_pairing(&train_images, &train_labels)?;

    let pairs = pair_files(&dirs["imagesTr"], &dirs["labelsTr"], &train_images, &train_labels);

    let mut rng = StdRng::seed_from_u64(HOLDOUT_SEED);
    let (train_pairs, validation_pairs) = holdout_split(pairs, VALIDATION_FRACTION, &mut rng)?;

    let manifest = DatasetManifest::builder(metadata)
        .training(to_entries(&train_pairs))
        .validation(to_entries(&validation_pairs))
        .test(test)
        .build()?;

    write_manifest(&manifest, output)?;
    tracing::info!(output = %output.display(), "manifest creation completed");
    Ok(manifest)
}

fn to_entries(pairs: &[crate::corpus::SamplePair]) -> Vec<TrainingPair> {
    pairs
        .iter()
        .map(|pair| {
            TrainingPair::new(
                pair.image().display().to_string(),
                pair.label().display().to_string(),
            )
        })
        .collect()
}
