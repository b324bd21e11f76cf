//! Pairing validation: image/label correspondence checks and the
//! `SamplePair` record.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// One image file and its corresponding label file, linked by filename.
///
/// Immutable once formed: created during pairing, consumed once by
/// partition assignment, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    image: PathBuf,
    label: PathBuf,
}

impl SamplePair {
    /// Create a new sample pair.
    #[must_use]
    pub fn new(image: PathBuf, label: PathBuf) -> Self {
        Self { image, label }
    }

    /// Path of the image volume.
    #[must_use]
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Path of the label volume.
    #[must_use]
    pub fn label(&self) -> &Path {
        &self.label
    }
}

/// Validate that two sorted listings correspond positionally.
///
/// Equal length is necessary but not sufficient: two corpora with
/// divergent names can still sort to the same positions, silently
/// mis-pairing samples. So after the count check, the filename stem at
/// each index must also match.
///
/// # Errors
///
/// Returns [`Error::PairingMismatch`] on unequal counts, or
/// [`Error::StemMismatch`] at the first index whose stems diverge.
pub fn validate_pairing(images: &[String], labels: &[String]) -> Result<()> {
    if images.len() != labels.len() {
        return Err(Error::PairingMismatch {
            images: images.len(),
            labels: labels.len(),
        });
    }

    for (index, (image, label)) in images.iter().zip(labels).enumerate() {
        if stem(image) != stem(label) {
            return Err(Error::StemMismatch {
                index,
                image: image.clone(),
                label: label.clone(),
            });
        }
    }

    tracing::info!(pairs = images.len(), "validated image-label pairs");
    Ok(())
}

/// Join validated listings into full-path sample pairs.
///
/// Callers must have run [`validate_pairing`] first; this function only
/// assembles paths.
#[must_use]
pub fn pair_files(
    image_dir: &Path,
    label_dir: &Path,
    images: &[String],
    labels: &[String],
) -> Vec<SamplePair> {
    images
        .iter()
        .zip(labels)
        .map(|(image, label)| SamplePair::new(image_dir.join(image), label_dir.join(label)))
        .collect()
}

fn stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}
