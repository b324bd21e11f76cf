//! Manifest records: metadata, sample entries, and the validated
//! `DatasetManifest`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Top-level keys every well-formed `dataset.json` must carry.
pub const REQUIRED_KEYS: [&str; 13] = [
    "description",
    "labels",
    "license",
    "modality",
    "name",
    "numTest",
    "numTraining",
    "reference",
    "release",
    "tensorImageSize",
    "test",
    "training",
    "validation",
];

/// One training or validation entry: an image path and its label path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingPair {
    /// Path of the image volume
    pub image: String,
    /// Path of the label volume
    pub label: String,
}

impl TrainingPair {
    /// Create a new entry.
    #[must_use]
    pub fn new(image: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            label: label.into(),
        }
    }
}

/// Free-form descriptive fields of the dataset.
///
/// These are opaque to segprep; they pass through to the manifest
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetMetadata {
    /// Human-readable dataset description
    pub description: String,
    /// License identifier
    pub license: String,
    /// Input channel id -> modality name (e.g. `x0 -> T1`)
    pub modality: BTreeMap<String, String>,
    /// Class id -> class name (e.g. `x0 -> background`)
    pub labels: BTreeMap<String, String>,
    /// Short dataset name
    pub name: String,
    /// Citation or source reference
    pub reference: String,
    /// Release identifier
    pub release: String,
    /// Tensor dimensionality, e.g. `3D`
    #[serde(rename = "tensorImageSize")]
    pub tensor_image_size: String,
}

impl DatasetMetadata {
    /// Create metadata with the given name and description; every other
    /// field defaults to `NA` / empty and can be assigned directly.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            license: "NA".to_string(),
            modality: BTreeMap::new(),
            labels: BTreeMap::new(),
            name: name.into(),
            reference: "NA".to_string(),
            release: "NA".to_string(),
            tensor_image_size: "3D".to_string(),
        }
    }
}

/// The validated dataset manifest.
///
/// Field order matches the alphabetical key order of the serialized
/// document. Counts are derived from the emitted groups at build time,
/// never from the pre-split corpus, so `numTraining == training.len()`
/// and `numTest == test.len()` hold by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetManifest {
    description: String,
    labels: BTreeMap<String, String>,
    license: String,
    modality: BTreeMap<String, String>,
    name: String,
    #[serde(rename = "numTest")]
    num_test: usize,
    #[serde(rename = "numTraining")]
    num_training: usize,
    reference: String,
    release: String,
    #[serde(rename = "tensorImageSize")]
    tensor_image_size: String,
    test: Vec<String>,
    training: Vec<TrainingPair>,
    validation: Vec<TrainingPair>,
}

impl DatasetManifest {
    /// Create a builder seeded with the dataset metadata.
    #[must_use]
    pub fn builder(metadata: DatasetMetadata) -> ManifestBuilder {
        ManifestBuilder::new(metadata)
    }

    /// Number of training samples; always equals `training().len()`.
    #[must_use]
    pub const fn num_training(&self) -> usize {
        self.num_training
    }

    /// Number of test samples; always equals `test().len()`.
    #[must_use]
    pub const fn num_test(&self) -> usize {
        self.num_test
    }

    /// Training entries.
    #[must_use]
    pub fn training(&self) -> &[TrainingPair] {
        &self.training
    }

    /// Validation entries.
    #[must_use]
    pub fn validation(&self) -> &[TrainingPair] {
        &self.validation
    }

    /// Test image paths.
    #[must_use]
    pub fn test(&self) -> &[String] {
        &self.test
    }

    /// Dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Re-assert the structural invariants on a manifest that did not
    /// come from the builder (e.g. one parsed back from disk).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationFailure`] if a stated count drifts
    /// from the actual group size.
    pub fn validate(&self) -> Result<()> {
        if self.num_training != self.training.len() {
            return Err(Error::SerializationFailure(format!(
                "numTraining is {} but training has {} entries",
                self.num_training,
                self.training.len()
            )));
        }
        if self.num_test != self.test.len() {
            return Err(Error::SerializationFailure(format!(
                "numTest is {} but test has {} entries",
                self.num_test,
                self.test.len()
            )));
        }
        Ok(())
    }
}

/// Check that a serialized manifest carries every required top-level key.
///
/// Operates on the raw JSON value so it catches schema drift that typed
/// deserialization would paper over or reject with a less useful message.
///
/// # Errors
///
/// Returns [`Error::IncompleteManifest`] listing every missing key, or
/// [`Error::SerializationFailure`] if the document is not an object.
pub(crate) fn validate_required_keys(value: &serde_json::Value) -> Result<()> {
    let object = value.as_object().ok_or_else(|| {
        Error::SerializationFailure("manifest document is not a JSON object".to_string())
    })?;

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(ToString::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::IncompleteManifest { missing })
    }
}

/// Builder for [`DatasetManifest`].
///
/// The three sample groups are required; `build()` reports every unset
/// one in a single [`Error::IncompleteManifest`].
#[derive(Debug)]
pub struct ManifestBuilder {
    metadata: DatasetMetadata,
    training: Option<Vec<TrainingPair>>,
    validation: Option<Vec<TrainingPair>>,
    test: Option<Vec<String>>,
}

impl ManifestBuilder {
    /// Create a builder with the required metadata.
    #[must_use]
    pub const fn new(metadata: DatasetMetadata) -> Self {
        Self {
            metadata,
            training: None,
            validation: None,
            test: None,
        }
    }

    /// Set the training entries.
    #[must_use]
    pub fn training(mut self, training: Vec<TrainingPair>) -> Self {
        self.training = Some(training);
        self
    }

    /// Set the validation entries.
    #[must_use]
    pub fn validation(mut self, validation: Vec<TrainingPair>) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Set the test image paths.
    #[must_use]
    pub fn test(mut self, test: Vec<String>) -> Self {
        self.test = Some(test);
        self
    }

    /// Assemble the manifest, deriving the counts from the actual
    /// groups.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteManifest`] naming every group that was
    /// never set.
    pub fn build(self) -> Result<DatasetManifest> {
        let mut missing = Vec::new();
        if self.training.is_none() {
            missing.push("training".to_string());
        }
        if self.validation.is_none() {
            missing.push("validation".to_string());
        }
        if self.test.is_none() {
            missing.push("test".to_string());
        }
        if !missing.is_empty() {
            return Err(Error::IncompleteManifest { missing });
        }

        let training = self.training.unwrap_or_default();
        let validation = self.validation.unwrap_or_default();
        let test = self.test.unwrap_or_default();
        let metadata = self.metadata;

        let manifest = DatasetManifest {
            description: metadata.description,
            labels: metadata.labels,
            license: metadata.license,
            modality: metadata.modality,
            name: metadata.name,
            num_test: test.len(),
            num_training: training.len(),
            reference: metadata.reference,
            release: metadata.release,
            tensor_image_size: metadata.tensor_image_size,
            test,
            training,
            validation,
        };

        tracing::info!(
            train = manifest.num_training,
            validation = manifest.validation.len(),
            test = manifest.num_test,
            "dataset summary"
        );

        Ok(manifest)
    }
}
