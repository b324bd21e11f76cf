//! Dataset manifest: the `dataset.json` schema, its builder, and the
//! durable writer.
//!
//! ## Schema Overview
//!
//! ```text
//! DatasetManifest
//!   ├── DatasetMetadata   (description, license, modality, labels, ...)
//!   ├── training          [{image, label}]  numTraining == len
//!   ├── validation        [{image, label}]
//!   └── test              [path]            numTest == len
//! ```
//!
//! The builder owns construction and the count invariants; the writer
//! owns persistence. Nothing mutates a manifest after it validates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use segprep::manifest::{DatasetManifest, DatasetMetadata, TrainingPair, write_manifest};
//!
//! let metadata = DatasetMetadata::new("ACT", "AISEG V5 - Code Validation");
//! let manifest = DatasetManifest::builder(metadata)
//!     .training(vec![TrainingPair::new("imagesTr/a.nii", "labelsTr/a.nii")])
//!     .validation(vec![])
//!     .test(vec!["imagesTs/b.nii".to_string()])
//!     .build()?;
//! write_manifest(&manifest, "dataset.json".as_ref())?;
//! # Ok::<(), segprep::Error>(())
//! ```

mod record;
mod writer;

pub use record::{
    DatasetManifest, DatasetMetadata, ManifestBuilder, TrainingPair, REQUIRED_KEYS,
};
pub use writer::write_manifest;
