//! # Segprep: Deterministic Dataset Preparation for Segmentation Training
//!
//! Segprep partitions a corpus of paired image/label volume files into
//! reproducible train/test subsets on disk, and builds the `dataset.json`
//! manifest a downstream training framework consumes.
//!
//! Both jobs are the same pipeline at different granularities:
//! discover -> validate pairing -> partition deterministically -> emit.
//!
//! ## Design Principles
//!
//! - **Determinism is structural**: every shuffle takes an explicit seeded
//!   generator; re-running with the same corpus, ratio, and seed yields an
//!   identical partition.
//! - **Fail fast**: pairing is validated before a single file is copied,
//!   and every error aborts the whole run. No partial output is trusted.
//! - **Manifests are verified, not assumed**: counts are derived from the
//!   emitted groups, required keys are checked before persisting, and the
//!   written file is re-parsed before the run is declared successful.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use segprep::split::{shuffle_split, SplitRatio};
//!
//! let corpus: Vec<String> = (0..100).map(|i| format!("sub-{i:03}.nii")).collect();
//! let ratio = SplitRatio::new(0.9)?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let (train, test) = shuffle_split(corpus, ratio, &mut rng);
//! assert_eq!(train.len(), 90);
//! assert_eq!(test.len(), 10);
//! # Ok::<(), segprep::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod corpus;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod split;

pub use error::{Error, Result};
