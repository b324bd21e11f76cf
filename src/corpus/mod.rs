//! Corpus discovery and pairing
//!
//! A corpus is the sorted sequence of volume filenames in one directory,
//! filtered by suffix. Sorting is mandatory, not incidental: image and
//! label directories are listed independently, and every downstream
//! split decision relies on `images[i]` and `labels[i]` referring to the
//! same logical sample. That correspondence is name-derived, so it is
//! asserted here before anything else runs.

mod discovery;
mod pairing;

pub use discovery::{list_with_suffix, require_subdirs};
pub use pairing::{pair_files, validate_pairing, SamplePair};

/// Default filename suffix for volume files
pub const DEFAULT_SUFFIX: &str = ".nii";
