//! Deterministic partitioning
//!
//! Two variants, both reproducible given the same seed:
//!
//! - [`shuffle_split`]: seeded shuffle of a flat file list, cut at
//!   `floor(n * ratio)`. Used for the physical train/test copy.
//! - [`holdout_split`]: reserves a fraction of paired samples as a
//!   validation set, preserving image/label correspondence. Used for
//!   manifest construction.
//!
//! Randomness is never hidden global state: every split takes an
//! explicit generator, seeded exactly once per invocation by the
//! caller. Reproducibility is a structural property of the API, not a
//! side effect of call order.

mod holdout;
mod ratio;
mod shuffle;

pub use holdout::holdout_split;
pub use ratio::SplitRatio;
pub use shuffle::shuffle_split;
