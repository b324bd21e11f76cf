//! Validated train fraction for shuffle-split.

use crate::{Error, Result};

/// Train fraction in the open interval (0, 1).
///
/// A fraction of exactly 0 or 1 is rejected at the boundary: a split
/// that assigns everything to one side is a configuration mistake, not
/// a degenerate partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatio(f64);

impl SplitRatio {
    /// Validate and wrap a train fraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `0.0 < value < 1.0`.
    pub fn new(value: f64) -> Result<Self> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidParameter(format!(
                "split ratio must be strictly between 0.0 and 1.0, got: {value}"
            )))
        }
    }

    /// The raw fraction.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Number of training samples out of `total`.
    ///
    /// Truncates rather than rounds: `floor(total * ratio)`. The
    /// fractional remainder therefore biases slightly toward the test
    /// set.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn train_count(self, total: usize) -> usize {
        (total as f64 * self.0) as usize
    }
}
