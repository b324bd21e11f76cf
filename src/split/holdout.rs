//! Holdout split: reserves a fraction of paired samples for validation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::corpus::SamplePair;
use crate::{Error, Result};

/// Shuffle paired samples and hold out `fraction` of them as a
/// validation set.
///
/// Returns `(train, validation)`. Pairs move as units, so image/label
/// correspondence is preserved in both halves. The validation set takes
/// `ceil(n * fraction)` samples, so any non-empty corpus holds out at
/// least one.
///
/// # Errors
///
/// Returns [`Error::EmptyCorpus`] for an empty input: downstream needs
/// at least one sample, and a fraction of nothing is undefined. Returns
/// [`Error::InvalidParameter`] unless `0.0 < fraction < 1.0`, or when
/// the ceiling would send every pair to validation and leave the
/// training set empty (e.g. a single pair at any fraction).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn holdout_split<R: Rng>(
    mut pairs: Vec<SamplePair>,
    fraction: f64,
    rng: &mut R,
) -> Result<(Vec<SamplePair>, Vec<SamplePair>)> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "holdout fraction must be strictly between 0.0 and 1.0, got: {fraction}"
        )));
    }
    if pairs.is_empty() {
        return Err(Error::EmptyCorpus(
            "holdout split requires at least one sample pair".to_string(),
        ));
    }

    let n_validation = (pairs.len() as f64 * fraction).ceil() as usize;
    if n_validation == pairs.len() {
        return Err(Error::InvalidParameter(format!(
            "holding out {n_validation} of {} pairs leaves an empty training set",
            pairs.len()
        )));
    }

    pairs.shuffle(rng);
    let validation = pairs.split_off(pairs.len() - n_validation);

    tracing::info!(
        train = pairs.len(),
        validation = validation.len(),
        fraction,
        "holdout partition computed"
    );

    Ok((pairs, validation))
}
