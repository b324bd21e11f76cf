//! Shuffle-split: seeded shuffle of a flat list, positional cut.

use rand::seq::SliceRandom;
use rand::Rng;

use super::SplitRatio;

/// Shuffle `items` with the caller's generator and cut at
/// `floor(n * ratio)`.
///
/// Returns `(train, test)`, disjoint and covering the input. Identical
/// input order, ratio, and generator state always produce an identical
/// partition; the generator is advanced by exactly one shuffle and
/// nothing else.
///
/// An empty input yields two empty halves without error. Callers that
/// require a non-empty corpus check before calling.
#[must_use]
pub fn shuffle_split<T, R: Rng>(
    mut items: Vec<T>,
    ratio: SplitRatio,
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    items.shuffle(rng);
    let cut = ratio.train_count(items.len());
    let test = items.split_off(cut);

    tracing::debug!(
        train = items.len(),
        test = test.len(),
        ratio = ratio.value(),
        "shuffle-split partition computed"
    );

    (items, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn corpus(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("sub-{i:03}.nii")).collect()
    }

    #[test]
    fn test_split_sizes_follow_floor_cut() {
        let ratio = SplitRatio::new(0.9).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let (train, test) = shuffle_split(corpus(100), ratio, &mut rng);
        assert_eq!(train.len(), 90);
        assert_eq!(test.len(), 10);
    }

    #[test]
    fn test_same_seed_same_partition() {
        let ratio = SplitRatio::new(0.7).unwrap();

        let mut rng_a = StdRng::seed_from_u64(7);
        let (train_a, test_a) = shuffle_split(corpus(53), ratio, &mut rng_a);

        let mut rng_b = StdRng::seed_from_u64(7);
        let (train_b, test_b) = shuffle_split(corpus(53), ratio, &mut rng_b);

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_different_seed_reorders() {
        let ratio = SplitRatio::new(0.5).unwrap();

        let mut rng_a = StdRng::seed_from_u64(1);
        let (train_a, _) = shuffle_split(corpus(64), ratio, &mut rng_a);

        let mut rng_b = StdRng::seed_from_u64(2);
        let (train_b, _) = shuffle_split(corpus(64), ratio, &mut rng_b);

        assert_ne!(train_a, train_b);
    }

    #[test]
    fn test_partitions_disjoint_and_covering() {
        let ratio = SplitRatio::new(0.8).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let (train, test) = shuffle_split(corpus(37), ratio, &mut rng);

        let mut all: Vec<String> = train.iter().chain(&test).cloned().collect();
        all.sort();
        assert_eq!(all, corpus(37));
    }

    #[test]
    fn test_empty_corpus_yields_empty_halves() {
        let ratio = SplitRatio::new(0.9).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let (train, test) = shuffle_split(Vec::<String>::new(), ratio, &mut rng);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
