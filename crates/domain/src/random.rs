//! Injected randomness
//!
//! The domain never owns an RNG. Shuffling takes a `RandomSource` so the
//! player can hand in a platform RNG while tests replay a fixed sequence.

/// Source of uniformly distributed indexes.
pub trait RandomSource {
    /// Return an index in `[0, bound)`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Fisher–Yates shuffle in place.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        // Out-of-range values from a misbehaving source are folded back in.
        let j = rng.next_index(i + 1) % (i + 1);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `items` and keep the first `n`.
pub fn sample<T: Clone>(items: &[T], n: usize, rng: &mut impl RandomSource) -> Vec<T> {
    let mut picked = items.to_vec();
    shuffle(&mut picked, rng);
    picked.truncate(n);
    picked
}

/// Deterministic source that replays a fixed sequence of raw values.
///
/// Each value is reduced modulo the requested bound; the sequence wraps
/// around when exhausted. An empty sequence always yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always picks the top index, which leaves
    /// a Fisher–Yates shuffle as the identity permutation.
    pub fn identity() -> Self {
        Self::new(vec![usize::MAX])
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() || bound == 0 {
            return 0;
        }
        let raw = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        if raw == usize::MAX {
            bound - 1
        } else {
            raw % bound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_source_keeps_order() {
        let mut items = vec!["a", "b", "c", "d"];
        shuffle(&mut items, &mut SequenceRandom::identity());
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn zero_source_rotates_deterministically() {
        // Always swapping with index 0 walks the first element to the back.
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, &mut SequenceRandom::new(vec![0]));
        assert_eq!(items, vec![2, 3, 4, 1]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original = vec!["import", "load", "fit", "predict", "score", "plot"];
        for seed in 0..20usize {
            let mut items = original.clone();
            let mut rng = SequenceRandom::new(vec![seed, seed * 7 + 3, seed * 13 + 1]);
            shuffle(&mut items, &mut rng);

            let mut sorted = items.clone();
            sorted.sort();
            let mut expected = original.clone();
            expected.sort();
            assert_eq!(sorted, expected, "seed {seed} changed the multiset");
        }
    }

    #[test]
    fn sample_truncates_after_shuffling() {
        let pool = vec![10, 20, 30, 40, 50];
        let picked = sample(&pool, 3, &mut SequenceRandom::identity());
        assert_eq!(picked, vec![10, 20, 30]);
    }

    #[test]
    fn sample_larger_than_pool_returns_everything() {
        let pool = vec![1, 2];
        assert_eq!(sample(&pool, 5, &mut SequenceRandom::identity()).len(), 2);
    }
}
