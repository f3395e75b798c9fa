//! Value generators for the two document shapes.
//!
//! All generators draw from an explicitly passed RNG so that callers control
//! seeding.

pub mod flat;
pub mod structured;
pub mod uuid;

use rand::distr::Alphanumeric;
use rand::Rng;

/// Pick one value uniformly from a fixed vocabulary.
///
/// Vocabularies are compile-time constants and never empty.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, values: &[T]) -> T {
    let idx = rng.random_range(0..values.len());
    values[idx]
}

/// Generate a random ASCII alphanumeric string of the given length.
pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_string_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(42);

        for len in [0, 1, 8, 15, 20] {
            let s = random_string(&mut rng, len);
            assert_eq!(s.len(), len);
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_pick_stays_in_vocabulary() {
        let mut rng = StdRng::seed_from_u64(7);
        let vocab = ["a", "b", "c"];

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let v = pick(&mut rng, &vocab);
            assert!(vocab.contains(&v));
            seen.insert(v);
        }
        assert_eq!(seen.len(), vocab.len());
    }

    #[test]
    fn test_pick_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let vocab = [1, 2, 3, 4, 5, 6, 7, 8, 9];

        let a: Vec<_> = (0..20).map(|_| pick(&mut rng1, &vocab)).collect();
        let b: Vec<_> = (0..20).map(|_| pick(&mut rng2, &vocab)).collect();
        assert_eq!(a, b);
    }
}
