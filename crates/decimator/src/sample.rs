//! Pure selection arithmetic: percentage resolution and unbiased sampling.
//!
//! Everything here is free of I/O and deterministic given the injected RNG,
//! so the arithmetic and the selection are unit-testable with a seeded
//! generator. Production callers pass [`rand::rngs::OsRng`]: selection must
//! come from a cryptographically strong source so a destructive draw cannot
//! be predicted or biased by a fixed seed.

use rand::seq::index;
use rand::Rng;

/// Resolve a strength percentage against a population size.
///
/// Returns `floor(total * strength / 100)`. Strengths above 100 simply
/// resolve to at least the whole population; the sampler clamps from there.
///
/// # Examples
///
/// ```
/// use decimator::sample::removal_count;
///
/// assert_eq!(removal_count(10, 50), 5);
/// assert_eq!(removal_count(100, 30), 30);
/// assert_eq!(removal_count(3, 0), 0);
/// assert_eq!(removal_count(0, 90), 0);
/// // floor division
/// assert_eq!(removal_count(7, 50), 3);
/// ```
pub fn removal_count(total: usize, strength: u8) -> usize {
    total.saturating_mul(strength as usize) / 100
}

/// Draw `amount` distinct indices from `0..population`, uniformly at random.
///
/// - `amount == 0` yields an empty vector.
/// - `amount >= population` yields every index, each exactly once.
/// - Otherwise every `amount`-subset of the population is equally likely.
///
/// The order of the returned indices is unspecified.
pub fn sample_indices<R>(rng: &mut R, population: usize, amount: usize) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    if amount == 0 || population == 0 {
        return Vec::new();
    }
    if amount >= population {
        return (0..population).collect();
    }
    index::sample(rng, population, amount).into_vec()
}

/// Draw `amount` distinct items from `items`, uniformly at random.
///
/// Index sampling lifted to item references; the same clamping rules as
/// [`sample_indices`] apply.
pub fn sample_items<'a, T, R>(rng: &mut R, items: &'a [T], amount: usize) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    sample_indices(rng, items.len(), amount)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
