//! Random-key ordering

use rand::Rng;

/// Attach an independent random key to each item and return the items
/// sorted by key, ascending.
pub fn order_by_random_keys<T, R>(items: impl IntoIterator<Item = T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let mut keyed: Vec<(f64, T)> = items
        .into_iter()
        .map(|item| (rng.gen_range(0.0..1.0), item))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}
