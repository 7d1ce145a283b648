use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::rectangle::Hyperrectangle;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn rand_point<R: Rng>(rng: &mut R, dims: usize, scale: f64) -> Vec<f64> {
    (0..dims).map(|_| rng.random::<f64>() * scale).collect()
}

pub fn rand_rect<R: Rng>(rng: &mut R, dims: usize, scale: f64) -> Hyperrectangle<f64> {
    let a = rand_point(rng, dims, scale);
    let b = rand_point(rng, dims, scale);
    Hyperrectangle::bounding(&[a, b])
}

/// A chain of `(split_dim, split_val)` pairs that successively halve `rect`,
/// cycling through the axes, as a k-d tree built over it would.
pub fn halving_splits(rect: &Hyperrectangle<f64>, depth: usize) -> Vec<(usize, f64)> {
    let mut rect = rect.clone();
    (0..depth)
        .map(|level| {
            let dim = level % rect.dims();
            let mid = (rect.min_along(dim) + rect.max_along(dim)) / 2.0;
            rect = rect.split(dim, mid).0;
            (dim, mid)
        })
        .collect()
}
