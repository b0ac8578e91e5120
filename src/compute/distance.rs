//! Distance and attractiveness between fireflies.
//!
//! Distances only cover the continuous prefix of the decision vector.

/// Squared Euclidean distance over the first `continuous` coordinates.
#[inline]
pub fn squared_distance(a: &[f64], b: &[f64], continuous: usize) -> f64 {
    a[..continuous]
        .iter()
        .zip(&b[..continuous])
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

/// Attractiveness `beta * exp(-gamma * r^2)`, in `[0, beta]` for `gamma >= 0`.
#[inline]
pub fn attractiveness(r_sqrd: f64, gamma: f64, beta: f64) -> f64 {
    beta * (-gamma * r_sqrd).exp()
}

/// Largest pairwise distance within a set of positions.
///
/// Returns 0 when fewer than two positions are given.
pub fn max_pairwise_distance(positions: &[Vec<f64>], continuous: usize) -> f64 {
    let mut r_max_sqrd = 0.0f64;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let r_sqrd = squared_distance(&positions[i], &positions[j], continuous);
            if r_sqrd > r_max_sqrd {
                r_max_sqrd = r_sqrd;
            }
        }
    }
    r_max_sqrd.sqrt()
}
