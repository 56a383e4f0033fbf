
use crate::distance_field::eps_ball;
use crate::error::{Error, Result};
use log::debug;
use ndarray::{Array2, Array3, Ix3};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Seed used when angles are sampled and no other seed is given.
pub const DEFAULT_SEED: u64 = 12345;


/// Parameters of a rotating ball dataset.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct S1Options {
    /// Number of angles to sample, ignored when explicit angles are given.
    pub num_samples: usize,

    /// Width and height of every image.
    pub side: usize,

    /// Radius of the ball in pixels.
    pub eps: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
    pub seed: u64,
}

#[cfg(feature = "serde")]
fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl S1Options {
    pub fn new(num_samples: usize, side: usize, eps: f64) -> Self {
        S1Options { num_samples, side, eps, seed: DEFAULT_SEED }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        S1Options { seed, ..self }
    }

    /// See [`gen_data_s1`].
    pub fn generate(&self, thetas: Option<&[f64]>) -> Result<(Array3<u8>, Vec<f64>)> {
        gen_data_s1(self.num_samples, self.side, self.eps, thetas, self.seed)
    }
}


/// Draws `num_samples` angles uniformly from `[0, 2π)`.
/// The same seed always produces the same angles.
pub fn sample_angles(num_samples: usize, seed: u64) -> Vec<f64> {
    debug!("sampling {} angles with seed {}", num_samples, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_samples).map(|_| rng.gen_range(0.0..TAU)).collect()
}

/// The position of the ball for angle `theta` in an image of width and height `side`.
///
/// Centers lie on a circle of radius `side / 4` around the pixel centroid `(side - 1) / 2`.
/// The cosine goes to axis 0, which is the row axis,
/// so displayed images appear rotated by a quarter turn.
#[inline]
pub fn circle_center(theta: f64, side: usize) -> [f64; 2] {
    let side = side as f64;
    let middle = 0.5 * (side - 1.0);
    let radius = 0.25 * side;

    [middle + theta.cos() * radius, middle + theta.sin() * radius]
}

/// The centers of all angles, shaped `(thetas.len(), 2)`.
pub fn circle_centers(thetas: &[f64], side: usize) -> Array2<f64> {
    let mut centers = Array2::zeros((thetas.len(), 2));

    for (mut center, &theta) in centers.rows_mut().into_iter().zip(thetas) {
        let [row, col] = circle_center(theta, side);
        center[0] = row;
        center[1] = col;
    }

    centers
}

/// Generates images of a ball of radius `eps` moving on a circle, one per angle.
///
/// If `thetas` is `None`, `num_samples` angles are sampled using `seed`.
/// Otherwise the given angles are used and returned unchanged.
/// The images have shape `(n, side, side)`, and image `i` belongs to the returned angle `i`.
///
/// Fails with [`Error::InvalidSampleCount`] if no angles are given and `num_samples` is zero.
pub fn gen_data_s1(
    num_samples: usize, side: usize, eps: f64,
    thetas: Option<&[f64]>, seed: u64
) -> Result<(Array3<u8>, Vec<f64>)> {
    let thetas = match thetas {
        Some(thetas) => thetas.to_vec(),
        None if num_samples == 0 => return Err(Error::InvalidSampleCount),
        None => sample_angles(num_samples, seed),
    };

    let centers = circle_centers(&thetas, side);
    let images = eps_ball(&[side, side], &centers, eps)?.into_dimensionality::<Ix3>()?;

    Ok((images, thetas))
}
