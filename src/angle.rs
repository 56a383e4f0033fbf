
use crate::error::{Error, Result};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use std::f64::consts::TAU;


/// The shortest angular distance between two angles in radians.
/// The result always lies in `[0, π]`, however far apart the raw values are.
#[inline]
pub fn dtheta(theta_1: f64, theta_2: f64) -> f64 {
    let difference = (theta_1 - theta_2).abs() % TAU;
    difference.min(TAU - difference)
}

/// The euclidean distance between `(cos θ1, sin θ1)` and `(cos θ2, sin θ2)`.
/// Equal to `2 sin(dtheta(θ1, θ2) / 2)` up to rounding.
#[inline]
pub fn r2_norm(theta_1: f64, theta_2: f64) -> f64 {
    let delta_x = theta_1.cos() - theta_2.cos();
    let delta_y = theta_1.sin() - theta_2.sin();
    (delta_x * delta_x + delta_y * delta_y).sqrt()
}

/// Applies [`dtheta`] to every pair of corresponding elements.
pub fn dtheta_elementwise<S1, S2, D>(theta_1: &ArrayBase<S1, D>, theta_2: &ArrayBase<S2, D>) -> Result<Array<f64, D>>
    where S1: Data<Elem = f64>, S2: Data<Elem = f64>, D: Dimension
{
    elementwise(theta_1, theta_2, dtheta)
}

/// Applies [`r2_norm`] to every pair of corresponding elements.
pub fn r2_norm_elementwise<S1, S2, D>(theta_1: &ArrayBase<S1, D>, theta_2: &ArrayBase<S2, D>) -> Result<Array<f64, D>>
    where S1: Data<Elem = f64>, S2: Data<Elem = f64>, D: Dimension
{
    elementwise(theta_1, theta_2, r2_norm)
}

fn elementwise<S1, S2, D>(
    theta_1: &ArrayBase<S1, D>, theta_2: &ArrayBase<S2, D>,
    metric: fn(f64, f64) -> f64
) -> Result<Array<f64, D>>
    where S1: Data<Elem = f64>, S2: Data<Elem = f64>, D: Dimension
{
    if theta_1.shape() != theta_2.shape() {
        return Err(Error::ShapeMismatch {
            left: theta_1.shape().to_vec(),
            right: theta_2.shape().to_vec(),
        });
    }

    Ok(Zip::from(theta_1).and(theta_2).map_collect(|&a, &b| metric(a, b)))
}


#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn wraps_around_full_turn() {
        assert!((dtheta(0.1, TAU - 0.1) - 0.2).abs() < TOLERANCE);
        assert!((dtheta(0.0, PI) - PI).abs() < TOLERANCE);
        assert!((dtheta(-FRAC_PI_2, FRAC_PI_2) - PI).abs() < TOLERANCE);
    }

    #[test]
    fn large_differences_stay_in_range() {
        // five full turns plus a quarter
        let theta = 5.0 * TAU + FRAC_PI_2;
        assert!((dtheta(theta, 0.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((dtheta(0.0, -theta) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn chord_lengths() {
        assert!(r2_norm(0.3, 0.3).abs() < TOLERANCE);
        assert!((r2_norm(0.0, PI) - 2.0).abs() < TOLERANCE);
        assert!((r2_norm(0.0, FRAC_PI_2) - 2.0_f64.sqrt()).abs() < TOLERANCE);
    }

    #[test]
    fn elementwise_matches_scalar() {
        let first = arr2(&[[0.0, 1.0], [2.0, 7.0]]);
        let second = arr2(&[[PI, -1.0], [2.5, 0.0]]);

        let angular = dtheta_elementwise(&first, &second).unwrap();
        let chord = r2_norm_elementwise(&first, &second.view()).unwrap();

        for ((index, &a), &b) in first.indexed_iter().zip(second.iter()) {
            assert_eq!(angular[index], dtheta(a, b));
            assert_eq!(chord[index], r2_norm(a, b));
        }
    }

    #[test]
    fn elementwise_rejects_shape_mismatch() {
        let result = dtheta_elementwise(&arr1(&[0.0, 1.0]), &arr1(&[0.0, 1.0, 2.0]));
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));

        assert!(r2_norm_elementwise(&arr1(&[0.0]), &arr1::<f64>(&[])).is_err());
    }

    proptest! {
        #[test]
        fn dtheta_is_within_half_turn(a in -100.0..100.0_f64, b in -100.0..100.0_f64) {
            let distance = dtheta(a, b);
            prop_assert!(distance >= 0.0);
            prop_assert!(distance <= PI);
        }

        #[test]
        fn dtheta_is_symmetric(a in -100.0..100.0_f64, b in -100.0..100.0_f64) {
            prop_assert_eq!(dtheta(a, b), dtheta(b, a));
            prop_assert_eq!(dtheta(a, a), 0.0);
        }

        #[test]
        fn chord_follows_from_arc(a in -100.0..100.0_f64, b in -100.0..100.0_f64) {
            let expected = 2.0 * (dtheta(a, b) / 2.0).sin();
            prop_assert!((r2_norm(a, b) - expected).abs() < 1e-9);
        }
    }
}
