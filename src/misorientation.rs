//
// misorientation.rs
// Copyright (C) 2019 Malcolm Ramsay <m@malramsay.com>
// Distributed under terms of the MIT license.
//

use log::debug;
use nalgebra::{Matrix3, Vector3};

use crate::checks;
use crate::error::SymmetryError;
use crate::system::CrystalSystem;

/// The misorientation angles between two orientations under symmetry
///
/// The orientation `umat_2` has one equivalent description for each symmetry
/// operator of the crystal system, and each description sits at a different
/// angle from `umat_1`. This returns the full list of those angles in degrees
/// as `(operator index, angle)` pairs in table order. The conventional
/// misorientation angle between the two orientations is the minimum of the
/// list, which is left to the caller.
///
/// For each rotation operator R the angle derives from the rotation
/// `R * umat_1^T * umat_2`, whose trace is computed as the element-wise
/// product sum `R ⊙ (umat_1^T * umat_2)`. The cosine is clamped to [-1, 1]
/// before the inverse cosine to guard against floating-point overshoot.
///
/// When strict checks are activated (see [`crate::checks`]) both inputs are
/// validated as proper rotation matrices before any operator is applied,
/// failing with [`SymmetryError::InvalidRotationMatrix`] otherwise.
///
/// ```
/// use nalgebra::Matrix3;
/// use crystal_symmetry::{misorientation, CrystalSystem};
///
/// // The 90 degree rotation about z is a cubic symmetry operator, so under
/// // cubic symmetry it is indistinguishable from the identity.
/// let umat_1 = Matrix3::identity();
/// let umat_2 = Matrix3::new(0., -1., 0., 1., 0., 0., 0., 0., 1.);
/// let angles = misorientation(&umat_1, &umat_2, CrystalSystem::Cubic).unwrap();
/// let minimum = angles.iter().map(|&(_, angle)| angle).fold(f64::MAX, f64::min);
/// assert!(minimum < 1e-6);
/// ```
///
pub fn misorientation(
    umat_1: &Matrix3<f64>,
    umat_2: &Matrix3<f64>,
    system: CrystalSystem,
) -> Result<Vec<(usize, f64)>, SymmetryError> {
    if checks::is_activated() {
        checks::check_rotation_matrix(umat_1)?;
        checks::check_rotation_matrix(umat_2)?;
    }

    let relative = umat_1.transpose() * umat_2;
    Ok(system
        .rotations()
        .iter()
        .enumerate()
        .map(|(index, rot)| {
            let cos_angle = 0.5 * rot.component_mul(&relative).sum() - 0.5;
            (index, cos_angle.clamp(-1., 1.).acos().to_degrees())
        })
        .collect())
}

/// Log the image of a Miller-index vector under every permutation operator
///
/// Emits one debug record per operator of the crystal system, for interactive
/// inspection of the table.
pub fn debug_permutations(hkl: &Vector3<f64>, system: CrystalSystem) {
    for (index, perm) in system.permutations().iter().enumerate() {
        debug!(
            "{} permutation {}: {}",
            system,
            index,
            perm.map(f64::from) * hkl
        );
    }
}

/// Log the image of an orientation matrix under every rotation operator
///
/// Emits one debug record per operator of the crystal system, for interactive
/// inspection of the table.
pub fn debug_rotations(umat: &Matrix3<f64>, system: CrystalSystem) {
    for (index, rot) in system.rotations().iter().enumerate() {
        debug!("{} rotation {}: {}", system, index, umat * rot);
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use nalgebra::{Rotation3, Vector3};
    use proptest::prelude::*;
    use proptest_attr_macro::proptest;

    use super::*;

    /// Euler angles clamped to a sensible range for property tests
    ///
    /// Orientation matrices built from very large angles lose precision in
    /// the trigonometric argument reduction well before the symmetry
    /// calculation sees them, so the angles are kept within a few turns.
    #[derive(Debug, Clone, Copy)]
    struct PropAngle {
        value: f64,
    }

    impl Arbitrary for PropAngle {
        type Parameters = ();
        type Strategy = BoxedStrategy<PropAngle>;

        fn arbitrary_with(_args: ()) -> Self::Strategy {
            (-10.0..=10.0).prop_map(|value| PropAngle { value }).boxed()
        }
    }

    fn orientation(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
        Rotation3::from_euler_angles(roll, pitch, yaw).into_inner()
    }

    #[test]
    fn result_length_matches_order() {
        let umat = Matrix3::identity();
        for &system in CrystalSystem::ALL.iter() {
            let result = misorientation(&umat, &umat, system).unwrap();
            assert_eq!(result.len(), system.order());
        }
    }

    #[test]
    fn indices_are_table_order() {
        let umat = Matrix3::identity();
        for &system in CrystalSystem::ALL.iter() {
            let result = misorientation(&umat, &umat, system).unwrap();
            for (position, &(index, _)) in result.iter().enumerate() {
                assert_eq!(index, position);
            }
        }
    }

    #[test]
    fn identical_orientations() {
        let umat = orientation(0.3, -0.8, 1.4);
        for &system in CrystalSystem::ALL.iter() {
            let result = misorientation(&umat, &umat, system).unwrap();
            assert_abs_diff_eq!(result[0].1, 0., epsilon = 1e-5);
        }
    }

    #[test]
    fn triclinic_is_direct_angle() {
        let umat_1 = Matrix3::identity();
        let angle = 0.7;
        let umat_2 = Rotation3::from_axis_angle(&Vector3::x_axis(), angle).into_inner();
        let result = misorientation(&umat_1, &umat_2, CrystalSystem::Triclinic).unwrap();
        assert_eq!(result.len(), 1);
        assert_abs_diff_eq!(result[0].1, angle.to_degrees(), epsilon = 1e-8);
    }

    #[test]
    fn angles_within_range() {
        let umat_1 = orientation(1.0, 2.0, 3.0);
        let umat_2 = orientation(-2.0, 0.5, -1.0);
        for &system in CrystalSystem::ALL.iter() {
            for (_, angle) in misorientation(&umat_1, &umat_2, system).unwrap() {
                assert!((0. ..=180.).contains(&angle));
            }
        }
    }

    #[proptest]
    fn self_misorientation_is_zero(roll: PropAngle, pitch: PropAngle, yaw: PropAngle) {
        let umat = orientation(roll.value, pitch.value, yaw.value);
        for &system in CrystalSystem::ALL.iter() {
            let result = misorientation(&umat, &umat, system).unwrap();
            assert_abs_diff_eq!(result[0].1, 0., epsilon = 1e-5);
        }
    }

    #[test]
    fn debug_helpers_run() {
        let hkl = Vector3::new(1., 2., 3.);
        let umat = orientation(0.1, 0.2, 0.3);
        for &system in CrystalSystem::ALL.iter() {
            debug_permutations(&hkl, system);
            debug_rotations(&umat, system);
        }
    }
}
