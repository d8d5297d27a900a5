//
// basis.rs
// Copyright (C) 2019 Malcolm Ramsay <m@malramsay.com>
// Distributed under terms of the MIT license.
//

use nalgebra::Matrix3;

/// Construct the Busing–Levy basis matrix from the unit-cell parameters
///
/// The basis matrix B maps fractional lattice coordinates onto an orthonormal
/// Cartesian frame. For cells with non-orthogonal axes, such as the trigonal
/// and hexagonal systems, this is the change of basis required to express a
/// lattice permutation as a true rotation.
///
/// Cell lengths are in arbitrary units and angles in degrees. The matrix is
/// upper triangular with the a* axis along x, following Busing and Levy
/// (1967). Any overall scale factor cancels when B is used in a conjugation,
/// so no 2π convention is applied.
///
/// ```
/// use crystal_symmetry::form_basis;
/// use nalgebra::Matrix3;
/// use approx::assert_abs_diff_eq;
///
/// // A cubic cell of unit length has an orthonormal basis already.
/// let basis = form_basis(1., 1., 1., 90., 90., 90.);
/// assert_abs_diff_eq!(basis, Matrix3::identity(), epsilon = 1e-12);
/// ```
///
pub fn form_basis(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Matrix3<f64> {
    let (alpha, beta, gamma) = (alpha.to_radians(), beta.to_radians(), gamma.to_radians());
    let (cos_a, cos_b, cos_g) = (alpha.cos(), beta.cos(), gamma.cos());

    let volume = a
        * b
        * c
        * f64::sqrt(
            1. - cos_a * cos_a - cos_b * cos_b - cos_g * cos_g + 2. * cos_a * cos_b * cos_g,
        );

    // Reciprocal cell parameters
    let a_star = b * c * alpha.sin() / volume;
    let b_star = a * c * beta.sin() / volume;
    let c_star = a * b * gamma.sin() / volume;
    let cos_b_star = (cos_a * cos_g - cos_b) / (alpha.sin() * gamma.sin());
    let cos_g_star = (cos_a * cos_b - cos_g) / (alpha.sin() * beta.sin());
    let sin_b_star = f64::sqrt(1. - cos_b_star * cos_b_star);
    let sin_g_star = f64::sqrt(1. - cos_g_star * cos_g_star);

    Matrix3::new(
        a_star,
        b_star * cos_g_star,
        c_star * cos_b_star,
        0.,
        b_star * sin_g_star,
        -c_star * sin_b_star * cos_a,
        0.,
        0.,
        1. / c,
    )
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn orthonormal_cell_is_identity() {
        let basis = form_basis(1., 1., 1., 90., 90., 90.);
        assert_abs_diff_eq!(basis, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn orthorhombic_cell_is_diagonal() {
        let basis = form_basis(2., 3., 4., 90., 90., 90.);
        let expected = Matrix3::new(0.5, 0., 0., 0., 1. / 3., 0., 0., 0., 0.25);
        assert_abs_diff_eq!(basis, expected, epsilon = 1e-12);
    }

    #[test]
    fn hexagonal_cell() {
        let basis = form_basis(1., 1., 1., 90., 90., 120.);
        let expected = Matrix3::new(
            2. / f64::sqrt(3.),
            1. / f64::sqrt(3.),
            0.,
            0.,
            1.,
            0.,
            0.,
            0.,
            1.,
        );
        assert_abs_diff_eq!(basis, expected, epsilon = 1e-12);
    }

    #[test]
    fn upper_triangular() {
        let basis = form_basis(1.2, 2.3, 3.4, 80., 95., 110.);
        assert_abs_diff_eq!(basis[(1, 0)], 0.);
        assert_abs_diff_eq!(basis[(2, 0)], 0.);
        assert_abs_diff_eq!(basis[(2, 1)], 0.);
    }

    #[test]
    fn maps_cell_lengths() {
        // The columns of B are the reciprocal-space images of the cell axes,
        // so B applied to a lattice vector has the length of that vector in
        // the real cell for an orthogonal cell.
        let basis = form_basis(2., 3., 4., 90., 90., 90.);
        let vector = basis * nalgebra::Vector3::new(1., 0., 0.);
        assert_abs_diff_eq!(vector.norm(), 0.5, epsilon = 1e-12);
    }
}
