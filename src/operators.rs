//
// operators.rs
// Copyright (C) 2019 Malcolm Ramsay <m@malramsay.com>
// Distributed under terms of the MIT license.
//

//! The symmetry operator tables of the seven crystal systems
//!
//! Every crystal system has a fixed set of proper rotations under which a
//! lattice is indistinguishable from itself. Each operator has two
//! representations, an integer permutation matrix acting on Miller indices and
//! an orthonormal rotation matrix acting on orientations. Entry i of the
//! rotation table is always the same symmetry element as entry i of the
//! permutation table.
//!
//! Both tables are built once on first use and shared read-only for the life
//! of the process.

use std::sync::OnceLock;

use nalgebra::Matrix3;

use crate::basis::form_basis;
use crate::system::CrystalSystem;

static PERMUTATIONS: OnceLock<[Vec<Matrix3<i32>>; 7]> = OnceLock::new();
static ROTATIONS: OnceLock<[Vec<Matrix3<f64>>; 7]> = OnceLock::new();

impl CrystalSystem {
    /// The lattice permutation operators of this crystal system
    ///
    /// These are the signed integer matrices mapping a set of Miller indices
    /// onto an equivalent set, `hkl_new = perm * hkl`. Entry 0 is always the
    /// identity. The trigonal and hexagonal tables contain only the proper
    /// rotations of their point groups, giving the operator counts
    /// {1, 2, 4, 8, 6, 12, 24} for the systems in id order.
    ///
    /// ```
    /// use crystal_symmetry::CrystalSystem;
    /// assert_eq!(CrystalSystem::Cubic.permutations().len(), 24);
    /// ```
    ///
    pub fn permutations(self) -> &'static [Matrix3<i32>] {
        let tables = PERMUTATIONS.get_or_init(|| CrystalSystem::ALL.map(build_permutations));
        &tables[self as usize - 1]
    }

    /// The orientation-space rotation operators of this crystal system
    ///
    /// Each rotation operator expresses the same symmetry element as the
    /// permutation operator at the same index, acting on an orientation
    /// matrix from the right, `U_new = U * rot`. For the systems with an
    /// orthonormal lattice basis the rotation is simply the transpose of the
    /// permutation. The trigonal and hexagonal cells are not orthogonal, so
    /// their permutations are conjugated through the basis matrix of the
    /// (1, 1, 1, 90, 90, 120) cell, `rot = B * perm^-1 * B^-1`.
    ///
    pub fn rotations(self) -> &'static [Matrix3<f64>] {
        let tables = ROTATIONS.get_or_init(|| CrystalSystem::ALL.map(build_rotations));
        &tables[self as usize - 1]
    }
}

fn build_rotations(system: CrystalSystem) -> Vec<Matrix3<f64>> {
    match system {
        CrystalSystem::Trigonal | CrystalSystem::Hexagonal => {
            let basis = form_basis(1., 1., 1., 90., 90., 120.);
            let basis_inv = basis
                .try_inverse()
                .expect("upper-triangular basis with nonzero diagonal");
            build_permutations(system)
                .iter()
                .map(|perm| basis * unimodular_inverse(perm).map(f64::from) * basis_inv)
                .collect()
        }
        // The remaining systems have an orthonormal lattice basis, where the
        // inverse of a permutation is its transpose.
        _ => build_permutations(system)
            .iter()
            .map(|perm| perm.map(f64::from).transpose())
            .collect(),
    }
}

/// Invert a unimodular integer matrix exactly
///
/// The permutation operators all have determinant ±1, so the adjugate divided
/// by the determinant is again an integer matrix and no floating-point
/// inversion is needed.
fn unimodular_inverse(m: &Matrix3<i32>) -> Matrix3<i32> {
    let det = m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)]);
    debug_assert!(det == 1 || det == -1);

    let adjugate = Matrix3::new(
        m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
        m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
        m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
        m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
        m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
        m[(0, 2)] * m[(1, 0)] - m[(0, 0)] * m[(1, 2)],
        m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
        m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)],
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
    );
    // det is ±1 so dividing by it is the same as multiplying
    adjugate * det
}

#[rustfmt::skip]
fn build_permutations(system: CrystalSystem) -> Vec<Matrix3<i32>> {
    match system {
        CrystalSystem::Triclinic => vec![
            Matrix3::new( 1,  0,  0,   0,  1,  0,   0,  0,  1),
        ],
        CrystalSystem::Monoclinic => vec![
            Matrix3::new( 1,  0,  0,   0,  1,  0,   0,  0,  1),
            Matrix3::new(-1,  0,  0,   0,  1,  0,   0,  0, -1),
        ],
        CrystalSystem::Orthorhombic => vec![
            Matrix3::new( 1,  0,  0,   0,  1,  0,   0,  0,  1),
            Matrix3::new(-1,  0,  0,   0, -1,  0,   0,  0,  1),
            Matrix3::new(-1,  0,  0,   0,  1,  0,   0,  0, -1),
            Matrix3::new( 1,  0,  0,   0, -1,  0,   0,  0, -1),
        ],
        CrystalSystem::Tetragonal => vec![
            Matrix3::new( 1,  0,  0,   0,  1,  0,   0,  0,  1),
            Matrix3::new(-1,  0,  0,   0, -1,  0,   0,  0,  1),
            Matrix3::new( 0,  1,  0,  -1,  0,  0,   0,  0,  1),
            Matrix3::new( 0, -1,  0,   1,  0,  0,   0,  0,  1),
            Matrix3::new(-1,  0,  0,   0,  1,  0,   0,  0, -1),
            Matrix3::new( 1,  0,  0,   0, -1,  0,   0,  0, -1),
            Matrix3::new( 0,  1,  0,   1,  0,  0,   0,  0, -1),
            Matrix3::new( 0, -1,  0,  -1,  0,  0,   0,  0, -1),
        ],
        CrystalSystem::Trigonal => vec![
            Matrix3::new( 1,  0,  0,   0,  1,  0,   0,  0,  1),
            Matrix3::new( 0,  1,  0,  -1, -1,  0,   0,  0,  1),
            Matrix3::new(-1, -1,  0,   1,  0,  0,   0,  0,  1),
            Matrix3::new( 0,  1,  0,   1,  0,  0,   0,  0, -1),
            Matrix3::new( 1,  0,  0,  -1, -1,  0,   0,  0, -1),
            Matrix3::new(-1, -1,  0,   0,  1,  0,   0,  0, -1),
        ],
        CrystalSystem::Hexagonal => vec![
            Matrix3::new( 1,  0,  0,   0,  1,  0,   0,  0,  1),
            Matrix3::new( 0,  1,  0,  -1, -1,  0,   0,  0,  1),
            Matrix3::new(-1, -1,  0,   1,  0,  0,   0,  0,  1),
            Matrix3::new(-1,  0,  0,   0, -1,  0,   0,  0,  1),
            Matrix3::new( 0, -1,  0,   1,  1,  0,   0,  0,  1),
            Matrix3::new( 1,  1,  0,  -1,  0,  0,   0,  0,  1),
            Matrix3::new( 0,  1,  0,   1,  0,  0,   0,  0, -1),
            Matrix3::new( 1,  0,  0,  -1, -1,  0,   0,  0, -1),
            Matrix3::new(-1, -1,  0,   0,  1,  0,   0,  0, -1),
            Matrix3::new( 0, -1,  0,  -1,  0,  0,   0,  0, -1),
            Matrix3::new(-1,  0,  0,   1,  1,  0,   0,  0, -1),
            Matrix3::new( 1,  1,  0,   0, -1,  0,   0,  0, -1),
        ],
        CrystalSystem::Cubic => vec![
            Matrix3::new( 1,  0,  0,   0,  1,  0,   0,  0,  1),
            Matrix3::new( 1,  0,  0,   0, -1,  0,   0,  0, -1),
            Matrix3::new( 1,  0,  0,   0,  0, -1,   0,  1,  0),
            Matrix3::new( 1,  0,  0,   0,  0,  1,   0, -1,  0),
            Matrix3::new(-1,  0,  0,   0,  1,  0,   0,  0, -1),
            Matrix3::new(-1,  0,  0,   0, -1,  0,   0,  0,  1),
            Matrix3::new(-1,  0,  0,   0,  0, -1,   0, -1,  0),
            Matrix3::new(-1,  0,  0,   0,  0,  1,   0,  1,  0),
            Matrix3::new( 0,  1,  0,  -1,  0,  0,   0,  0,  1),
            Matrix3::new( 0,  1,  0,   0,  0, -1,  -1,  0,  0),
            Matrix3::new( 0,  1,  0,   1,  0,  0,   0,  0, -1),
            Matrix3::new( 0,  1,  0,   0,  0,  1,   1,  0,  0),
            Matrix3::new( 0, -1,  0,   1,  0,  0,   0,  0,  1),
            Matrix3::new( 0, -1,  0,   0,  0, -1,   1,  0,  0),
            Matrix3::new( 0, -1,  0,  -1,  0,  0,   0,  0, -1),
            Matrix3::new( 0, -1,  0,   0,  0,  1,  -1,  0,  0),
            Matrix3::new( 0,  0,  1,   0,  1,  0,  -1,  0,  0),
            Matrix3::new( 0,  0,  1,   1,  0,  0,   0,  1,  0),
            Matrix3::new( 0,  0,  1,   0, -1,  0,   1,  0,  0),
            Matrix3::new( 0,  0,  1,  -1,  0,  0,   0, -1,  0),
            Matrix3::new( 0,  0, -1,   0,  1,  0,   1,  0,  0),
            Matrix3::new( 0,  0, -1,  -1,  0,  0,   0,  1,  0),
            Matrix3::new( 0,  0, -1,   0, -1,  0,  -1,  0,  0),
            Matrix3::new( 0,  0, -1,   1,  0,  0,   0, -1,  0),
        ],
    }
}
