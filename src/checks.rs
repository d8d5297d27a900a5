//
// checks.rs
// Copyright (C) 2019 Malcolm Ramsay <m@malramsay.com>
// Distributed under terms of the MIT license.
//

//! Optional strict validation of input matrices
//!
//! The misorientation calculation assumes its inputs are proper rotation
//! matrices and silently produces nonsense angles when they are not. Enabling
//! strict checks trades a little overhead on each call for failing fast on
//! malformed inputs. Checks are disabled by default and the toggle is process
//! wide.

use std::sync::atomic::{AtomicBool, Ordering};

use nalgebra::Matrix3;

use crate::error::SymmetryError;

static STRICT: AtomicBool = AtomicBool::new(false);

/// Tolerance on the orthonormality and determinant of a rotation matrix
pub const ROTATION_TOLERANCE: f64 = 1e-6;

/// Enable strict validation of rotation-matrix inputs
pub fn activate() {
    STRICT.store(true, Ordering::Relaxed);
}

/// Disable strict validation of rotation-matrix inputs
pub fn deactivate() {
    STRICT.store(false, Ordering::Relaxed);
}

/// Whether strict validation is currently enabled
pub fn is_activated() -> bool {
    STRICT.load(Ordering::Relaxed)
}

/// Validate that a matrix is a proper rotation
///
/// A proper rotation matrix is orthonormal with determinant +1. Both
/// conditions are checked within [`ROTATION_TOLERANCE`] to allow for the
/// floating-point noise accumulated by chains of matrix products.
///
pub fn check_rotation_matrix(umat: &Matrix3<f64>) -> Result<(), SymmetryError> {
    let residual = (umat.transpose() * umat - Matrix3::identity()).abs().max();
    if residual > ROTATION_TOLERANCE {
        return Err(SymmetryError::InvalidRotationMatrix(format!(
            "U^T U deviates from the identity by {:e}",
            residual
        )));
    }
    let det = umat.determinant();
    if (det - 1.).abs() > ROTATION_TOLERANCE {
        return Err(SymmetryError::InvalidRotationMatrix(format!(
            "determinant is {} rather than +1",
            det
        )));
    }
    Ok(())
}
