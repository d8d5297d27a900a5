//
// error.rs
// Copyright (C) 2019 Malcolm Ramsay <m@malramsay.com>
// Distributed under terms of the MIT license.
//

use thiserror::Error;

/// Errors arising from the symmetry calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymmetryError {
    /// The crystal system id is outside the range of the seven crystal systems
    #[error("crystal system id {0} is out of range, expected a value from 1 to 7")]
    InvalidCrystalSystem(i32),

    /// An input matrix failed the rotation-matrix checks
    #[error("not a rotation matrix: {0}")]
    InvalidRotationMatrix(String),
}
