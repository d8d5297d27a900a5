//
// lib.rs
// Copyright (C) 2019 Malcolm Ramsay <m@malramsay.com>
// Distributed under terms of the MIT license.
//

//! Symmetry operators and misorientation angles for the seven crystal systems.
//!
//! A crystal orientation has many equivalent descriptions, one for each proper
//! rotation in the point group of its crystal system. Comparing two
//! orientations therefore means comparing them under every symmetry operator
//! and keeping the smallest angle. This crate provides the operator tables for
//! the seven crystal systems, as both lattice-index permutation matrices and
//! orientation-space rotation matrices, along with the misorientation
//! calculation that uses them.
//!
//! ```
//! use nalgebra::Matrix3;
//! use crystal_symmetry::{misorientation, CrystalSystem};
//!
//! let u = Matrix3::identity();
//! let angles = misorientation(&u, &u, CrystalSystem::Cubic).unwrap();
//! assert_eq!(angles.len(), 24);
//! ```

pub mod basis;
pub mod checks;
mod error;
pub mod misorientation;
mod operators;
mod system;

pub use crate::basis::form_basis;
pub use crate::error::SymmetryError;
pub use crate::misorientation::{debug_permutations, debug_rotations, misorientation};
pub use crate::system::CrystalSystem;
