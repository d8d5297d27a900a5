//
// system.rs
// Copyright (C) 2019 Malcolm Ramsay <m@malramsay.com>
// Distributed under terms of the MIT license.
//

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;

/// The seven crystal systems
///
/// Each crystal system constrains the shape of the unit cell, which in turn
/// determines the set of symmetry operators under which orientations of that
/// crystal are indistinguishable. The systems carry the conventional numeric
/// ids 1 through 7.
///
/// ```
/// use crystal_symmetry::CrystalSystem;
/// let system = CrystalSystem::from_id(7).unwrap();
/// assert_eq!(system, CrystalSystem::Cubic);
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrystalSystem {
    Triclinic = 1,
    Monoclinic = 2,
    Orthorhombic = 3,
    Tetragonal = 4,
    Trigonal = 5,
    Hexagonal = 6,
    Cubic = 7,
}

impl CrystalSystem {
    /// All seven crystal systems in id order
    pub const ALL: [CrystalSystem; 7] = [
        CrystalSystem::Triclinic,
        CrystalSystem::Monoclinic,
        CrystalSystem::Orthorhombic,
        CrystalSystem::Tetragonal,
        CrystalSystem::Trigonal,
        CrystalSystem::Hexagonal,
        CrystalSystem::Cubic,
    ];

    /// Convert a numeric crystal system id to the corresponding system
    ///
    /// This is the only place an out-of-range id can be rejected, every other
    /// function takes the resulting enum and so is total over its inputs.
    ///
    pub fn from_id(id: i32) -> Result<CrystalSystem, SymmetryError> {
        match id {
            1 => Ok(CrystalSystem::Triclinic),
            2 => Ok(CrystalSystem::Monoclinic),
            3 => Ok(CrystalSystem::Orthorhombic),
            4 => Ok(CrystalSystem::Tetragonal),
            5 => Ok(CrystalSystem::Trigonal),
            6 => Ok(CrystalSystem::Hexagonal),
            7 => Ok(CrystalSystem::Cubic),
            _ => Err(SymmetryError::InvalidCrystalSystem(id)),
        }
    }

    /// The numeric id of the crystal system, from 1 to 7
    pub fn id(self) -> i32 {
        self as i32
    }

    /// The number of symmetry operators in the tables for this system
    ///
    /// Trigonal and hexagonal count only the proper rotations of their point
    /// groups, which is the set downstream calculations depend upon.
    ///
    pub fn order(self) -> usize {
        match self {
            CrystalSystem::Triclinic => 1,
            CrystalSystem::Monoclinic => 2,
            CrystalSystem::Orthorhombic => 4,
            CrystalSystem::Tetragonal => 8,
            CrystalSystem::Trigonal => 6,
            CrystalSystem::Hexagonal => 12,
            CrystalSystem::Cubic => 24,
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CrystalSystem::Triclinic => "Triclinic",
            CrystalSystem::Monoclinic => "Monoclinic",
            CrystalSystem::Orthorhombic => "Orthorhombic",
            CrystalSystem::Tetragonal => "Tetragonal",
            CrystalSystem::Trigonal => "Trigonal",
            CrystalSystem::Hexagonal => "Hexagonal",
            CrystalSystem::Cubic => "Cubic",
        };
        write!(f, "{}", name)
    }
}
