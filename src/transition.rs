//! Digit-pair transition algebra.
//!
//! The transition of two digits is the third digit completing their sum to
//! a multiple of three: `c = (−(a + b)) mod 3`. Applied position-wise
//! across two ditrunes it yields a third, the transgram.
//!
//! # Truth table
//!
//! ```text
//!   t | 0  1  2
//! ----+--------
//!   0 | 0  2  1
//!   1 | 2  1  0
//!   2 | 1  0  2
//! ```
//!
//! Two consequences shape the lattice geometry: `t(d, conrune(d)) = 0` for
//! every digit, and `t(d, d) = d`. Together they give the axial resonance
//! law (the transgram of two cells mirrored across a lattice axis is the
//! ditrune on the axis between them), which [`verify_axial_resonance`]
//! checks exhaustively against any concrete placement.

use crate::lattice::{LatticeCell, LatticeMapping};
use crate::ternary::{Digit, Ditrune};
use thiserror::Error;

/// Transition of a digit pair: `(−(a + b)) mod 3`.
///
/// Total over all nine digit pairs; commutative.
#[inline]
pub const fn transition_digit(a: Digit, b: Digit) -> Digit {
    let sum = (a.to_u8() + b.to_u8()) as i8;
    match (-sum).rem_euclid(3) {
        0 => Digit::Zero,
        1 => Digit::One,
        2 => Digit::Two,
        _ => unreachable!(),
    }
}

impl Ditrune {
    /// Position-wise transition against another ditrune.
    ///
    /// ```
    /// use ditrune::ternary::Ditrune;
    ///
    /// let a: Ditrune = "012012".parse().unwrap();
    /// let b: Ditrune = "021021".parse().unwrap();
    /// assert_eq!(a.transgram(b).to_string(), "000000");
    /// ```
    #[inline]
    pub const fn transgram(self, other: Ditrune) -> Ditrune {
        let a = self.digits();
        let b = other.digits();
        Ditrune::from_digits([
            transition_digit(a[0], b[0]),
            transition_digit(a[1], b[1]),
            transition_digit(a[2], b[2]),
            transition_digit(a[3], b[3]),
            transition_digit(a[4], b[4]),
            transition_digit(a[5], b[5]),
        ])
    }
}

/// First failure found while checking the axial resonance law.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "axial resonance violated between {negative} and {positive}: \
     transgram {found}, axis cell {axis} holds {expected}"
)]
pub struct AxialViolation {
    /// Cell on the negative side of the axis.
    pub negative: LatticeCell,
    /// Cell on the positive side of the axis.
    pub positive: LatticeCell,
    /// The axis cell between the two.
    pub axis: LatticeCell,
    /// What the axis cell holds.
    pub expected: Ditrune,
    /// What the transgram produced.
    pub found: Ditrune,
}

/// Check the axial resonance law over every axis-mirrored cell pair.
///
/// For each row, the transgram of the cells at (−x, y) and (+x, y) must be
/// the ditrune at (0, y); likewise per column against (x, 0). Returns the
/// first violation found, or Ok for a conforming placement.
pub fn verify_axial_resonance<M: LatticeMapping>(mapping: &M) -> Result<(), AxialViolation> {
    let span = 1..=LatticeCell::MAX_COORD;
    for fixed in LatticeCell::MIN_COORD..=LatticeCell::MAX_COORD {
        for offset in span.clone() {
            // Mirror across the y axis within row `fixed`.
            check_pair(
                mapping,
                LatticeCell::new(-offset, fixed),
                LatticeCell::new(offset, fixed),
                LatticeCell::new(0, fixed),
            )?;
            // Mirror across the x axis within column `fixed`.
            check_pair(
                mapping,
                LatticeCell::new(fixed, -offset),
                LatticeCell::new(fixed, offset),
                LatticeCell::new(fixed, 0),
            )?;
        }
    }
    Ok(())
}

fn check_pair<M: LatticeMapping>(
    mapping: &M,
    negative: Option<LatticeCell>,
    positive: Option<LatticeCell>,
    axis: Option<LatticeCell>,
) -> Result<(), AxialViolation> {
    // All three cells come from in-range loops.
    let (Some(negative), Some(positive), Some(axis)) = (negative, positive, axis) else {
        return Ok(());
    };
    let expected = mapping.ditrune_at(axis);
    let found = mapping
        .ditrune_at(negative)
        .transgram(mapping.ditrune_at(positive));
    if found == expected {
        Ok(())
    } else {
        Err(AxialViolation {
            negative,
            positive,
            axis,
            expected,
            found,
        })
    }
}
