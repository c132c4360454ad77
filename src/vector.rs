//! Full-domain conrune vector sweep.
//!
//! Every value pairs with its conrune counterpart; the magnitude of the
//! pair is the absolute difference between the two values. Value 0 is the
//! single fixed point of the conrune transform and forms the one trivial
//! self-pairing, kept apart from the 364 proper pairs.
//!
//! The dataset is often quoted as having 365 unique pairings while simple
//! counting suggests 364; the sweep settles it by computation: 364 proper
//! pairs plus the trivial one, magnitudes pairwise distinct. Tests assert
//! the computed figures rather than either quoted number.

use crate::ternary::Ditrune;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An unordered conrune pair with its magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConruneVector {
    /// Smaller value of the pair.
    pub lesser: Ditrune,
    /// Larger value of the pair (equal to `lesser` only for the trivial pair).
    pub greater: Ditrune,
    /// `|v − conrune(v)|`.
    pub magnitude: u16,
}

impl ConruneVector {
    /// The pair containing a given value.
    pub fn of(ditrune: Ditrune) -> ConruneVector {
        let counterpart = ditrune.conrune();
        let (lesser, greater) = if counterpart.value() < ditrune.value() {
            (counterpart, ditrune)
        } else {
            (ditrune, counterpart)
        };
        ConruneVector {
            lesser,
            greater,
            magnitude: greater.value() - lesser.value(),
        }
    }

    /// True only for the self-pairing of value 0.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.lesser == self.greater
    }
}

/// The full-domain sweep: every conrune pair exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSweep {
    /// The self-pairing of value 0, magnitude 0.
    pub trivial: ConruneVector,
    /// All proper pairs, ordered by lesser value.
    pub vectors: Vec<ConruneVector>,
}

impl VectorSweep {
    /// Sweep the whole domain, recording each unordered pair once.
    pub fn compute() -> VectorSweep {
        let mut vectors = Vec::with_capacity(Ditrune::COUNT as usize / 2);
        let mut trivial = ConruneVector::of(Ditrune::ZERO);
        for d in Ditrune::domain() {
            let pair = ConruneVector::of(d);
            // Each pair surfaces twice in the sweep; keep the visit
            // through its lesser member.
            if pair.lesser != d {
                continue;
            }
            if pair.is_trivial() {
                trivial = pair;
            } else {
                vectors.push(pair);
            }
        }
        VectorSweep { trivial, vectors }
    }

    /// Total pairings including the trivial one.
    pub fn pairing_count(&self) -> usize {
        self.vectors.len() + 1
    }

    /// Confirm no two proper pairs share a magnitude, stopping at the
    /// first collision.
    pub fn verify_uniqueness(&self) -> bool {
        self.find_collision().is_none()
    }

    /// The first two pairs sharing a magnitude, if any exist.
    pub fn find_collision(&self) -> Option<(ConruneVector, ConruneVector)> {
        let mut seen: Vec<Option<ConruneVector>> = vec![None; 729];
        for &pair in &self.vectors {
            match seen[pair.magnitude as usize] {
                Some(earlier) => return Some((earlier, pair)),
                None => seen[pair.magnitude as usize] = Some(pair),
            }
        }
        None
    }

    /// Distinct magnitudes across the proper pairs.
    pub fn distinct_magnitudes(&self) -> usize {
        let set: HashSet<u16> = self.vectors.iter().map(|v| v.magnitude).collect();
        set.len()
    }
}
