//! Symmetry groups and region classification.
//!
//! Every ditrune generates a quadset: the images of the seed under the
//! identity, reversal, conrune, and composed transforms. The four members
//! need not be distinct (palindromes collapse reversal onto identity, and
//! value 0 collapses everything) and any such coincidence is reported
//! explicitly rather than deduplicated away.
//!
//! Regions partition the domain into nine sectors of 81 values each, keyed
//! solely by the core bigram. Sector names follow the 3×3 compass reading
//! of the core digits: digit 1 selects the positive direction of an axis,
//! digit 2 the negative, 0 the axis itself.

use crate::ternary::{Bigram, Ditrune};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four generators of a quadset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformKind {
    Identity,
    Reversal,
    Conrune,
    ConruneReversal,
}

impl TransformKind {
    /// All four generators, in member order.
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Identity,
        TransformKind::Reversal,
        TransformKind::Conrune,
        TransformKind::ConruneReversal,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TransformKind::Identity => "identity",
            TransformKind::Reversal => "reversal",
            TransformKind::Conrune => "conrune",
            TransformKind::ConruneReversal => "conrune-reversal",
        }
    }

    /// Apply this generator to a seed.
    #[inline]
    pub const fn apply(self, seed: Ditrune) -> Ditrune {
        match self {
            TransformKind::Identity => seed,
            TransformKind::Reversal => seed.reversed(),
            TransformKind::Conrune => seed.conrune(),
            TransformKind::ConruneReversal => seed.complex(),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the nine lattice sectors, keyed by the core bigram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Center,
    East,
    West,
    North,
    South,
    Northeast,
    Southeast,
    Northwest,
    Southwest,
}

impl Region {
    /// All nine regions, ordered by core bigram key.
    pub const ALL: [Region; 9] = [
        Region::Center,
        Region::North,
        Region::South,
        Region::East,
        Region::Northeast,
        Region::Southeast,
        Region::West,
        Region::Northwest,
        Region::Southwest,
    ];

    /// Classify by core bigram.
    ///
    /// The first core digit drives the x axis (1 = east, 2 = west), the
    /// second the y axis (1 = north, 2 = south); 0 stays on the axis.
    pub const fn from_core(core: Bigram) -> Region {
        use crate::ternary::Digit::{One, Two, Zero};
        match (core.first, core.second) {
            (Zero, Zero) => Region::Center,
            (Zero, One) => Region::North,
            (Zero, Two) => Region::South,
            (One, Zero) => Region::East,
            (One, One) => Region::Northeast,
            (One, Two) => Region::Southeast,
            (Two, Zero) => Region::West,
            (Two, One) => Region::Northwest,
            (Two, Two) => Region::Southwest,
        }
    }

    /// Classify a ditrune by its core bigram.
    #[inline]
    pub const fn of(ditrune: Ditrune) -> Region {
        Self::from_core(ditrune.core())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Region::Center => "Center",
            Region::East => "East",
            Region::West => "West",
            Region::North => "North",
            Region::South => "South",
            Region::Northeast => "Northeast",
            Region::Southeast => "Southeast",
            Region::Northwest => "Northwest",
            Region::Southwest => "Southwest",
        }
    }

    /// The core bigram keying this region.
    pub fn core(self) -> Bigram {
        // ALL is ordered by key, so the position is the key.
        let key = Region::ALL.iter().position(|r| *r == self).unwrap_or(0) as u8;
        match Bigram::from_key(key) {
            Some(b) => b,
            None => unreachable!(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A coincidence between two generators: both produced the same member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coincidence {
    pub left: TransformKind,
    pub right: TransformKind,
    pub value: Ditrune,
}

/// The symmetry group of a seed under the four generators.
///
/// Members keep their generator identity even when values coincide; the
/// `coincidences` list says exactly which generators collided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quadset {
    /// The seed itself (the identity member).
    pub identity: Ditrune,
    /// Image under reversal.
    pub y_mirror: Ditrune,
    /// Image under conrune.
    pub anti_self: Ditrune,
    /// Image under the composed transform.
    pub x_mirror: Ditrune,
    /// Generator pairs that produced identical members.
    pub coincidences: Vec<Coincidence>,
}

impl Quadset {
    /// Resolve the quadset of a seed.
    ///
    /// ```
    /// use ditrune::quadset::Quadset;
    /// use ditrune::ternary::Ditrune;
    ///
    /// let q = Quadset::resolve("210120".parse().unwrap());
    /// assert_eq!(q.y_mirror.to_string(), "021012");
    /// assert_eq!(q.anti_self.to_string(), "120210");
    /// assert_eq!(q.x_mirror.to_string(), "012021");
    /// assert!(q.coincidences.is_empty());
    ///
    /// let degenerate = Quadset::resolve(Ditrune::ZERO);
    /// assert_eq!(degenerate.cardinality(), 1);
    /// ```
    pub fn resolve(seed: Ditrune) -> Quadset {
        let members = Self::apply_all(seed);
        let mut coincidences = Vec::new();
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                if members[i].1 == members[j].1 {
                    coincidences.push(Coincidence {
                        left: members[i].0,
                        right: members[j].0,
                        value: members[i].1,
                    });
                }
            }
        }
        Quadset {
            identity: members[0].1,
            y_mirror: members[1].1,
            anti_self: members[2].1,
            x_mirror: members[3].1,
            coincidences,
        }
    }

    fn apply_all(seed: Ditrune) -> [(TransformKind, Ditrune); 4] {
        let mut out = [(TransformKind::Identity, seed); 4];
        for (slot, kind) in out.iter_mut().zip(TransformKind::ALL) {
            *slot = (kind, kind.apply(seed));
        }
        out
    }

    /// Members with their generators, in fixed order.
    pub fn members(&self) -> [(TransformKind, Ditrune); 4] {
        [
            (TransformKind::Identity, self.identity),
            (TransformKind::Reversal, self.y_mirror),
            (TransformKind::Conrune, self.anti_self),
            (TransformKind::ConruneReversal, self.x_mirror),
        ]
    }

    /// Distinct member values, in first-seen order.
    pub fn distinct(&self) -> Vec<Ditrune> {
        let mut out = Vec::with_capacity(4);
        for (_, m) in self.members() {
            if !out.contains(&m) {
                out.push(m);
            }
        }
        out
    }

    /// Number of distinct members (1, 2, or 4).
    pub fn cardinality(&self) -> usize {
        self.distinct().len()
    }

    /// True when fewer than four distinct members exist.
    pub fn is_degenerate(&self) -> bool {
        self.cardinality() < 4
    }
}
