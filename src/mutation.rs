//! Nuclear mutation and family resolution.
//!
//! The mutation step extracts the two overlapping interior triples of a
//! ditrune and concatenates them: with digits d1..d6, the top half is
//! (d2, d3, d4), the bottom half (d3, d4, d5), and the result
//! (d2, d3, d4, d3, d4, d5). Iterating the step either settles on a fixed
//! point, the family root, or re-enters a previously visited state and
//! alternates forever. Both terminations are ordinary, reproducible
//! outcomes of the rule; the iteration here is bounded and keeps an index
//! of visited states, so neither can loop silently.
//!
//! Family membership itself is keyed by the core bigram, and the role of a
//! member comes from comparing its three bigrams:
//!
//! ```text
//! core == body == skin   Prime     (1 per family)
//! core == body           Acolyte   (8 per family)
//! core != body           Temple    (72 per family)
//! ```

use crate::error::DitruneError;
use crate::ternary::{Bigram, Ditrune};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One nuclear mutation step.
///
/// ```
/// use ditrune::mutation::mutate;
/// use ditrune::ternary::Ditrune;
///
/// let d: Ditrune = "210120".parse().unwrap();
/// assert_eq!(mutate(d).to_string(), "101012");
/// ```
#[inline]
pub const fn mutate(ditrune: Ditrune) -> Ditrune {
    let d = ditrune.digits();
    Ditrune::from_digits([d[1], d[2], d[3], d[2], d[3], d[4]])
}

/// How a mutation trail terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationOutcome {
    /// The trail reached a state equal to its own mutation.
    Fixed { root: Ditrune },
    /// The trail re-entered `steps[entry]` without reaching a fixed point.
    Cycle { entry: usize },
}

/// The recorded reduction of a seed: every visited state plus the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationTrail {
    /// Visited states in order; `steps[0]` is the seed.
    pub steps: Vec<Ditrune>,
    pub outcome: MutationOutcome,
}

impl MutationTrail {
    /// The converged root, if the trail reached one.
    pub fn root(&self) -> Option<Ditrune> {
        match self.outcome {
            MutationOutcome::Fixed { root } => Some(root),
            MutationOutcome::Cycle { .. } => None,
        }
    }

    /// The repeating suffix of a cyclic trail.
    pub fn cycle(&self) -> Option<&[Ditrune]> {
        match self.outcome {
            MutationOutcome::Fixed { .. } => None,
            MutationOutcome::Cycle { entry } => Some(&self.steps[entry..]),
        }
    }
}

impl fmt::Display for MutationTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", step)?;
        }
        match self.outcome {
            MutationOutcome::Fixed { .. } => write!(f, " (fixed)"),
            MutationOutcome::Cycle { entry } => {
                write!(f, " (cycle re-entering {})", self.steps[entry])
            }
        }
    }
}

/// Iterate the mutation step from a seed, recording every visited state.
///
/// Terminates on a fixed point or on the first revisited state; iteration
/// is additionally capped at the domain size as a hard safety bound.
pub fn trail(seed: Ditrune) -> MutationTrail {
    let mut steps = vec![seed];
    let mut visited: HashMap<Ditrune, usize> = HashMap::new();
    visited.insert(seed, 0);
    let mut current = seed;

    for _ in 0..Ditrune::COUNT {
        let next = mutate(current);
        if next == current {
            return MutationTrail {
                steps,
                outcome: MutationOutcome::Fixed { root: current },
            };
        }
        if let Some(&entry) = visited.get(&next) {
            return MutationTrail {
                steps,
                outcome: MutationOutcome::Cycle { entry },
            };
        }
        visited.insert(next, steps.len());
        steps.push(next);
        current = next;
    }

    // Every step visits a fresh state out of 729, so one of the exits
    // above fires long before the cap.
    unreachable!()
}

/// The three hierarchy roles within a family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyRole {
    Prime,
    Acolyte,
    Temple,
}

impl FamilyRole {
    /// Classify a ditrune by comparing its core, body, and skin bigrams.
    pub const fn of(ditrune: Ditrune) -> FamilyRole {
        let core = ditrune.core();
        let body = ditrune.middle();
        let skin = ditrune.outer();
        let core_eq_body =
            core.first.to_u8() == body.first.to_u8() && core.second.to_u8() == body.second.to_u8();
        let core_eq_skin =
            core.first.to_u8() == skin.first.to_u8() && core.second.to_u8() == skin.second.to_u8();
        if core_eq_body && core_eq_skin {
            FamilyRole::Prime
        } else if core_eq_body {
            FamilyRole::Acolyte
        } else {
            FamilyRole::Temple
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FamilyRole::Prime => "Prime",
            FamilyRole::Acolyte => "Acolyte",
            FamilyRole::Temple => "Temple",
        }
    }
}

impl fmt::Display for FamilyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full family resolution of a seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyResolution {
    pub seed: Ditrune,
    /// The core bigram keying the seed's family.
    pub family: Bigram,
    pub role: FamilyRole,
    pub trail: MutationTrail,
}

/// Resolve the family of a seed: role, family key, and the mutation trail.
///
/// A cyclic trail is an ordinary outcome here, carried in the result; use
/// [`family_root`] when a converged root is required.
pub fn resolve_family(seed: Ditrune) -> FamilyResolution {
    FamilyResolution {
        seed,
        family: seed.core(),
        role: FamilyRole::of(seed),
        trail: trail(seed),
    }
}

/// The converged mutation root of a seed.
///
/// Fails with [`DitruneError::CycleDetected`] when the trail alternates
/// instead of converging; the condition is deterministic for a given seed,
/// so retrying cannot change it.
pub fn family_root(seed: Ditrune) -> Result<Ditrune, DitruneError> {
    let trail = trail(seed);
    match trail.outcome {
        MutationOutcome::Fixed { root } => Ok(root),
        MutationOutcome::Cycle { entry } => Err(DitruneError::CycleDetected {
            start: seed,
            first_repeat: trail.steps[entry],
        }),
    }
}
