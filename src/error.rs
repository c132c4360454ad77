//! Error taxonomy for the engine core.
//!
//! Input-contract violations (`InvalidDomain`, `InvalidDigit`) are surfaced
//! at the point of validation and never retried or silently defaulted.
//! `CycleDetected` is a deterministic property of certain inputs under the
//! nuclear mutation rule, exposed as an error only by APIs that require a
//! converged root; [`crate::mutation::resolve_family`] reports the same
//! condition as an ordinary outcome value.

use crate::ternary::Ditrune;
use thiserror::Error;

/// Errors produced by the engine core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DitruneError {
    /// Integer input outside the 729-value domain.
    #[error("value {value} is outside the ditrune domain 0..=728")]
    InvalidDomain { value: u64 },

    /// String input with wrong length or a character outside {0,1,2}.
    #[error("invalid ditrune string {input:?}: expected exactly 6 digits from {{0,1,2}}")]
    InvalidDigit { input: String },

    /// Nuclear mutation revisited a non-fixed-point state before converging.
    #[error("nuclear mutation of {start} re-entered {first_repeat} without reaching a fixed point")]
    CycleDetected {
        start: Ditrune,
        first_repeat: Ditrune,
    },
}
