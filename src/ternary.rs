//! Foundational fixed-width ternary primitives.
//!
//! Everything in the engine builds on these types: a single base-3 digit,
//! the 6-digit ditrune covering the 729-value domain, and the bigram
//! decomposition used for region and family classification.
//!
//! # Representation
//!
//! A ditrune is stored as `[Digit; 6]`, most significant digit first, so
//! the digit string `"210120"` has d1 = 2 at index 0 and d6 = 0 at index 5.
//! The integer value is `Σ digit[i] · 3^(5−i)` and both directions of the
//! codec round-trip exactly:
//!
//! ```
//! use ditrune::ternary::Ditrune;
//!
//! let d: Ditrune = "210120".parse().unwrap();
//! assert_eq!(d.value(), 582);
//! assert_eq!(Ditrune::from_value(582).unwrap().to_string(), "210120");
//! ```
//!
//! # Bigrams
//!
//! The three bigrams pair intentionally non-adjacent digits:
//!
//! ```text
//! digits:  d1 d2 d3 d4 d5 d6
//! outer:   (d1          , d6)
//! middle:     (d2    , d5)
//! core:          (d3, d4)
//! ```

use crate::error::DitruneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single unbalanced ternary digit: the atomic unit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Digit {
    /// 0
    #[default]
    Zero = 0,
    /// 1
    One = 1,
    /// 2
    Two = 2,
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Digit {
    /// All digit values in ascending order.
    pub const ALL: [Digit; 3] = [Digit::Zero, Digit::One, Digit::Two];

    /// Convert from u8, returning None if out of range.
    #[inline]
    pub const fn from_u8_exact(v: u8) -> Option<Self> {
        match v {
            0 => Some(Digit::Zero),
            1 => Some(Digit::One),
            2 => Some(Digit::Two),
            _ => None,
        }
    }

    /// Convert from an ASCII digit character, returning None if out of range.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Digit::Zero),
            '1' => Some(Digit::One),
            '2' => Some(Digit::Two),
            _ => None,
        }
    }

    /// Convert to u8.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Convert to the ASCII digit character.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Digit::Zero => '0',
            Digit::One => '1',
            Digit::Two => '2',
        }
    }

    /// Conrune substitution: 0 → 0, 1 → 2, 2 → 1.
    ///
    /// This is an involution; zero is its only fixed digit.
    #[inline]
    pub const fn conrune(self) -> Digit {
        match self {
            Digit::Zero => Digit::Zero,
            Digit::One => Digit::Two,
            Digit::Two => Digit::One,
        }
    }

    /// Is zero?
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Digit::Zero)
    }
}

/// An ordered pair of digits.
///
/// Three bigrams decompose a ditrune (outer/middle/core); the core bigram
/// alone keys region and family membership.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Bigram {
    pub first: Digit,
    pub second: Digit,
}

impl fmt::Debug for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl Bigram {
    /// Create from two digits, first component first.
    #[inline]
    pub const fn new(first: Digit, second: Digit) -> Self {
        Bigram { first, second }
    }

    /// Packed key in 0..=8: `first * 3 + second`.
    #[inline]
    pub const fn key(self) -> u8 {
        self.first.to_u8() * 3 + self.second.to_u8()
    }

    /// Unpack from a key in 0..=8.
    #[inline]
    pub const fn from_key(key: u8) -> Option<Self> {
        if key >= 9 {
            return None;
        }
        // Both divisions stay in 0..=2, so the digit lookups cannot fail.
        match (Digit::from_u8_exact(key / 3), Digit::from_u8_exact(key % 3)) {
            (Some(first), Some(second)) => Some(Bigram { first, second }),
            _ => None,
        }
    }
}

/// A 6-digit base-3 number covering values 0..=728.
///
/// `Ditrune` is a plain `Copy` value; every derived entity in the engine
/// (quadset, region, family role, transgram, conrune vector) is a pure
/// function of it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Ditrune {
    /// Six digits, index 0 is most significant.
    digits: [Digit; 6],
}

impl fmt::Debug for Ditrune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ditrune[{} = {}]", self, self.value())
    }
}

impl fmt::Display for Ditrune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl Ditrune {
    /// Number of digits.
    pub const WIDTH: usize = 6;

    /// Number of distinct values.
    pub const COUNT: u16 = 729;

    /// Largest value.
    pub const MAX_VALUE: u16 = 728;

    /// The all-zero ditrune, value 0.
    pub const ZERO: Ditrune = Ditrune {
        digits: [Digit::Zero; 6],
    };

    /// Create from six digits, most significant first.
    #[inline]
    pub const fn from_digits(digits: [Digit; 6]) -> Self {
        Ditrune { digits }
    }

    /// Create from an integer value in 0..=728.
    ///
    /// ```
    /// use ditrune::ternary::Ditrune;
    /// use ditrune::error::DitruneError;
    ///
    /// assert_eq!(Ditrune::from_value(0).unwrap().to_string(), "000000");
    /// assert_eq!(Ditrune::from_value(728).unwrap().to_string(), "222222");
    /// assert_eq!(
    ///     Ditrune::from_value(729),
    ///     Err(DitruneError::InvalidDomain { value: 729 })
    /// );
    /// ```
    pub fn from_value(value: u16) -> Result<Self, DitruneError> {
        if value > Self::MAX_VALUE {
            return Err(DitruneError::InvalidDomain {
                value: value as u64,
            });
        }
        Ok(Self::from_value_raw(value))
    }

    /// Decompose a value known to be in range. Callers uphold `value <= 728`.
    pub(crate) fn from_value_raw(value: u16) -> Self {
        debug_assert!(value <= Self::MAX_VALUE);
        let mut digits = [Digit::Zero; 6];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            // rest % 3 is always 0..=2
            if let Some(d) = Digit::from_u8_exact((rest % 3) as u8) {
                *slot = d;
            }
            rest /= 3;
        }
        Ditrune { digits }
    }

    /// The integer value: `Σ digit[i] · 3^(5−i)`.
    #[inline]
    pub const fn value(self) -> u16 {
        let d = self.digits;
        d[0].to_u8() as u16 * 243
            + d[1].to_u8() as u16 * 81
            + d[2].to_u8() as u16 * 27
            + d[3].to_u8() as u16 * 9
            + d[4].to_u8() as u16 * 3
            + d[5].to_u8() as u16
    }

    /// Digit at position `i` (0-based, most significant first).
    #[inline]
    pub const fn digit(self, i: usize) -> Digit {
        self.digits[i]
    }

    /// All six digits, most significant first.
    #[inline]
    pub const fn digits(self) -> [Digit; 6] {
        self.digits
    }

    /// Outer bigram (d1, d6).
    #[inline]
    pub const fn outer(self) -> Bigram {
        Bigram::new(self.digits[0], self.digits[5])
    }

    /// Middle bigram (d2, d5).
    #[inline]
    pub const fn middle(self) -> Bigram {
        Bigram::new(self.digits[1], self.digits[4])
    }

    /// Core bigram (d3, d4).
    #[inline]
    pub const fn core(self) -> Bigram {
        Bigram::new(self.digits[2], self.digits[3])
    }

    /// Iterate the whole 729-value domain in ascending order.
    pub fn domain() -> impl Iterator<Item = Ditrune> {
        (0..Self::COUNT).map(Self::from_value_raw)
    }
}

impl FromStr for Ditrune {
    type Err = DitruneError;

    /// Parse a 6-character string over {0,1,2}.
    ///
    /// ```
    /// use ditrune::ternary::Ditrune;
    ///
    /// let d: Ditrune = "000012".parse().unwrap();
    /// assert_eq!(d.value(), 5);
    /// assert!("00001".parse::<Ditrune>().is_err());
    /// assert!("000013".parse::<Ditrune>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DitruneError::InvalidDigit {
            input: s.to_string(),
        };
        if s.chars().count() != Self::WIDTH {
            return Err(invalid());
        }
        let mut digits = [Digit::Zero; 6];
        for (slot, c) in digits.iter_mut().zip(s.chars()) {
            *slot = Digit::from_char(c).ok_or_else(invalid)?;
        }
        Ok(Ditrune { digits })
    }
}
