//! Digit-level transforms on ditrunes.
//!
//! Three pure transforms generate the symmetry structure of the domain:
//!
//! - **conrune**: per-digit substitution 0 → 0, 1 → 2, 2 → 1
//! - **reversal**: reverse the digit order
//! - **complex**: their composition (order does not matter)
//!
//! # Algebraic Properties (Must Hold)
//!
//! - Involution: `conrune(conrune(t)) = t` and `reverse(reverse(t)) = t`
//! - Commutativity: `conrune(reverse(t)) = reverse(conrune(t))`
//! - Unique conrune fixed point: `conrune(t) = t` iff `t = "000000"`,
//!   since any 1 or 2 digit moves under the substitution

use crate::ternary::Ditrune;

impl Ditrune {
    /// Conrune transform: swap digits 1 ↔ 2, leave 0 in place.
    ///
    /// ```
    /// use ditrune::ternary::Ditrune;
    ///
    /// let d: Ditrune = "210120".parse().unwrap();
    /// assert_eq!(d.conrune().to_string(), "120210");
    /// assert_eq!(d.conrune().conrune(), d);
    /// ```
    #[inline]
    pub const fn conrune(self) -> Ditrune {
        let d = self.digits();
        Ditrune::from_digits([
            d[0].conrune(),
            d[1].conrune(),
            d[2].conrune(),
            d[3].conrune(),
            d[4].conrune(),
            d[5].conrune(),
        ])
    }

    /// Reversal transform: reverse the digit order.
    ///
    /// ```
    /// use ditrune::ternary::Ditrune;
    ///
    /// let d: Ditrune = "210120".parse().unwrap();
    /// assert_eq!(d.reversed().to_string(), "021012");
    /// assert_eq!(d.reversed().reversed(), d);
    /// ```
    #[inline]
    pub const fn reversed(self) -> Ditrune {
        let d = self.digits();
        Ditrune::from_digits([d[5], d[4], d[3], d[2], d[1], d[0]])
    }

    /// Composed transform: conrune of the reversal.
    ///
    /// Equal to the reversal of the conrune; the two generators commute
    /// because conrune acts per digit and reversal only permutes positions.
    #[inline]
    pub const fn complex(self) -> Ditrune {
        self.reversed().conrune()
    }

    /// Is this ditrune its own reversal?
    #[inline]
    pub fn is_palindrome(self) -> bool {
        self == self.reversed()
    }
}

/// The unique fixed point of the conrune transform.
pub const CONRUNE_FIXED_POINT: Ditrune = Ditrune::ZERO;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conrune_concrete_example() {
        let d: Ditrune = "210120".parse().unwrap();
        assert_eq!(d.conrune().to_string(), "120210");
    }

    #[test]
    fn reversal_concrete_example() {
        let d: Ditrune = "210120".parse().unwrap();
        assert_eq!(d.reversed().to_string(), "021012");
    }

    #[test]
    fn involutions_over_full_domain() {
        for d in Ditrune::domain() {
            assert_eq!(d.conrune().conrune(), d, "conrune² at {}", d);
            assert_eq!(d.reversed().reversed(), d, "reverse² at {}", d);
        }
    }

    #[test]
    fn conrune_and_reversal_commute() {
        for d in Ditrune::domain() {
            assert_eq!(
                d.reversed().conrune(),
                d.conrune().reversed(),
                "commutativity at {}",
                d
            );
        }
    }

    #[test]
    fn complex_matches_both_orders() {
        for d in Ditrune::domain() {
            assert_eq!(d.complex(), d.conrune().reversed());
        }
    }

    #[test]
    fn conrune_fixed_point_is_unique() {
        let fixed: Vec<Ditrune> = Ditrune::domain().filter(|d| d.conrune() == *d).collect();
        assert_eq!(fixed, vec![Ditrune::ZERO]);
        assert_eq!(CONRUNE_FIXED_POINT, Ditrune::ZERO);
    }

    #[test]
    fn digit_conrune_matches_whole_transform() {
        for d in Ditrune::domain() {
            let c = d.conrune();
            for i in 0..Ditrune::WIDTH {
                assert_eq!(c.digit(i), d.digit(i).conrune());
            }
        }
    }

    #[test]
    fn palindromes_are_reversal_fixed() {
        let pal: Ditrune = "012210".parse().unwrap();
        assert!(pal.is_palindrome());
        let plain: Ditrune = "010210".parse().unwrap();
        assert!(!plain.is_palindrome());
    }

    #[test]
    fn digit_level_conrune_truth_table() {
        use crate::ternary::Digit;
        assert_eq!(Digit::Zero.conrune(), Digit::Zero);
        assert_eq!(Digit::One.conrune(), Digit::Two);
        assert_eq!(Digit::Two.conrune(), Digit::One);
    }
}
