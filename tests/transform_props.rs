//! Randomized properties of the codec and transform algebra.

use ditrune::quadset::Quadset;
use ditrune::ternary::Ditrune;
use ditrune::vector::ConruneVector;
use proptest::prelude::*;

fn arb_ditrune() -> impl Strategy<Value = Ditrune> {
    (0u16..729).prop_map(|v| Ditrune::from_value(v).unwrap())
}

proptest! {
    #[test]
    fn value_and_string_round_trip(d in arb_ditrune()) {
        prop_assert_eq!(Ditrune::from_value(d.value()).unwrap(), d);
        prop_assert_eq!(d.to_string().parse::<Ditrune>().unwrap(), d);
    }

    #[test]
    fn involutions(d in arb_ditrune()) {
        prop_assert_eq!(d.conrune().conrune(), d);
        prop_assert_eq!(d.reversed().reversed(), d);
    }

    #[test]
    fn composition_commutes(d in arb_ditrune()) {
        prop_assert_eq!(d.conrune().reversed(), d.reversed().conrune());
    }

    #[test]
    fn transgram_is_commutative(a in arb_ditrune(), b in arb_ditrune()) {
        prop_assert_eq!(a.transgram(b), b.transgram(a));
    }

    #[test]
    fn transgram_with_conrune_annihilates(d in arb_ditrune()) {
        prop_assert_eq!(d.transgram(d.conrune()), Ditrune::ZERO);
    }

    #[test]
    fn quadset_closes_under_its_transforms(d in arb_ditrune()) {
        // Resolving any member reproduces the same member set.
        let q = Quadset::resolve(d);
        let from_mirror = Quadset::resolve(q.y_mirror);
        let mut a: Vec<u16> = q.members().iter().map(|(_, m)| m.value()).collect();
        let mut b: Vec<u16> = from_mirror.members().iter().map(|(_, m)| m.value()).collect();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn conrune_pair_magnitude_is_symmetric(d in arb_ditrune()) {
        let pair = ConruneVector::of(d);
        let mirrored = ConruneVector::of(d.conrune());
        prop_assert_eq!(pair, mirrored);
        prop_assert_eq!(
            pair.magnitude,
            pair.greater.value() - pair.lesser.value()
        );
    }

    #[test]
    fn malformed_strings_never_parse(s in "[0-9a-z]{0,5}|[0-9a-z]{7,9}") {
        prop_assert!(s.parse::<Ditrune>().is_err());
    }
}
