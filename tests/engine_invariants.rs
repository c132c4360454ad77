//! Whole-domain invariants exercised through the public API.

use ditrune::mutation::{self, FamilyRole, MutationOutcome};
use ditrune::quadset::{Quadset, Region};
use ditrune::ternary::{Digit, Ditrune};
use ditrune::transition::transition_digit;
use ditrune::vector::VectorSweep;
use ditrune::DitruneError;
use std::collections::{HashMap, HashSet};

#[test]
fn codec_round_trips_every_value() {
    for v in 0..=728u16 {
        let d = Ditrune::from_value(v).expect("value in domain");
        assert_eq!(d.value(), v);
        let s = d.to_string();
        assert_eq!(s.len(), 6);
        assert!(s.chars().all(|c| matches!(c, '0' | '1' | '2')));
        assert_eq!(s.parse::<Ditrune>().expect("valid string"), d);
    }
}

#[test]
fn boundary_rejects_are_explicit() {
    assert!(matches!(
        Ditrune::from_value(729),
        Err(DitruneError::InvalidDomain { value: 729 })
    ));
    assert!(matches!(
        "22222".parse::<Ditrune>(),
        Err(DitruneError::InvalidDigit { .. })
    ));
    assert!(matches!(
        "222223".parse::<Ditrune>(),
        Err(DitruneError::InvalidDigit { .. })
    ));
}

#[test]
fn transforms_are_involutions_that_commute() {
    for d in Ditrune::domain() {
        assert_eq!(d.conrune().conrune(), d);
        assert_eq!(d.reversed().reversed(), d);
        assert_eq!(d.conrune().reversed(), d.reversed().conrune());
        assert_eq!(d.complex(), d.conrune().reversed());
    }
}

#[test]
fn conrune_fixes_only_zero() {
    assert_eq!(
        Ditrune::domain().filter(|d| d.conrune() == *d).count(),
        1
    );
    assert_eq!(Ditrune::ZERO.conrune(), Ditrune::ZERO);
}

#[test]
fn documented_transform_examples() {
    let d: Ditrune = "210120".parse().unwrap();
    assert_eq!(d.conrune().to_string(), "120210");
    assert_eq!(d.reversed().to_string(), "021012");
}

#[test]
fn regions_partition_the_domain_evenly() {
    let mut census: HashMap<Region, Vec<Ditrune>> = HashMap::new();
    for d in Ditrune::domain() {
        census.entry(Region::of(d)).or_default().push(d);
    }
    assert_eq!(census.len(), 9);
    let mut seen: HashSet<Ditrune> = HashSet::new();
    for (region, members) in &census {
        assert_eq!(members.len(), 81, "region {}", region);
        for m in members {
            assert!(seen.insert(*m), "{} classified twice", m);
        }
    }
    assert_eq!(seen.len(), 729);
}

#[test]
fn families_split_one_eight_seventy_two() {
    let mut census: HashMap<u8, (usize, usize, usize)> = HashMap::new();
    for d in Ditrune::domain() {
        let entry = census.entry(d.core().key()).or_default();
        match FamilyRole::of(d) {
            FamilyRole::Prime => entry.0 += 1,
            FamilyRole::Acolyte => entry.1 += 1,
            FamilyRole::Temple => entry.2 += 1,
        }
    }
    assert_eq!(census.len(), 9);
    for (key, counts) in census {
        assert_eq!(counts, (1, 8, 72), "family {}", key);
    }
}

#[test]
fn transition_is_total_over_all_digit_pairs() {
    for &a in &Digit::ALL {
        for &b in &Digit::ALL {
            let c = transition_digit(a, b);
            assert!(Digit::ALL.contains(&c));
        }
    }
}

#[test]
fn mutation_never_loops_silently() {
    for s in ["000000", "111111", "210120"] {
        let d: Ditrune = s.parse().unwrap();
        let t = mutation::trail(d);
        assert!(t.steps.len() <= 729);
        match t.outcome {
            MutationOutcome::Fixed { root } => assert_eq!(mutation::mutate(root), root),
            MutationOutcome::Cycle { entry } => assert!(entry < t.steps.len()),
        }
    }
}

#[test]
fn zero_is_fully_degenerate_prime_at_center() {
    let q = Quadset::resolve(Ditrune::ZERO);
    assert_eq!(q.identity, Ditrune::ZERO);
    assert_eq!(q.y_mirror, Ditrune::ZERO);
    assert_eq!(q.anti_self, Ditrune::ZERO);
    assert_eq!(q.x_mirror, Ditrune::ZERO);
    assert!(q.is_degenerate());
    assert_eq!(Region::of(Ditrune::ZERO), Region::Center);
    assert_eq!(Region::Center.core().to_string(), "00");
    assert_eq!(
        mutation::resolve_family(Ditrune::ZERO).role,
        FamilyRole::Prime
    );
}

#[test]
fn quadset_members_match_transform_definitions() {
    for d in Ditrune::domain() {
        let q = Quadset::resolve(d);
        assert_eq!(q.y_mirror.value(), d.reversed().value());
        assert_eq!(q.anti_self.value(), d.conrune().value());
        assert_eq!(q.x_mirror.value(), d.conrune().reversed().value());
        // Degeneracy is reported, never silently collapsed.
        assert_eq!(q.is_degenerate(), !q.coincidences.is_empty());
    }
}

#[test]
fn conrune_vector_dataset_figures() {
    let sweep = VectorSweep::compute();
    // The sweep settles the documented 365-vs-364 question: 364 proper
    // pairs, 365 pairings counting the trivial self-pair of value 0.
    assert_eq!(sweep.vectors.len(), 364);
    assert_eq!(sweep.pairing_count(), 365);
    assert!(sweep.verify_uniqueness());
    assert!(sweep.trivial.is_trivial());
    assert_eq!(sweep.trivial.magnitude, 0);
}

#[test]
fn cycle_detection_is_deterministic() {
    let d: Ditrune = "001010".parse().unwrap();
    let first = mutation::family_root(d);
    let second = mutation::family_root(d);
    assert!(matches!(first, Err(DitruneError::CycleDetected { .. })));
    assert_eq!(first, second);
}
