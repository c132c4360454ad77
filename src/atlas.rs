//! Precomputed whole-domain lookup.
//!
//! Every classification in the engine is a pure function of a value in
//! 0..=728, so the whole domain can be tabulated once at startup and
//! shared read-only afterwards. `Atlas` holds region, family role, and
//! conrune counterpart per value; at 729 entries it is effectively free.

use crate::mutation::FamilyRole;
use crate::quadset::Region;
use crate::ternary::{Bigram, Ditrune};

/// Immutable per-value lookup over the full domain.
#[derive(Clone, Debug)]
pub struct Atlas {
    regions: Vec<Region>,
    roles: Vec<FamilyRole>,
    conrunes: Vec<u16>,
}

impl Atlas {
    /// Tabulate the domain.
    pub fn build() -> Atlas {
        let mut regions = Vec::with_capacity(Ditrune::COUNT as usize);
        let mut roles = Vec::with_capacity(Ditrune::COUNT as usize);
        let mut conrunes = Vec::with_capacity(Ditrune::COUNT as usize);
        for d in Ditrune::domain() {
            regions.push(Region::of(d));
            roles.push(FamilyRole::of(d));
            conrunes.push(d.conrune().value());
        }
        Atlas {
            regions,
            roles,
            conrunes,
        }
    }

    #[inline]
    pub fn region(&self, ditrune: Ditrune) -> Region {
        self.regions[ditrune.value() as usize]
    }

    #[inline]
    pub fn role(&self, ditrune: Ditrune) -> FamilyRole {
        self.roles[ditrune.value() as usize]
    }

    #[inline]
    pub fn conrune(&self, ditrune: Ditrune) -> Ditrune {
        Ditrune::from_value_raw(self.conrunes[ditrune.value() as usize])
    }

    /// Members of a region, ascending.
    pub fn region_members(&self, region: Region) -> Vec<Ditrune> {
        Ditrune::domain()
            .filter(|d| self.region(*d) == region)
            .collect()
    }

    /// Members of the family keyed by a core bigram, ascending.
    pub fn family_members(&self, core: Bigram) -> Vec<Ditrune> {
        Ditrune::domain().filter(|d| d.core() == core).collect()
    }

    /// Member count per region, ordered as [`Region::ALL`].
    pub fn region_census(&self) -> [(Region, usize); 9] {
        let mut census = [(Region::Center, 0usize); 9];
        for (slot, region) in census.iter_mut().zip(Region::ALL) {
            *slot = (region, 0);
        }
        for r in &self.regions {
            for slot in census.iter_mut() {
                if slot.0 == *r {
                    slot.1 += 1;
                }
            }
        }
        census
    }

    /// Counts of (primes, acolytes, temples) across the domain.
    pub fn role_census(&self) -> (usize, usize, usize) {
        let mut counts = (0usize, 0usize, 0usize);
        for role in &self.roles {
            match role {
                FamilyRole::Prime => counts.0 += 1,
                FamilyRole::Acolyte => counts.1 += 1,
                FamilyRole::Temple => counts.2 += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atlas_agrees_with_direct_computation() {
        let atlas = Atlas::build();
        for d in Ditrune::domain() {
            assert_eq!(atlas.region(d), Region::of(d));
            assert_eq!(atlas.role(d), FamilyRole::of(d));
            assert_eq!(atlas.conrune(d), d.conrune());
        }
    }

    #[test]
    fn censuses_match_known_cardinalities() {
        let atlas = Atlas::build();
        for (region, count) in atlas.region_census() {
            assert_eq!(count, 81, "region {}", region);
        }
        assert_eq!(atlas.role_census(), (9, 72, 648));
    }

    #[test]
    fn family_members_share_the_core() {
        let atlas = Atlas::build();
        for key in 0..9u8 {
            let core = Bigram::from_key(key).unwrap();
            let members = atlas.family_members(core);
            assert_eq!(members.len(), 81);
            assert!(members.iter().all(|d| d.core() == core));
        }
    }
}
