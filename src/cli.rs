//! Query CLI for the engine.
//!
//! Pure frontend: every subcommand parses its inputs, runs the
//! corresponding engine query, and prints the result as text or JSON.
//! Ditrune arguments are accepted as either a decimal value (0–728) or a
//! 6-digit base-3 string; anything else is rejected outright.

use crate::atlas::Atlas;
use crate::error::DitruneError;
use crate::lattice::{CoordinateTable, LatticeMapping};
use crate::mutation::{self, MutationOutcome};
use crate::quadset::{Quadset, Region};
use crate::ternary::Ditrune;
use crate::transition::verify_axial_resonance;
use crate::vector::VectorSweep;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ditrune")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deterministic combinatorial engine over the 729-value ternary lattice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Coordinate table file (JSON rows); defaults to the built-in
    /// balanced table
    #[arg(long, global = true, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show value, digits, bigrams, region, family role, and lattice cell
    Inspect {
        /// Ditrune as a decimal value or 6-digit string
        ditrune: String,
    },

    /// Resolve the 4-member symmetry group of a seed
    Quadset {
        /// Ditrune as a decimal value or 6-digit string
        ditrune: String,
    },

    /// Run the nuclear mutation trail and classify the family role
    Family {
        /// Ditrune as a decimal value or 6-digit string
        ditrune: String,
    },

    /// Compute the transgram of two ditrunes
    Transgram {
        /// First ditrune
        a: String,
        /// Second ditrune
        b: String,
    },

    /// Sweep conrune vectors over the full domain
    Vectors {
        /// List every pair instead of the summary
        #[arg(short, long)]
        verbose: bool,
    },

    /// Region and family-role cardinalities over the full domain
    Census,

    /// Validate a coordinate table: bijection, origin, axial resonance
    VerifyTable,
}

/// Parse a ditrune given as either a decimal value or a 6-digit string.
///
/// A 6-character input over {0,1,2} is read as a digit string; everything
/// else must parse as a decimal value in 0..=728.
pub fn parse_ditrune(input: &str) -> Result<Ditrune, DitruneError> {
    let s = input.trim();
    if s.len() == Ditrune::WIDTH && s.chars().all(|c| matches!(c, '0'..='2')) {
        return s.parse();
    }
    match s.parse::<u64>() {
        Ok(v) if v <= Ditrune::MAX_VALUE as u64 => Ditrune::from_value(v as u16),
        Ok(v) => Err(DitruneError::InvalidDomain { value: v }),
        Err(_) => Err(DitruneError::InvalidDigit {
            input: s.to_string(),
        }),
    }
}

#[derive(Serialize)]
struct InspectReport {
    value: u16,
    digits: String,
    outer: String,
    middle: String,
    core: String,
    region: String,
    role: String,
    cell: (i8, i8),
    axis: bool,
}

#[derive(Serialize)]
struct VectorsReport {
    proper_pairs: usize,
    pairings_with_trivial: usize,
    magnitudes_unique: bool,
}

#[derive(Serialize)]
struct CensusReport {
    regions: Vec<(String, usize)>,
    primes: usize,
    acolytes: usize,
    temples: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let table = match &cli.table {
        Some(path) => CoordinateTable::from_path(path)
            .with_context(|| format!("loading coordinate table {}", path.display()))?,
        None => CoordinateTable::balanced(),
    };

    match cli.command {
        Commands::Inspect { ditrune } => {
            let d = parse_ditrune(&ditrune)?;
            let cell = table.cell_of(d);
            let report = InspectReport {
                value: d.value(),
                digits: d.to_string(),
                outer: d.outer().to_string(),
                middle: d.middle().to_string(),
                core: d.core().to_string(),
                region: Region::of(d).to_string(),
                role: mutation::FamilyRole::of(d).to_string(),
                cell: (cell.x(), cell.y()),
                axis: cell.is_axis(),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("ditrune  {} ({})", report.digits, report.value);
                println!(
                    "bigrams  outer {}  middle {}  core {}",
                    report.outer, report.middle, report.core
                );
                println!("region   {}", report.region);
                println!("role     {}", report.role);
                println!(
                    "cell     ({}, {}){}",
                    report.cell.0,
                    report.cell.1,
                    if report.axis { "  [axis]" } else { "" }
                );
            }
        }

        Commands::Quadset { ditrune } => {
            let d = parse_ditrune(&ditrune)?;
            let q = Quadset::resolve(d);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&q)?);
            } else {
                for (kind, member) in q.members() {
                    println!("{:<17} {} ({})", kind.to_string(), member, member.value());
                }
                println!("distinct members: {}", q.cardinality());
                for c in &q.coincidences {
                    println!("coincidence: {} = {} at {}", c.left, c.right, c.value);
                }
            }
        }

        Commands::Family { ditrune } => {
            let d = parse_ditrune(&ditrune)?;
            let r = mutation::resolve_family(d);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&r)?);
            } else {
                println!("seed    {} ({})", r.seed, r.seed.value());
                println!("family  core {}", r.family);
                println!("role    {}", r.role);
                println!("trail   {}", r.trail);
                match r.trail.outcome {
                    MutationOutcome::Fixed { root } => {
                        println!("root    {} ({})", root, root.value())
                    }
                    MutationOutcome::Cycle { .. } => println!("root    none (cycle)"),
                }
            }
        }

        Commands::Transgram { a, b } => {
            let a = parse_ditrune(&a)?;
            let b = parse_ditrune(&b)?;
            let t = a.transgram(b);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&t)?);
            } else {
                println!("{} + {} -> {} ({})", a, b, t, t.value());
            }
        }

        Commands::Vectors { verbose } => {
            let sweep = VectorSweep::compute();
            let report = VectorsReport {
                proper_pairs: sweep.vectors.len(),
                pairings_with_trivial: sweep.pairing_count(),
                magnitudes_unique: sweep.verify_uniqueness(),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                if verbose {
                    for v in &sweep.vectors {
                        println!(
                            "{} <-> {}  |{} - {}| = {}",
                            v.lesser,
                            v.greater,
                            v.greater.value(),
                            v.lesser.value(),
                            v.magnitude
                        );
                    }
                }
                println!("proper pairs: {}", report.proper_pairs);
                println!("pairings incl. trivial: {}", report.pairings_with_trivial);
                println!(
                    "magnitudes unique: {}",
                    if report.magnitudes_unique { "yes" } else { "NO" }
                );
            }
        }

        Commands::Census => {
            let atlas = Atlas::build();
            let (primes, acolytes, temples) = atlas.role_census();
            let report = CensusReport {
                regions: atlas
                    .region_census()
                    .iter()
                    .map(|(r, n)| (r.to_string(), *n))
                    .collect(),
                primes,
                acolytes,
                temples,
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for (region, count) in &report.regions {
                    println!("{:<10} {}", region, count);
                }
                println!(
                    "primes {}  acolytes {}  temples {}",
                    primes, acolytes, temples
                );
            }
        }

        Commands::VerifyTable => {
            // Bijection and origin were already validated on load.
            verify_axial_resonance(&table)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "ok": true }))?);
            } else {
                println!("table OK: bijection, origin, axial resonance");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_forms() {
        assert_eq!(parse_ditrune("0").unwrap(), Ditrune::ZERO);
        assert_eq!(parse_ditrune("728").unwrap().to_string(), "222222");
        assert_eq!(parse_ditrune("210120").unwrap().value(), 582);
        // Six base-3 characters always read as a digit string.
        assert_eq!(parse_ditrune("000012").unwrap().value(), 5);
    }

    #[test]
    fn parse_rejects_out_of_domain_values() {
        assert_eq!(
            parse_ditrune("729"),
            Err(DitruneError::InvalidDomain { value: 729 })
        );
        assert_eq!(
            parse_ditrune("1000000"),
            Err(DitruneError::InvalidDomain { value: 1000000 })
        );
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for s in ["", "21012", "2101201", "210123", "21a120", "-1"] {
            assert!(
                matches!(parse_ditrune(s), Err(DitruneError::InvalidDigit { .. })),
                "should reject {:?}",
                s
            );
        }
    }

    #[test]
    fn cli_parses_subcommands() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
