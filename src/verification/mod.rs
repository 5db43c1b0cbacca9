//! Checks a [`Certificate`] group by group.
//!
//! The checks run in a fixed order and stop at the first violation:
//! 1. the universe is built from the largest index in the certificate;
//! 2. every group is checked to be a set of well-ordered members of the universe;
//! 3. every pair of groups is checked to be disjoint;
//! 4. every group is checked to be infeasible by a [`FeasibilitySolver`].
use std::time::Instant;

use log::info;
use witness_format::Certificate;

use crate::lp::FeasibilitySolver;
use crate::options::VerifierOptions;
use crate::report::Counters;
use crate::report::Summary;
use crate::universe::Universe;

mod disjointness;
mod error;
mod feasibility;
mod structure;

pub use error::VerificationError;
pub use feasibility::OracleFailure;
pub use structure::StructuralViolation;

/// Parse `source` as a certificate and verify it.
pub fn verify_source(
    source: &str,
    options: &VerifierOptions,
    solver: &impl FeasibilitySolver,
) -> Result<Summary, VerificationError> {
    let certificate = source.parse::<Certificate>()?;

    verify_certificate(&certificate, options, solver)
}

/// Verify that `certificate` consists of pairwise disjoint, well-formed groups which are each
/// infeasible. On success the [`Summary`] of the run is returned.
pub fn verify_certificate(
    certificate: &Certificate,
    options: &VerifierOptions,
    solver: &impl FeasibilitySolver,
) -> Result<Summary, VerificationError> {
    let start = Instant::now();

    let max_index = certificate
        .max_index()
        .ok_or(VerificationError::EmptyCertificate)?;

    let universe = Universe::build(max_index);
    info!(
        "Verifying {} groups against a universe of {} quadruples over 1..={max_index}",
        certificate.len(),
        universe.len()
    );

    let mut counters = Counters {
        num_groups: certificate.len() as u64,
        max_index,
        universe_size: universe.len() as u64,
        ..Counters::default()
    };

    let mut validated = Vec::with_capacity(certificate.len());
    for group in certificate.groups() {
        let members = structure::validate_group(group, &universe).map_err(|violation| {
            VerificationError::Structural {
                group: group.position(),
                violation,
            }
        })?;

        counters.num_quadruples += members.len() as u64;
        validated.push((group.position(), members));
    }
    info!("All groups are well-formed");

    disjointness::check_disjoint(&validated)?;
    info!("All groups are pairwise disjoint");

    counters.num_uncovered_quadruples = universe
        .iter()
        .filter(|&quadruple| {
            validated
                .iter()
                .all(|(_, members)| !members.contains(quadruple))
        })
        .count() as u64;

    let lp_start = Instant::now();
    for group in certificate.groups() {
        let pivots =
            feasibility::check_infeasible(group, max_index, &options.tolerance, solver)? as u64;

        counters.total_pivots += pivots;
        counters.max_pivots = counters.max_pivots.max(pivots);
    }
    info!("All groups are infeasible");

    counters.time_spent_in_lp = lp_start.elapsed().as_millis() as u64;
    counters.time_spent_in_verification = start.elapsed().as_millis() as u64;

    Ok(Summary::new(certificate.len(), universe.len()).with_counters(counters))
}
