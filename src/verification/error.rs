use std::fmt::Display;

use thiserror::Error;
use witness_format::ParseError;
use witness_format::Quadruple;

use super::feasibility::OracleFailure;
use super::structure::StructuralViolation;

/// The reasons a certificate can be rejected. Every variant that concerns a group names it by
/// its 0-based position.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("the certificate does not contain any inequalities")]
    EmptyCertificate,

    #[error("group {group} is malformed: {violation}")]
    Structural {
        group: usize,
        violation: StructuralViolation,
    },

    #[error("groups {first} and {second} are not disjoint, both contain {}", join(.shared))]
    Disjointness {
        first: usize,
        second: usize,
        shared: Vec<Quadruple>,
    },

    #[error("LP did not conclude that the system is infeasible for group {group}: {failure}")]
    InfeasibilityCheckFailed {
        group: usize,
        failure: OracleFailure,
        /// The full system of the group, for diagnostics.
        inequalities: Vec<Quadruple>,
    },
}

fn join(items: &[impl Display]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
