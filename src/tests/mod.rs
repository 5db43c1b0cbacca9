#![cfg(test)]

use crate::lp::FeasibilitySolver;
use crate::lp::LinearProgram;
use crate::lp::RationalSimplex;
use crate::lp::SolveResult;
use crate::options::VerifierOptions;
use crate::report::Summary;
use crate::verification::verify_source;
use crate::verification::VerificationError;


/// The header block every test certificate starts with.
pub(crate) const HEADER: &str = "Disjoint infeasible subsystems\nm = ?\n";

/// Build the text of a certificate with the given groups, one inequality per line.
pub(crate) fn certificate_text(groups: &[&[&str]]) -> String {
    let blocks: Vec<String> = groups.iter().map(|group| group.join("\n")).collect();

    format!("{HEADER}\n{}\n", blocks.join("\n\n"))
}

/// Verify a certificate with default options and the exact simplex solver.
pub(crate) fn verify_text(text: &str) -> Result<Summary, VerificationError> {
    verify_source(text, &VerifierOptions::default(), &RationalSimplex::default())
}

/// A solver for runs which must be rejected before any linear program is solved.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnreachableSolver;

impl FeasibilitySolver for UnreachableSolver {
    fn solve(&self, _: &LinearProgram) -> SolveResult {
        panic!("no linear program should be solved")
    }
}
