//! Verification of infeasibility certificates.
//!
//! A certificate (see [`witness_format`]) partitions a subset of the universe of quadruples
//! `(i, j, k, l)` over the indices `1..=m` into groups. Every group encodes a system of strict
//! inequalities `X_i + X_j + X_k < 2 * X_l` which, together with `0 <= X_1 <= ... <= X_m`, is
//! claimed to have no real solution. [`verify_certificate`] re-derives the universe, checks that
//! the groups are well-formed and pairwise disjoint, and confirms the infeasibility of every
//! group with a linear programming [`FeasibilitySolver`].
pub mod asserts;
pub(crate) mod basic_types;
pub mod lp;
pub mod options;
pub mod report;
pub mod runner;
pub mod statistics;
pub mod universe;
pub mod verification;

#[cfg(test)]
mod tests;

pub use lp::FeasibilitySolver;
pub use lp::RationalSimplex;
pub use options::Tolerance;
pub use options::VerifierOptions;
pub use report::Summary;
pub use universe::Universe;
pub use verification::verify_certificate;
pub use verification::verify_source;
pub use verification::VerificationError;
pub use witness_format::Certificate;
pub use witness_format::Quadruple;
