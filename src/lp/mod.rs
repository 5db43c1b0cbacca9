//! Linear programs over nonnegative real variables and the solvers that decide their
//! feasibility.
mod farkas;
mod simplex;

use std::fmt::Display;
use std::fmt::Formatter;

pub use farkas::FarkasCertificate;
pub use farkas::FarkasError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use num_traits::Zero;
pub use simplex::RationalSimplex;

use crate::witness_assert_simple;

/// The term `coefficient * x_variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    pub variable: usize,
    pub coefficient: i64,
}

impl Term {
    pub fn new(variable: usize, coefficient: i64) -> Term {
        Term {
            variable,
            coefficient,
        }
    }
}

/// The row `sum(terms) <= rhs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearLessEqual {
    terms: Vec<Term>,
    rhs: BigRational,
}

impl LinearLessEqual {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn rhs(&self) -> &BigRational {
        &self.rhs
    }

    /// The value of the left-hand side under `assignment`.
    pub fn evaluate(&self, assignment: &[BigRational]) -> BigRational {
        self.terms
            .iter()
            .map(|term| &assignment[term.variable] * coefficient(term))
            .fold(BigRational::zero(), |sum, value| sum + value)
    }
}

/// A system of [`LinearLessEqual`] rows over `num_variables` variables. Every variable has the
/// implicit bound `x >= 0` and no upper bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearProgram {
    num_variables: usize,
    constraints: Vec<LinearLessEqual>,
}

impl LinearProgram {
    pub fn new(num_variables: usize) -> LinearProgram {
        LinearProgram {
            num_variables,
            constraints: vec![],
        }
    }

    /// Add the row `sum(terms) <= rhs`.
    pub fn add_less_equal(&mut self, terms: impl IntoIterator<Item = Term>, rhs: BigRational) {
        let terms: Vec<Term> = terms.into_iter().collect();

        witness_assert_simple!(
            terms.iter().all(|term| term.variable < self.num_variables),
            "term refers to a variable outside of the program"
        );

        self.constraints.push(LinearLessEqual { terms, rhs });
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn constraints(&self) -> &[LinearLessEqual] {
        &self.constraints
    }

    /// Whether `assignment` is nonnegative and satisfies every row.
    pub fn is_satisfied_by(&self, assignment: &[BigRational]) -> bool {
        assignment.len() == self.num_variables
            && assignment.iter().all(|value| !value.is_negative())
            && self
                .constraints
                .iter()
                .all(|constraint| &constraint.evaluate(assignment) <= constraint.rhs())
    }
}

pub(crate) fn coefficient(term: &Term) -> BigRational {
    BigRational::from_integer(BigInt::from(term.coefficient))
}

/// The outcome of deciding the feasibility of a [`LinearProgram`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LpStatus {
    /// No nonnegative assignment satisfies all rows, as witnessed by the certificate.
    Infeasible(FarkasCertificate),
    /// The assignment satisfies all rows.
    Feasible(Vec<BigRational>),
    /// The solver found the problem to be unbounded.
    Unbounded,
    /// The solver gave up before reaching a verdict.
    PivotLimitReached { pivots: usize },
}

impl Display for LpStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LpStatus::Infeasible(_) => write!(f, "infeasible"),
            LpStatus::Feasible(_) => write!(f, "feasible"),
            LpStatus::Unbounded => write!(f, "unbounded"),
            LpStatus::PivotLimitReached { pivots } => {
                write!(f, "unknown (gave up after {pivots} pivots)")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveResult {
    pub status: LpStatus,
    /// The number of pivots that were performed.
    pub pivots: usize,
}

/// A solver which decides whether a [`LinearProgram`] has a solution.
///
/// A solver has to be definitive: when it cannot decide, it must say so through
/// [`LpStatus::PivotLimitReached`] rather than report either verdict.
pub trait FeasibilitySolver {
    fn solve(&self, program: &LinearProgram) -> SolveResult;
}

#[cfg(test)]
pub(crate) fn rational(numerator: i64, denominator: i64) -> BigRational {
    BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
}
