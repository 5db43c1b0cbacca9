use log::debug;
use num_rational::BigRational;
use num_traits::Zero;
use thiserror::Error;
use witness_format::Group;
use witness_format::Quadruple;

use super::VerificationError;
use crate::lp::FarkasError;
use crate::lp::FeasibilitySolver;
use crate::lp::LinearProgram;
use crate::lp::LpStatus;
use crate::lp::Term;
use crate::options::Tolerance;

/// Why the oracle did not accept a group as infeasible.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OracleFailure {
    #[error("the solver found a solution {}", render_assignment(.0))]
    Feasible(Vec<BigRational>),
    #[error("the solver reported the system as unbounded")]
    Unbounded,
    #[error("the solver gave up after {pivots} pivots")]
    PivotLimitReached { pivots: usize },
    #[error("the solver's proof of infeasibility is invalid: {0}")]
    InvalidCertificate(#[from] FarkasError),
}

/// Build the linear program of `group` over the variables `X_1..=X_max_index`, which are mapped
/// to the columns `0..max_index`:
/// - `X_i + X_j + X_k - 2 X_l <= -epsilon` for every quadruple,
/// - `X_r - X_{r+1} <= 0` for `r` in `1..max_index`,
/// - `X_r >= 0`, which is implicit in [`LinearProgram`].
pub(crate) fn build_linear_program(
    group: &Group,
    max_index: u32,
    tolerance: &Tolerance,
) -> LinearProgram {
    let mut program = LinearProgram::new(max_index as usize);
    let margin = -tolerance.value().clone();

    for &Quadruple { i, j, k, l } in group.quadruples() {
        program.add_less_equal(
            [
                Term::new(column(i), 1),
                Term::new(column(j), 1),
                Term::new(column(k), 1),
                Term::new(column(l), -2),
            ],
            margin.clone(),
        );
    }

    for r in 1..max_index {
        program.add_less_equal(
            [Term::new(column(r), 1), Term::new(column(r + 1), -1)],
            BigRational::zero(),
        );
    }

    program
}

fn column(index: u32) -> usize {
    index as usize - 1
}

/// Solve the linear program of `group` and require a verified verdict of infeasibility.
/// Returns the number of pivots the solver used.
pub(crate) fn check_infeasible(
    group: &Group,
    max_index: u32,
    tolerance: &Tolerance,
    solver: &impl FeasibilitySolver,
) -> Result<usize, VerificationError> {
    let program = build_linear_program(group, max_index, tolerance);

    debug!(
        "Solving group {} with {} rows over {} variables",
        group.position(),
        program.constraints().len(),
        program.num_variables()
    );

    let result = solver.solve(&program);

    debug!(
        "Group {} is {} after {} pivots",
        group.position(),
        result.status,
        result.pivots
    );

    let failure = match result.status {
        LpStatus::Infeasible(certificate) => match certificate.verify(&program) {
            Ok(()) => return Ok(result.pivots),
            Err(error) => OracleFailure::from(error),
        },
        LpStatus::Feasible(solution) => OracleFailure::Feasible(solution),
        LpStatus::Unbounded => OracleFailure::Unbounded,
        LpStatus::PivotLimitReached { pivots } => OracleFailure::PivotLimitReached { pivots },
    };

    Err(VerificationError::InfeasibilityCheckFailed {
        group: group.position(),
        failure,
        inequalities: group.quadruples().to_vec(),
    })
}

fn render_assignment(assignment: &[BigRational]) -> String {
    let values: Vec<String> = assignment
        .iter()
        .enumerate()
        .map(|(index, value)| format!("X{} = {value}", index + 1))
        .collect();

    format!("[{}]", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lp::rational;
    use crate::lp::FarkasCertificate;
    use crate::lp::RationalSimplex;
    use crate::lp::SolveResult;

    fn group(quadruples: &[(u32, u32, u32, u32)]) -> Group {
        Group::new(3, quadruples.iter().copied().map(Quadruple::from).collect())
    }

    /// A solver which reports a fixed status without looking at the program.
    struct FixedStatus(LpStatus);

    impl FeasibilitySolver for FixedStatus {
        fn solve(&self, _: &LinearProgram) -> SolveResult {
            SolveResult {
                status: self.0.clone(),
                pivots: 0,
            }
        }
    }

    fn expect_failure(
        result: Result<usize, VerificationError>,
    ) -> (usize, OracleFailure, Vec<Quadruple>) {
        match result {
            Err(VerificationError::InfeasibilityCheckFailed {
                group,
                failure,
                inequalities,
            }) => (group, failure, inequalities),
            other => panic!("expected a failed infeasibility check, got {other:?}"),
        }
    }

    #[test]
    fn program_contains_group_monotonicity_and_nothing_else() {
        let program = build_linear_program(
            &group(&[(1, 2, 5, 3), (3, 4, 6, 5)]),
            6,
            &Tolerance::default(),
        );

        assert_eq!(program.num_variables(), 6);
        assert_eq!(program.constraints().len(), 2 + 5);

        let first = &program.constraints()[0];
        assert_eq!(
            first.terms(),
            &[
                Term::new(0, 1),
                Term::new(1, 1),
                Term::new(4, 1),
                Term::new(2, -2)
            ]
        );
        assert_eq!(first.rhs(), &rational(-1, 1000));

        let last = &program.constraints()[6];
        assert_eq!(last.terms(), &[Term::new(4, 1), Term::new(5, -1)]);
        assert_eq!(last.rhs(), &rational(0, 1));
    }

    #[test]
    fn tolerance_is_used_as_margin() {
        let tolerance = "1/7".parse::<Tolerance>().expect("valid tolerance");

        let program = build_linear_program(&group(&[(1, 2, 3, 4)]), 4, &tolerance);

        assert_eq!(program.constraints()[0].rhs(), &rational(-1, 7));
    }

    #[test]
    fn infeasible_groups_pass() {
        let solver = RationalSimplex::default();

        for quadruples in [
            vec![(1, 2, 5, 3), (3, 4, 6, 5)],
            vec![(1, 2, 6, 3), (3, 4, 6, 5)],
            vec![(1, 2, 4, 3), (1, 3, 5, 4), (3, 4, 6, 5)],
        ] {
            let result = check_infeasible(&group(&quadruples), 6, &Tolerance::default(), &solver);

            assert!(result.is_ok(), "{quadruples:?} is infeasible");
        }
    }

    #[test]
    fn feasible_group_fails_with_a_solution() {
        let result = check_infeasible(
            &group(&[(1, 2, 3, 4)]),
            4,
            &Tolerance::default(),
            &RationalSimplex::default(),
        );

        let (position, failure, inequalities) = expect_failure(result);

        assert_eq!(position, 3);
        assert_eq!(inequalities, vec![Quadruple::new(1, 2, 3, 4)]);
        assert!(matches!(failure, OracleFailure::Feasible(_)));
    }

    #[test]
    fn empty_group_is_feasible() {
        let result = check_infeasible(
            &group(&[]),
            4,
            &Tolerance::default(),
            &RationalSimplex::default(),
        );

        let (_, failure, _) = expect_failure(result);

        assert_eq!(failure, OracleFailure::Feasible(vec![rational(0, 1); 4]));
    }

    #[test]
    fn unbounded_and_undecided_statuses_fail() {
        let group = group(&[(1, 2, 5, 3), (3, 4, 6, 5)]);

        let (_, failure, _) = expect_failure(check_infeasible(
            &group,
            6,
            &Tolerance::default(),
            &FixedStatus(LpStatus::Unbounded),
        ));
        assert_eq!(failure, OracleFailure::Unbounded);

        let (_, failure, _) = expect_failure(check_infeasible(
            &group,
            6,
            &Tolerance::default(),
            &FixedStatus(LpStatus::PivotLimitReached { pivots: 12 }),
        ));
        assert_eq!(failure, OracleFailure::PivotLimitReached { pivots: 12 });
    }

    #[test]
    fn unverified_infeasibility_claim_fails() {
        let group = group(&[(1, 2, 3, 4)]);
        let bogus = FarkasCertificate::new(vec![rational(1, 1); 4]);

        let (_, failure, _) = expect_failure(check_infeasible(
            &group,
            4,
            &Tolerance::default(),
            &FixedStatus(LpStatus::Infeasible(bogus)),
        ));

        assert!(matches!(failure, OracleFailure::InvalidCertificate(_)));
    }

    #[test]
    fn failure_message_names_the_group() {
        let result = check_infeasible(
            &group(&[(1, 2, 3, 4)]),
            4,
            &Tolerance::default(),
            &RationalSimplex::default(),
        );

        let message = result.expect_err("feasible group").to_string();

        assert!(message.starts_with(
            "LP did not conclude that the system is infeasible for group 3: the solver found a solution ["
        ));
    }
}
