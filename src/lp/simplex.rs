//! Phase-one primal simplex over exact rationals.
//!
//! The program `Ax <= b, x >= 0` is brought into equality form by adding a slack `s_r >= 0` per
//! row. Rows with a negative right-hand side are negated and receive an artificial variable,
//! which gives an initial feasible basis of slacks and artificials. Minimising the sum of the
//! artificials then decides feasibility: the optimum is zero exactly when the program has a
//! solution.
//!
//! Both the entering and the leaving variable are chosen with Bland's rule (lowest index), so
//! the method terminates without cycling. All arithmetic is exact, which means there are no
//! numerical tolerances anywhere in the verdict.
use num_rational::BigRational;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

use super::coefficient;
use super::FarkasCertificate;
use super::FeasibilitySolver;
use super::LinearProgram;
use super::LpStatus;
use super::SolveResult;
use crate::options::VerifierOptions;
use crate::options::DEFAULT_PIVOT_LIMIT;
use crate::witness_assert_advanced;
use crate::witness_assert_eq_simple;
use crate::witness_assert_extreme;
use crate::witness_assert_moderate;

/// A [`FeasibilitySolver`] based on the simplex method with exact rational arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RationalSimplex {
    pivot_limit: usize,
}

impl RationalSimplex {
    /// Create a solver which gives up after `pivot_limit` pivots on a single program.
    pub fn new(pivot_limit: usize) -> RationalSimplex {
        RationalSimplex { pivot_limit }
    }
}

impl Default for RationalSimplex {
    fn default() -> Self {
        RationalSimplex::new(DEFAULT_PIVOT_LIMIT)
    }
}

impl From<&VerifierOptions> for RationalSimplex {
    fn from(options: &VerifierOptions) -> Self {
        RationalSimplex::new(options.pivot_limit)
    }
}

impl FeasibilitySolver for RationalSimplex {
    fn solve(&self, program: &LinearProgram) -> SolveResult {
        let mut tableau = Tableau::phase_one(program);
        let mut pivots = 0;

        while let Some(entering) = tableau.entering_column() {
            if pivots >= self.pivot_limit {
                return SolveResult {
                    status: LpStatus::PivotLimitReached { pivots },
                    pivots,
                };
            }

            let Some(leaving) = tableau.leaving_row(entering) else {
                // The phase-one objective is bounded below by zero, so this only happens if the
                // tableau is inconsistent.
                return SolveResult {
                    status: LpStatus::Unbounded,
                    pivots,
                };
            };

            tableau.pivot(leaving, entering);
            pivots += 1;

            witness_assert_moderate!(tableau.is_primal_feasible());
        }

        let status = if tableau.objective_value().is_positive() {
            LpStatus::Infeasible(tableau.farkas_certificate())
        } else {
            let solution = tableau.primal_solution();
            witness_assert_extreme!(program.is_satisfied_by(&solution));

            LpStatus::Feasible(solution)
        };

        SolveResult { status, pivots }
    }
}

/// A dense simplex tableau. Column layout: the structural variables, then one slack per row,
/// then one artificial per row with a negative right-hand side, then the right-hand side.
#[derive(Debug)]
struct Tableau {
    num_structural: usize,
    num_rows: usize,
    /// The number of variable columns, excluding the right-hand side.
    width: usize,
    rows: Vec<Vec<BigRational>>,
    /// The reduced costs of the phase-one objective. The last entry holds the negated objective
    /// value.
    reduced_costs: Vec<BigRational>,
    /// For every row, the column of its basic variable.
    basis: Vec<usize>,
}

impl Tableau {
    fn phase_one(program: &LinearProgram) -> Tableau {
        let num_structural = program.num_variables();
        let num_rows = program.constraints().len();
        let num_artificial = program
            .constraints()
            .iter()
            .filter(|constraint| constraint.rhs().is_negative())
            .count();
        let width = num_structural + num_rows + num_artificial;

        let mut rows = Vec::with_capacity(num_rows);
        let mut basis = Vec::with_capacity(num_rows);
        let mut reduced_costs = vec![BigRational::zero(); width + 1];
        let mut next_artificial = num_structural + num_rows;

        for (row_index, constraint) in program.constraints().iter().enumerate() {
            let mut row = vec![BigRational::zero(); width + 1];

            for term in constraint.terms() {
                row[term.variable] += coefficient(term);
            }
            row[num_structural + row_index] = BigRational::one();
            row[width] = constraint.rhs().clone();

            if constraint.rhs().is_negative() {
                row.iter_mut().for_each(|value| *value = -value.clone());

                row[next_artificial] = BigRational::one();
                reduced_costs[next_artificial] = BigRational::one();
                basis.push(next_artificial);
                next_artificial += 1;
            } else {
                basis.push(num_structural + row_index);
            }

            rows.push(row);
        }

        // Express the objective in terms of the non-basic variables.
        for (row, &basic) in rows.iter().zip(&basis) {
            if basic >= num_structural + num_rows {
                reduced_costs
                    .iter_mut()
                    .zip(row)
                    .for_each(|(cost, value)| *cost -= value);
            }
        }

        witness_assert_eq_simple!(next_artificial, width);

        Tableau {
            num_structural,
            num_rows,
            width,
            rows,
            reduced_costs,
            basis,
        }
    }

    /// The lowest column with a negative reduced cost, if any.
    fn entering_column(&self) -> Option<usize> {
        self.reduced_costs[..self.width]
            .iter()
            .position(|cost| cost.is_negative())
    }

    /// The row that limits the increase of `entering` the most, ties broken by the lowest basic
    /// column.
    fn leaving_row(&self, entering: usize) -> Option<usize> {
        let mut best: Option<(usize, BigRational)> = None;

        for (row_index, row) in self.rows.iter().enumerate() {
            if !row[entering].is_positive() {
                continue;
            }

            let ratio = &row[self.width] / &row[entering];

            let replace = match &best {
                None => true,
                Some((best_row, best_ratio)) => {
                    ratio < *best_ratio
                        || (ratio == *best_ratio && self.basis[row_index] < self.basis[*best_row])
                }
            };

            if replace {
                best = Some((row_index, ratio));
            }
        }

        best.map(|(row_index, _)| row_index)
    }

    fn pivot(&mut self, leaving: usize, entering: usize) {
        let pivot = self.rows[leaving][entering].clone();
        self.rows[leaving]
            .iter_mut()
            .for_each(|value| *value /= &pivot);

        let pivot_row = self.rows[leaving].clone();

        for (row_index, row) in self.rows.iter_mut().enumerate() {
            if row_index == leaving {
                continue;
            }

            eliminate(row, &pivot_row, entering);
        }

        eliminate(&mut self.reduced_costs, &pivot_row, entering);

        self.basis[leaving] = entering;
    }

    /// The sum of the artificial variables in the current basic solution.
    fn objective_value(&self) -> BigRational {
        -self.reduced_costs[self.width].clone()
    }

    fn is_primal_feasible(&self) -> bool {
        self.rows.iter().all(|row| !row[self.width].is_negative())
    }

    /// At a phase-one optimum with a positive objective value, the reduced costs of the slack
    /// columns are a Farkas certificate for the original rows.
    fn farkas_certificate(&self) -> FarkasCertificate {
        let slacks = self.num_structural..self.num_structural + self.num_rows;
        let multipliers = self.reduced_costs[slacks].to_vec();

        witness_assert_advanced!(multipliers.iter().all(|y| !y.is_negative()));

        FarkasCertificate::new(multipliers)
    }

    fn primal_solution(&self) -> Vec<BigRational> {
        let mut solution = vec![BigRational::zero(); self.num_structural];

        for (row, &basic) in self.rows.iter().zip(&self.basis) {
            if basic < self.num_structural {
                solution[basic] = row[self.width].clone();
            }
        }

        solution
    }
}

/// Subtract the multiple of `pivot_row` from `row` which zeroes its `column` entry.
fn eliminate(row: &mut [BigRational], pivot_row: &[BigRational], column: usize) {
    let factor = row[column].clone();

    if factor.is_zero() {
        return;
    }

    row.iter_mut()
        .zip(pivot_row)
        .for_each(|(value, pivot_value)| *value -= &factor * pivot_value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lp::rational;
    use crate::lp::Term;

    fn assert_infeasible(program: &LinearProgram) {
        let result = RationalSimplex::default().solve(program);

        match result.status {
            LpStatus::Infeasible(certificate) => {
                certificate.verify(program).expect("certificate proves infeasibility")
            }
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    fn assert_feasible(program: &LinearProgram) -> Vec<BigRational> {
        let result = RationalSimplex::default().solve(program);

        match result.status {
            LpStatus::Feasible(solution) => {
                assert!(program.is_satisfied_by(&solution));
                solution
            }
            other => panic!("expected feasible, got {other:?}"),
        }
    }

    #[test]
    fn program_without_rows_is_feasible() {
        let solution = assert_feasible(&LinearProgram::new(3));

        assert_eq!(solution, vec![BigRational::zero(); 3]);
    }

    #[test]
    fn origin_is_found_without_pivots() {
        let mut program = LinearProgram::new(2);
        program.add_less_equal([Term::new(0, 1), Term::new(1, -1)], rational(0, 1));

        let result = RationalSimplex::default().solve(&program);

        assert_eq!(result.pivots, 0);
        assert!(matches!(result.status, LpStatus::Feasible(_)));
    }

    #[test]
    fn negative_upper_bound_on_nonnegative_variable_is_infeasible() {
        let mut program = LinearProgram::new(1);
        program.add_less_equal([Term::new(0, 1)], rational(-1, 1));

        assert_infeasible(&program);
    }

    #[test]
    fn lower_bound_through_negative_rhs_is_feasible() {
        // -x0 <= -3, i.e. x0 >= 3, and x0 - x1 <= 0.
        let mut program = LinearProgram::new(2);
        program.add_less_equal([Term::new(0, -1)], rational(-3, 1));
        program.add_less_equal([Term::new(0, 1), Term::new(1, -1)], rational(0, 1));

        let solution = assert_feasible(&program);

        assert!(solution[0] >= rational(3, 1));
        assert!(solution[1] >= solution[0]);
    }

    #[test]
    fn contradicting_bounds_are_infeasible() {
        // x0 >= 2 and x0 <= 1.
        let mut program = LinearProgram::new(1);
        program.add_less_equal([Term::new(0, -1)], rational(-2, 1));
        program.add_less_equal([Term::new(0, 1)], rational(1, 1));

        assert_infeasible(&program);
    }

    #[test]
    fn strict_cycle_is_infeasible() {
        // x0 < x1, x1 < x2, x2 < x0, with a margin of 1/1000.
        let margin = rational(-1, 1000);
        let mut program = LinearProgram::new(3);
        program.add_less_equal([Term::new(0, 1), Term::new(1, -1)], margin.clone());
        program.add_less_equal([Term::new(1, 1), Term::new(2, -1)], margin.clone());
        program.add_less_equal([Term::new(2, 1), Term::new(0, -1)], margin);

        assert_infeasible(&program);
    }

    #[test]
    fn single_quadruple_is_feasible() {
        // X1 + X2 + X3 < 2 * X4 with 0 <= X1 <= X2 <= X3 <= X4, as a hand-computed case:
        // X = (0, 0, 0, 1) satisfies it, so the solver has to agree.
        let mut program = LinearProgram::new(4);
        program.add_less_equal(
            [
                Term::new(0, 1),
                Term::new(1, 1),
                Term::new(2, 1),
                Term::new(3, -2),
            ],
            rational(-1, 1000),
        );
        for r in 0..3 {
            program.add_less_equal([Term::new(r, 1), Term::new(r + 1, -1)], rational(0, 1));
        }

        let _ = assert_feasible(&program);
    }

    #[test]
    fn repeated_variables_in_a_row_are_combined() {
        // x0 + x0 - x1 <= -1 and x1 - 2 x0 <= 0 sum to 0 <= -1.
        let mut program = LinearProgram::new(2);
        program.add_less_equal(
            [Term::new(0, 1), Term::new(0, 1), Term::new(1, -1)],
            rational(-1, 1),
        );
        program.add_less_equal([Term::new(1, 1), Term::new(0, -2)], rational(0, 1));

        assert_infeasible(&program);
    }

    #[test]
    fn pivot_limit_is_reported() {
        let mut program = LinearProgram::new(1);
        program.add_less_equal([Term::new(0, -1)], rational(-3, 1));

        let result = RationalSimplex::new(0).solve(&program);

        assert_eq!(
            result,
            SolveResult {
                status: LpStatus::PivotLimitReached { pivots: 0 },
                pivots: 0,
            }
        );
    }

    #[test]
    fn solver_is_built_from_options() {
        let options = VerifierOptions {
            pivot_limit: 7,
            ..VerifierOptions::default()
        };

        assert_eq!(RationalSimplex::from(&options), RationalSimplex::new(7));
    }
}
