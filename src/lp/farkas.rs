use num_rational::BigRational;
use num_traits::Signed;
use num_traits::Zero;
use thiserror::Error;

use super::coefficient;
use super::LinearProgram;

/// Multipliers `y`, one per row of a [`LinearProgram`] `Ax <= b, x >= 0`, such that `y >= 0`,
/// `yA >= 0` and `yb < 0`.
///
/// Such multipliers prove that the program is infeasible: any `x >= 0` satisfying the rows
/// would give `0 <= yAx <= yb < 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FarkasCertificate {
    multipliers: Vec<BigRational>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FarkasError {
    #[error("the certificate has {actual} multipliers but the program has {expected} rows")]
    WrongLength { expected: usize, actual: usize },
    #[error("the multiplier of row {row} is negative")]
    NegativeMultiplier { row: usize },
    #[error("the combined coefficient of variable {variable} is negative")]
    NegativeCoefficient { variable: usize },
    #[error("the combined right-hand side {rhs} is not negative")]
    NonNegativeRhs { rhs: BigRational },
}

impl FarkasCertificate {
    pub fn new(multipliers: Vec<BigRational>) -> FarkasCertificate {
        FarkasCertificate { multipliers }
    }

    pub fn multipliers(&self) -> &[BigRational] {
        &self.multipliers
    }

    /// Check, with exact arithmetic, that this certificate proves `program` infeasible.
    pub fn verify(&self, program: &LinearProgram) -> Result<(), FarkasError> {
        let constraints = program.constraints();

        if constraints.len() != self.multipliers.len() {
            return Err(FarkasError::WrongLength {
                expected: constraints.len(),
                actual: self.multipliers.len(),
            });
        }

        if let Some(row) = self.multipliers.iter().position(|y| y.is_negative()) {
            return Err(FarkasError::NegativeMultiplier { row });
        }

        let mut combined = vec![BigRational::zero(); program.num_variables()];
        let mut rhs = BigRational::zero();

        for (constraint, multiplier) in constraints.iter().zip(&self.multipliers) {
            if multiplier.is_zero() {
                continue;
            }

            for term in constraint.terms() {
                combined[term.variable] += multiplier * coefficient(term);
            }

            rhs += multiplier * constraint.rhs();
        }

        if let Some(variable) = combined.iter().position(|value| value.is_negative()) {
            return Err(FarkasError::NegativeCoefficient { variable });
        }

        if !rhs.is_negative() {
            return Err(FarkasError::NonNegativeRhs { rhs });
        }

        Ok(())
    }
}
