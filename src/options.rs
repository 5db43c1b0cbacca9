//! Configuration of a verification run.
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use thiserror::Error;

/// The number of simplex pivots after which a single group is given up on.
pub const DEFAULT_PIVOT_LIMIT: usize = 100_000;

/// Options which determine how a certificate is verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierOptions {
    /// The margin with which strict inequalities are encoded, see [`Tolerance`].
    pub tolerance: Tolerance,
    /// The maximum number of simplex pivots spent on a single group.
    pub pivot_limit: usize,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        VerifierOptions {
            tolerance: Tolerance::default(),
            pivot_limit: DEFAULT_PIVOT_LIMIT,
        }
    }
}

/// The strictly positive margin `epsilon` used to encode a strict inequality `a < b` as the
/// non-strict `a - b <= -epsilon`.
///
/// Verification results are only as trustworthy as this choice: a system can be infeasible for
/// a given epsilon while still admitting solutions with a smaller gap. Because the linear
/// programs are homogeneous apart from this margin, any positive value gives the same verdict
/// for the systems produced here, but the margin is kept explicit rather than assumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tolerance(BigRational);

impl Tolerance {
    pub fn new(value: BigRational) -> Result<Tolerance, ToleranceError> {
        if value.is_positive() {
            Ok(Tolerance(value))
        } else {
            Err(ToleranceError::NotPositive(value.to_string()))
        }
    }

    pub fn value(&self) -> &BigRational {
        &self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance(BigRational::new(BigInt::from(1), BigInt::from(1000)))
    }
}

impl Display for Tolerance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ToleranceError {
    #[error("'{0}' is neither a decimal number nor a fraction")]
    Malformed(String),
    #[error("the tolerance must be strictly positive, got {0}")]
    NotPositive(String),
}

/// Accepts decimals such as `0.001` and fractions such as `1/1000`. Both are converted exactly.
impl FromStr for Tolerance {
    type Err = ToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let value = if s.contains('/') {
            BigRational::from_str(s).ok()
        } else {
            parse_decimal(s)
        };

        value
            .ok_or_else(|| ToleranceError::Malformed(s.to_owned()))
            .and_then(Tolerance::new)
    }
}

fn parse_decimal(s: &str) -> Option<BigRational> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    if !whole
        .chars()
        .chain(fraction.chars())
        .all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let numerator = format!("{whole}{fraction}").parse::<BigInt>().ok()?;
    let denominator = num_traits::pow(BigInt::from(10), fraction.len());

    let value = BigRational::new(numerator, denominator);

    Some(if negative { -value } else { value })
}
