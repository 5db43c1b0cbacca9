//! The outcome of a successful verification.
use std::fmt::Display;
use std::fmt::Formatter;

use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;

/// The result of verifying a certificate in which every group passed every check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    num_groups: usize,
    universe_size: usize,
    counters: Counters,
}

impl Summary {
    pub fn new(num_groups: usize, universe_size: usize) -> Summary {
        Summary {
            num_groups,
            universe_size,
            counters: Counters::default(),
        }
    }

    pub(crate) fn with_counters(mut self, counters: Counters) -> Summary {
        self.counters = counters;
        self
    }

    /// The number of disjoint infeasible groups that were verified.
    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    /// The size of the universe of quadruples the groups were drawn from.
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// The ratio `(|T| - groups) / (2 |T|)` associated with the certificate.
    pub fn probability(&self) -> Probability {
        Probability {
            numerator: self.universe_size.saturating_sub(self.num_groups),
            denominator: 2 * self.universe_size,
        }
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Log the statistics of the run through [`crate::statistics`].
    pub fn log_statistics(&self) {
        self.counters.log_statistics();
        log_statistic_postfix();
    }
}

/// Renders the three result lines.
impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "All checks passed! The systems of inequalities are disjoint and each system is infeasible."
        )?;
        writeln!(f, "{} disjoint subsystems infeasible found", self.num_groups)?;
        writeln!(f, "Probability: {}", self.probability())
    }
}

/// An exact ratio, kept as numerator and denominator so nothing is lost before display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probability {
    pub numerator: usize,
    pub denominator: usize,
}

impl Probability {
    pub fn value(&self) -> f64 {
        if self.denominator == 0 {
            return f64::NAN;
        }

        self.numerator as f64 / self.denominator as f64
    }
}

impl Display for Probability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} = {}",
            self.numerator,
            self.denominator,
            self.value()
        )
    }
}

/// Structure responsible for storing several statistics of a verification run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub num_groups: u64,
    pub num_quadruples: u64,
    pub max_index: u32,
    pub universe_size: u64,
    /// The members of the universe which are not in any group.
    pub num_uncovered_quadruples: u64,
    pub total_pivots: u64,
    pub max_pivots: u64,
    pub time_spent_in_lp: u64,
    pub time_spent_in_verification: u64,
}

impl Counters {
    fn log_statistics(&self) {
        log_statistic("numberOfGroups", self.num_groups);
        log_statistic("numberOfQuadruples", self.num_quadruples);
        log_statistic("maximumIndex", self.max_index);
        log_statistic("universeSize", self.universe_size);
        log_statistic(
            "numberOfUncoveredQuadruples",
            self.num_uncovered_quadruples,
        );
        log_statistic("totalSimplexPivots", self.total_pivots);
        log_statistic("maximumSimplexPivots", self.max_pivots);
        log_statistic("timeSpentInLpInMilliseconds", self.time_spent_in_lp);
        log_statistic(
            "timeSpentInVerificationInMilliseconds",
            self.time_spent_in_verification,
        );
    }
}
