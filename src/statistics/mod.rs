//! Responsible for logging statistics with a configurable prefix and an optional closing line.
//!
//! Statistics are written to stdout as `<prefix>name=value`, one per line, and only when
//! enabled through [`configure`].
use std::fmt::Display;
use std::sync::PoisonError;
use std::sync::RwLock;

#[derive(Debug)]
struct StatisticOptions {
    log_statistics: bool,
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
}

static STATISTIC_OPTIONS: RwLock<StatisticOptions> = RwLock::new(StatisticOptions {
    log_statistics: false,
    statistic_prefix: "",
    after_statistics: None,
});

/// Configures the logging of statistics.
///
/// - `log_statistics` determines whether statistics are printed at all.
/// - `statistic_prefix` is printed in front of every statistic.
/// - `after_statistics` is printed once by [`log_statistic_postfix`], if set.
pub fn configure(
    log_statistics: bool,
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
) {
    let mut options = STATISTIC_OPTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner);

    *options = StatisticOptions {
        log_statistics,
        statistic_prefix,
        after_statistics,
    };
}

/// Whether statistics are currently printed.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .log_statistics
}

/// Logs the statistic `name` with the provided `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let options = STATISTIC_OPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner);

    if options.log_statistics {
        println!("{}{name}={value}", options.statistic_prefix);
    }
}

/// Prints the closing line configured in [`configure`], if any.
pub fn log_statistic_postfix() {
    let options = STATISTIC_OPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner);

    if let (true, Some(after)) = (options.log_statistics, options.after_statistics) {
        println!("{after}");
    }
}
