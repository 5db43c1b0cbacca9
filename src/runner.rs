use std::path::PathBuf;

use log::info;
use log::LevelFilter;

use crate::lp::RationalSimplex;
use crate::options::Tolerance;
use crate::options::VerifierOptions;
use crate::options::DEFAULT_PIVOT_LIMIT;
use crate::print_witness_assert_warning_message;
use crate::statistics::configure;
use crate::verification::verify_source;
use crate::verification::VerificationError;

#[derive(Debug, clap::Parser)]
#[command(
    about = "Verify that a certificate partitions quadruple inequalities into disjoint infeasible systems."
)]
pub struct Cli {
    /// The certificate to verify.
    ///
    /// The first block of the file is a header and is ignored. Every following block, separated
    /// by a blank line, is one group with one inequality `X<i> + X<j> + X<k> < 2*X<l>` per line.
    #[arg(long)]
    pub file: PathBuf,

    /// The margin with which strict inequalities are encoded, `a < b` becomes
    /// `a <= b - epsilon`.
    ///
    /// Accepts a decimal such as `0.001` or a fraction such as `1/1000`.
    #[arg(short = 'e', long = "epsilon", default_value = "1/1000")]
    pub epsilon: Tolerance,

    /// The number of simplex pivots after which the solver gives up on a group. Giving up
    /// rejects the certificate.
    #[arg(long = "pivot-limit", default_value_t = DEFAULT_PIVOT_LIMIT)]
    pub pivot_limit: usize,

    /// Print statistics of the verification after the result.
    #[arg(short = 's', long = "statistics")]
    pub log_statistics: bool,

    /// Increase the logging verbosity. Can be passed multiple times.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

pub fn run() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;

    let args = Cli::parse();

    init_logging(args.verbosity);
    print_witness_assert_warning_message!();
    configure(args.log_statistics, "%% ", None);

    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Error reading {}", args.file.display()))?;

    let options = VerifierOptions {
        tolerance: args.epsilon,
        pivot_limit: args.pivot_limit,
    };
    let solver = RationalSimplex::from(&options);

    info!(
        "Verifying {} with epsilon = {}",
        args.file.display(),
        options.tolerance
    );

    match verify_source(&source, &options, &solver) {
        Ok(summary) => {
            print!("{summary}");
            summary.log_statistics();

            Ok(())
        }

        Err(error) => {
            if let VerificationError::InfeasibilityCheckFailed {
                group,
                inequalities,
                ..
            } = &error
            {
                println!(
                    "The following system of group {group} was expected to be infeasible but was not:"
                );
                for inequality in inequalities {
                    println!("{inequality}");
                }
            }

            Err(error).with_context(|| format!("Failed to verify {}", args.file.display()))
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}
