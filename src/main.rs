// ============================================================================
// Quadratic Solver CLI
// quadratic-solver <A> <B> <C> [SCALE_EXPONENT]
// ============================================================================

use clap::Parser;
use quadratic_solver::prelude::*;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Prefix of every failure line, kept for callers that scan stdout.
const ERROR_PREFIX: &str = "Error calculating zeroes:";

#[derive(Parser)]
#[command(name = "quadratic-solver")]
#[command(
    about = "Non-negative root of a·x² + b·x + c = 0 in 10^27 fixed-point arithmetic",
    long_about = None
)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Coefficient a, already scaled by 10^27 (wrapped to 128 bits)
    a: String,

    /// Coefficient b, already scaled by 10^27 (wrapped to 128 bits)
    b: String,

    /// Coefficient c, already scaled by 10^27 (wrapped to 128 bits)
    c: String,

    /// Scale exponent of the inputs. Informational only: arithmetic always uses 10^27
    scale_exponent: Option<String>,

    /// Log every intermediate value to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = solver_config(cli.scale_exponent.as_deref());
    let solver = match QuadraticSolver::from_config(&config, Arc::new(LoggingObserver)) {
        Ok(solver) => solver,
        Err(reason) => {
            println!("{} {}", ERROR_PREFIX, reason);
            return ExitCode::FAILURE;
        },
    };

    match solver.solve_str(&cli.a, &cli.b, &cli.c) {
        Ok(solution) => match RootReport::new(&solution.root).to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            },
            Err(err) => {
                println!("{} {}", ERROR_PREFIX, err);
                ExitCode::FAILURE
            },
        },
        Err(err) => {
            tracing::debug!(kind = err.kind(), "solve rejected");
            println!("{} {}", ERROR_PREFIX, err);
            ExitCode::from(exit_code(&err))
        },
    }
}

/// Default configuration plus the caller's declared exponent, if it parses.
fn solver_config(declared: Option<&str>) -> SolverConfig {
    let mut config = SolverConfig::default();

    if let Some(declared) = declared {
        match declared.trim().parse::<u32>() {
            Ok(exponent) => config = config.with_declared_exponent(exponent),
            Err(_) => tracing::warn!(declared, "ignoring unparseable scale exponent"),
        }
    }

    if let Some(declared) = config.declared_mismatch() {
        tracing::warn!(
            declared,
            used = config.scale_exponent,
            "declared scale exponent differs from the fixed arithmetic scale"
        );
    }

    config
}

/// Distinct process status per failure kind.
fn exit_code(err: &SolverError) -> u8 {
    match err {
        SolverError::Numeric(NumericError::InvalidInput) => 2,
        SolverError::NegativeDiscriminant { .. } => 3,
        SolverError::NegativeRoot { .. } => 4,
        SolverError::Numeric(NumericError::DivisionByZero) => 5,
        SolverError::Numeric(NumericError::NegativeSquareRoot) => 6,
        SolverError::Numeric(_) => 1,
    }
}

/// Logs go to stderr so stdout carries only the result line.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "quadratic_solver=debug"
    } else {
        "quadratic_solver=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_accepts_negative_coefficients() {
        let cli = Cli::try_parse_from([
            "quadratic-solver",
            "1000000000000000000000000000",
            "-3000000000000000000000000000",
            "2000000000000000000000000000",
            "27",
        ])
        .unwrap();
        assert_eq!(cli.b, "-3000000000000000000000000000");
        assert_eq!(cli.scale_exponent.as_deref(), Some("27"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_declared_exponent_never_changes_scale() {
        assert_eq!(solver_config(Some("18")).scale_exponent, 27);
        assert_eq!(solver_config(Some("18")).declared_exponent, Some(18));
        assert_eq!(solver_config(Some("abc")).declared_exponent, None);
        assert_eq!(solver_config(None), SolverConfig::default());
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            SolverError::Numeric(NumericError::InvalidInput),
            SolverError::NegativeDiscriminant {
                discriminant: ScaledValue::from_raw(-1),
            },
            SolverError::NegativeRoot {
                root: ScaledValue::from_raw(-1),
            },
            SolverError::Numeric(NumericError::DivisionByZero),
            SolverError::Numeric(NumericError::NegativeSquareRoot),
        ];
        let codes: Vec<u8> = errors.iter().map(exit_code).collect();
        assert_eq!(codes, vec![2, 3, 4, 5, 6]);
    }
}
