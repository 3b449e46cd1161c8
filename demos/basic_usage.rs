// ============================================================================
// Basic Usage Example
// ============================================================================

use quadratic_solver::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    println!("=== Quadratic Solver Example ===\n");

    let solver = QuadraticSolver::from_config(&SolverConfig::default(), Arc::new(NoOpObserver))
        .expect("default configuration is valid");
    let scale = solver.engine().scale().clone();

    println!("Scale: 10^{}\n", scale.exponent());

    // Human-readable coefficients, scaled at the boundary
    let equations = [
        ("x² - 3x + 2", "1", "-3", "2"),
        ("x² - 2x + 1", "1", "-2", "1"),
        ("x² + x - 1", "1", "1", "-1"),
        ("2x² - 5x - 3", "2", "-5", "-3"),
        ("0.5x² - 1.25x + 0.5", "0.5", "-1.25", "0.5"),
        ("x² + 1", "1", "0", "1"),
        ("x + 1 (a = 0)", "0", "1", "1"),
        ("x² + 3x + 2", "1", "3", "2"),
    ];

    for (label, a, b, c) in equations.iter() {
        let coefficients = match scale_coefficients(a, b, c, &scale) {
            Ok(coefficients) => coefficients,
            Err(err) => {
                println!("{:<22} -> invalid coefficients: {}", label, err);
                continue;
            },
        };

        match solver.solve(&coefficients) {
            Ok(solution) => {
                let report = RootReport::new(&solution.root);
                println!(
                    "{:<22} -> root {} ({})",
                    label,
                    solution.root.display(&scale),
                    report.to_json().unwrap_or_default()
                );
                println!(
                    "{:<22}    residual {}",
                    "",
                    solver.residual(&coefficients, &solution.root).display(&scale)
                );
            },
            Err(err) => println!("{:<22} -> {} [{}]", label, err, err.kind()),
        }
    }

    // Newton iterations for sqrt(2)
    println!("\n=== sqrt(2) Newton Estimates ===");
    let two = scale.units(2);
    if let Ok(estimates) = solver.engine().sqrt_estimates(&two) {
        for (i, estimate) in estimates.enumerate() {
            println!("  x{} = {}", i, estimate.display(&scale));
        }
    }
}

fn scale_coefficients(a: &str, b: &str, c: &str, scale: &Scale) -> NumericResult<Coefficients> {
    let to_raw = |s: &str| -> NumericResult<i128> {
        let d: Decimal = s.parse().map_err(|_| NumericError::InvalidInput)?;
        let scaled = ScaledValue::from_decimal(d, scale)?;
        Ok(wrap_i128(scaled.raw()))
    };
    Ok(Coefficients::new(to_raw(a)?, to_raw(b)?, to_raw(c)?))
}
