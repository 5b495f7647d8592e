//! Solve the 2x2 and 5x5 complex systems and print the solutions.
//!
//! Run with `RUST_LOG=cramer=debug` to see the solver's log output.

use anyhow::Result;
use cramer::{solve, Complex64, CramerError, Matrix};
use tracing_subscriber::EnvFilter;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn report(label: &str, a: &Matrix<Complex64>, b: &[Complex64]) {
    match solve(a, b) {
        Ok(x) => println!("Solutions for the {label} system: {x}"),
        Err(CramerError::SingularMatrix) => println!("{label}: {}", CramerError::SingularMatrix),
        Err(e) => println!("{label}: failed to solve: {e}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a2 = Matrix::from_vec2d(vec![
        vec![c(1.0, 2.0), c(2.0, 0.0)],
        vec![c(3.0, 0.0), c(4.0, 4.0)],
    ])?;
    let b2 = [c(5.0, 0.0), c(11.0, 0.0)];
    report("2x2", &a2, &b2);

    let a5 = Matrix::from_vec2d(vec![
        vec![c(1.0, 3.0), c(2.0, 0.0), c(4.0, 1.0), c(5.0, 0.0), c(6.0, 0.0)],
        vec![c(7.0, 0.0), c(8.0, 2.0), c(9.0, 0.0), c(10.0, 3.0), c(11.0, 0.0)],
        vec![c(12.0, 0.0), c(13.0, 0.0), c(14.0, 4.0), c(15.0, 5.0), c(16.0, 0.0)],
        vec![c(17.0, 6.0), c(18.0, 0.0), c(19.0, 0.0), c(20.0, 7.0), c(21.0, 8.0)],
        vec![c(22.0, 0.0), c(23.0, 9.0), c(24.0, 10.0), c(25.0, 0.0), c(26.0, 11.0)],
    ])?;
    let b5 = [c(27.0, 0.0), c(28.0, 12.0), c(29.0, 0.0), c(30.0, 13.0), c(31.0, 0.0)];
    report("5x5", &a5, &b5);

    let singular = Matrix::from_real_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]])?;
    report("singular 2x2", &singular, &[c(1.0, 0.0), c(2.0, 0.0)]);

    Ok(())
}
