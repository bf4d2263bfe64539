//! Measures the period of the reference pendulum and prints it next to the
//! harmonic and elliptic-integral periods.
//!
//! Run with `cargo run -p pendula --example period_report`.

use pendula::{Config, Parameters, Report};

fn main() -> Result<(), pendula::Error> {
    let report = Report::generate(&Parameters::default(), &Config::default())?;

    println!("{report}");
    println!("relative error: {:+.3e}", report.relative_error());

    Ok(())
}
