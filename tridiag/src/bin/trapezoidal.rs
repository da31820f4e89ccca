//! Approximate `∫ e^{−x} dx` with the composite trapezoidal rule.
//!
//! Usage: `trapezoidal [--lower A] [--upper B] [-n N]`

use anyhow::{Context, Result};
use clap::Parser;
use td_core::{parse_size, Size};
use td_math::{Integrator, TrapezoidalRule};
use tridiag::source::decay;

#[derive(Parser)]
#[command(name = "trapezoidal", about = "Integrate e^(-x) with the trapezoidal rule")]
struct Args {
    /// Lower integration bound
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lower: f64,

    /// Upper integration bound
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    upper: f64,

    /// Number of subintervals
    #[arg(short, default_value = "1000", value_parser = parse_size, allow_hyphen_values = true)]
    n: Size,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rule = TrapezoidalRule::new(args.n)?;
    let integral = rule
        .integrate(decay, args.lower, args.upper)
        .with_context(|| format!("integration on [{}, {}] failed", args.lower, args.upper))?;
    println!("Integral = {integral}");
    Ok(())
}
