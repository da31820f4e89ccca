//! Solve `−u'' = 100·e^{−10x}` on (0, 1) with the Thomas algorithm.
//!
//! Usage: `thomas <N> <general|special> [--output-dir DIR] [--check]`
//!
//! Writes `<algorithm>_N_<N>.txt` with one `x v` line per interior point.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use td_core::{parse_size, Size};
use td_math::{Array, Mesh};
use td_methods::{build_solver, Algorithm, TridiagonalOperator};
use tridiag::source::{analytical_solution, exponential_source};

#[derive(Parser)]
#[command(name = "thomas", about = "Solve a tridiagonal Toeplitz system with the Thomas algorithm")]
struct Args {
    /// Number of interior mesh points
    #[arg(value_parser = parse_size, allow_hyphen_values = true)]
    n: Size,

    /// Algorithm variant: `general` or `special`
    algorithm: Algorithm,

    /// Directory for the result file (created if missing)
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Report the residual and the error against the analytical solution
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mesh = Mesh::new(args.n, &exponential_source)?;
    let rhs = mesh.rhs().clone();

    let mut solver = build_solver(args.algorithm, mesh);
    let start = Instant::now();
    solver
        .solve()
        .with_context(|| format!("{} solver failed for N = {}", args.algorithm, args.n))?;
    let elapsed = start.elapsed();

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("cannot create {}", args.output_dir.display()))?;
    let path = args.output_dir.join(args.algorithm.output_file_name(args.n));
    solver
        .write_to_file(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    eprintln!(
        "{}: N = {}, solve took {:.6} s, wrote {}",
        args.algorithm,
        args.n,
        elapsed.as_secs_f64(),
        path.display()
    );

    if args.check {
        let residual = TridiagonalOperator::second_derivative(args.n)
            .residual(solver.solution(), &rhs)?;
        let exact = solver.points().map(analytical_solution);
        let error = max_relative_error(solver.solution(), &exact);
        println!("max residual |A·v − q| = {residual:e}");
        println!("max relative error     = {error:e}");
    }

    Ok(())
}

/// `max_i |v_i − u_i| / |u_i|` over points where `u_i ≠ 0`.
fn max_relative_error(v: &Array, u: &Array) -> f64 {
    v.iter()
        .zip(u.iter())
        .filter(|(_, u)| **u != 0.0)
        .map(|(v, u)| ((v - u) / u).abs())
        .fold(0.0, f64::max)
}
