use std::io::Write;

use clap::Parser;
use fast_fibonacci::config::{Config, Precision};
use fast_fibonacci::fibonacci::{fibonacci_with, FibonacciResult};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
/// Computes the n-th Fibonacci number by fast matrix exponentiation.
struct Opts {
    /// Fibonacci index (non-negative)
    #[arg(value_name = "INDEX", allow_negative_numbers = true)]
    index: i64,

    /// Floating-point width: single (f32), double (f64) or extended (double-double)
    #[arg(long, default_value_t = Precision::Extended)]
    precision: Precision,
}

// Explains why a result cannot be taken as the exact integer F(index)
fn ceiling_warning(result: &FibonacciResult) -> Option<String> {
    let precision = result.precision();
    if !result.is_finite() {
        Some(format!(
            "F({}) overflows {precision} precision, which is finite only through F({})",
            result.index,
            precision.finite_limit()
        ))
    } else if !result.is_exact() {
        Some(format!(
            "F({}) exceeds the {}-bit mantissa of {precision} precision; only F(0) through F({}) are exact",
            result.index,
            precision.mantissa_bits(),
            precision.exact_limit()
        ))
    } else {
        None
    }
}

fn run(opts: &Opts, out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::new(opts.precision);
    let result = fibonacci_with(opts.index, &config)?;
    if let Some(message) = ceiling_warning(&result) {
        let precision = result.precision();
        warn!(index = result.index, %precision, "{message}");
    }

    write!(out, "{}", result.value)?;
    out.flush()?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    run(&opts, &mut std::io::stdout().lock())
}
