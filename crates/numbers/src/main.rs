//! Read a number, multiply it, print the outcome.
//!
//! Run with: cargo run -p resultflow-numbers -- --input 21
//! or pipe a line on stdin: echo 21 | cargo run -p resultflow-numbers

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use std::io::BufRead;

use anyhow::{Context, Result as AnyResult};
use clap::Parser;
use resultflow::{Result, err, ok};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Parse an integer and multiply it, reporting failures as values.
#[derive(Parser, Debug)]
#[command(name = "numbers")]
#[command(version)]
#[command(about = "Parse an integer and multiply it, without exceptions")]
struct Cli {
    /// Text to parse (reads one line from stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Multiplier applied to the parsed number
    #[arg(short, long, default_value_t = 2)]
    factor: i64,

    /// Exit with an error when the input is not a number
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> AnyResult<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let line = cli.input.map_or_else(|| read_line(std::io::stdin().lock()), ok);
    let outcome = compute(line, cli.factor);

    println!("{outcome}");

    if cli.strict {
        enforce(outcome)?;
    }
    Ok(())
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_line(mut reader: impl BufRead) -> Result<String, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(_) => ok(line),
        Err(e) => err(e.to_string()),
    }
}

fn parse_int(input: &str) -> Result<i64, String> {
    Result::from(input.trim().parse::<i64>()).map_err(|e| e.to_string())
}

fn multiply(n: i64, factor: i64) -> Result<i64, String> {
    n.checked_mul(factor)
        .map_or_else(|| err(format!("{n} * {factor} overflows")), ok)
}

/// Parse `line` and multiply it by `factor`.
fn compute(line: Result<String, String>, factor: i64) -> Result<i64, String> {
    line.and_then(|l| parse_int(&l))
        .and_then(|n| multiply(n, factor))
        .tap(|n| info!(n, "computed"))
}

/// Turn an Err into a process error for `--strict`.
fn enforce(outcome: Result<i64, String>) -> AnyResult<i64> {
    outcome
        .expect("input was not a number")
        .context("strict mode rejected the input")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_takes_first_line() {
        let line = read_line("21\nignored\n".as_bytes());
        assert_eq!(line, ok(String::from("21\n")));
    }

    #[test]
    fn test_compute_applies_factor() {
        assert_eq!(compute(ok(String::from(" 7 ")), 3), ok(21));
    }

    #[test]
    fn test_compute_reports_overflow() {
        let outcome = compute(ok(i64::MAX.to_string()), 2);
        assert_eq!(
            outcome,
            err(String::from("9223372036854775807 * 2 overflows"))
        );
    }

    #[test]
    fn test_compute_keeps_read_error() {
        assert_eq!(
            compute(err(String::from("stream closed")), 2),
            err(String::from("stream closed"))
        );
    }

    #[test]
    fn test_enforce_passes_value_through() {
        assert!(matches!(enforce(ok(4)), Ok(4)));
    }

    #[test]
    fn test_enforce_wraps_expectation_with_context() {
        let failure = enforce(err(String::from("invalid digit found in string")));
        let chain: Vec<String> = failure
            .err()
            .map(|e| e.chain().map(ToString::to_string).collect())
            .unwrap_or_default();
        assert_eq!(
            chain,
            vec![
                String::from("strict mode rejected the input"),
                String::from("input was not a number"),
            ]
        );
    }
}
