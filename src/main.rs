//! Command-line front-end: read a degree sequence, draw one or more graphs,
//! print each as a log-probability line followed by 1-based edges.
//!
//! Diagnostics go to `stderr` via `tracing` (level controlled by
//! `RUST_LOG`), so the sample stream on `stdout` stays parseable.

use std::{
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use degsample::{
    io::{read_degree_file, write_sample},
    sample::GraphSampler,
};

#[derive(Debug, Parser)]
#[command(
    name = "degsample",
    about = "Sample random graphs with a prescribed degree sequence.",
    group(ArgGroup::new("input").required(true).args(["file", "degrees"]))
)]
struct Cli {
    /// File containing the degree sequence, one integer per
    /// whitespace-delimited token
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Explicit degree sequence
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true, value_name = "D")]
    degrees: Option<Vec<i64>>,

    /// Generate connected graphs
    #[arg(short, long)]
    connected: bool,

    /// Generate loop-free multigraphs
    #[arg(short, long)]
    multi: bool,

    /// Exponent of the degree-biased selection heuristic
    #[arg(short, long, default_value_t = 1.0)]
    alpha: f64,

    /// How many graphs to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u64,

    /// Random seed; nondeterministic if omitted
    #[arg(short, long)]
    seed: Option<u64>,
}

fn try_main(cli: &Cli) -> Result<()> {
    let degrees = match (&cli.file, &cli.degrees) {
        (Some(path), None) => read_degree_file(path)
            .with_context(|| format!("could not read degree sequence from {}", path.display()))?,
        (None, Some(degrees)) => degrees.clone(),
        _ => unreachable!("clap enforces exactly one input source"),
    };

    debug!(
        n = degrees.len(),
        connected = cli.connected,
        multi = cli.multi,
        alpha = cli.alpha,
        "parsed degree sequence"
    );

    let mut sampler = GraphSampler::new(&degrees)?
        .alpha(cli.alpha)
        .connected(cli.connected)
        .multi(cli.multi);
    if let Some(seed) = cli.seed {
        sampler.seed(seed);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..cli.count {
        let sample = sampler.draw()?;
        write_sample(&mut out, &sample)?;
    }
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    // Argument validation failures (missing or conflicting input sources)
    // follow the same contract as library errors: an `Error: ` line on
    // stderr and exit code 1. Only `--help`/`--version` bypass it.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "degsample", "--degrees", "3", "1", "1", "1", "-c", "--alpha", "0.5", "-n", "10",
            "--seed", "7",
        ])
        .unwrap();

        assert_eq!(cli.degrees, Some(vec![3, 1, 1, 1]));
        assert!(cli.connected);
        assert!(!cli.multi);
        assert_eq!(cli.alpha, 0.5);
        assert_eq!(cli.count, 10);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.file.is_none());
    }

    #[test]
    fn negative_degrees_reach_the_library() {
        let cli = Cli::try_parse_from(["degsample", "--degrees", "-1", "1"]).unwrap();
        assert_eq!(cli.degrees, Some(vec![-1, 1]));
        assert!(try_main(&cli).is_err());
    }

    #[test]
    fn requires_exactly_one_input_source() {
        // Both rejections are real validation errors bound for stderr,
        // not help/version output.
        let err = Cli::try_parse_from(["degsample"]).unwrap_err();
        assert!(err.use_stderr());

        let err = Cli::try_parse_from(["degsample", "degrees.txt", "-d", "1", "1"]).unwrap_err();
        assert!(err.use_stderr());

        assert!(Cli::try_parse_from(["degsample", "degrees.txt"]).is_ok());

        let err = Cli::try_parse_from(["degsample", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
