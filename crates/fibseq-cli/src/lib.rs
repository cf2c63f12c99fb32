//! Console front end for fibseq.
//!
//! Reads a term count (from the command line or an interactive prompt),
//! validates it, generates the sequence and prints it on one line.

pub mod input;
pub mod logging;
pub mod render;

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, info, warn};

pub use input::{parse_count, InvalidInputError, INVALID_INPUT_MESSAGE};
pub use render::{render, OutputFormat};

/// Prompt written when no count is given on the command line.
pub const PROMPT: &str = "Enter the number of Fibonacci terms to generate: ";

/// Header line printed before the sequence with `--header`.
pub const HEADER: &str = "Fibonacci sequence:";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "fibseq",
    version,
    about = "Print the first N terms of the Fibonacci sequence"
)]
pub struct Cli {
    /// Number of terms to generate (prompts on stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub count: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print a "Fibonacci sequence:" header line first
    #[arg(long)]
    pub header: bool,

    /// Log how long generation took
    #[arg(long)]
    pub timing: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Result of one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The sequence was printed; holds the number of terms.
    Printed(usize),
    /// The input was rejected and no sequence was printed.
    Rejected(InvalidInputError),
}

/// Entry point for the `fibseq` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::default_directive(cli.verbose, cli.quiet, cli.timing));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(&cli, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Run one read, validate, generate, render cycle against the given streams.
///
/// Invalid input is reported to `output` and returned as
/// [`Outcome::Rejected`]; only I/O failures produce an `Err`.
pub fn run_with<R, W>(cli: &Cli, input: &mut R, output: &mut W) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let raw = match &cli.count {
        Some(text) => text.clone(),
        None => prompt_for_count(input, output)?,
    };
    debug!(input = %raw.trim(), "read term count");

    let count = match parse_count(&raw) {
        Ok(count) => count,
        Err(e) => {
            warn!("rejected term count: {}", e);
            writeln!(output, "{}", INVALID_INPUT_MESSAGE).context("failed to write to stdout")?;
            output.flush().context("failed to flush stdout")?;
            return Ok(Outcome::Rejected(e));
        }
    };

    // parse_count bounds count by MAX_EXACT_TERMS
    let started = Instant::now();
    let terms = fibseq_core::generate_checked(count as i64)
        .with_context(|| format!("term count {} is outside the exact range", count))?;
    let elapsed = started.elapsed();

    if cli.timing {
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        info!(count, elapsed_us, "generated sequence");
    } else {
        debug!(count, ?elapsed, "generated sequence");
    }

    let line = render(&terms, cli.format)?;
    if cli.header {
        writeln!(output, "{}", HEADER).context("failed to write to stdout")?;
    }
    writeln!(output, "{}", line).context("failed to write to stdout")?;
    output.flush().context("failed to flush stdout")?;

    Ok(Outcome::Printed(terms.len()))
}

fn prompt_for_count<R, W>(input: &mut R, output: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT).context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    // invalid UTF-8 is left to parse_count to reject
    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .context("failed to read term count from stdin")?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}
