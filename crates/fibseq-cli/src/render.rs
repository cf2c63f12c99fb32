//! Text rendering of a generated sequence.

use anyhow::{Context, Result};
use clap::ValueEnum;
use fibseq_core::Term;
use serde::Serialize;

/// How the sequence is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Space-separated integers: `0 1 1 2`
    #[default]
    Plain,
    /// Bracketed list: `[0, 1, 1, 2]`
    List,
    /// JSON object: `{"count":4,"terms":[0,1,1,2]}`
    Json,
}

#[derive(Serialize)]
struct SequenceReport<'a> {
    count: usize,
    terms: &'a [Term],
}

/// Render `terms` as a single line (without the trailing newline).
pub fn render(terms: &[Term], format: OutputFormat) -> Result<String> {
    let line = match format {
        OutputFormat::Plain => join(terms, " "),
        OutputFormat::List => format!("[{}]", join(terms, ", ")),
        OutputFormat::Json => serde_json::to_string(&SequenceReport {
            count: terms.len(),
            terms,
        })
        .context("failed to serialize sequence as JSON")?,
    };
    Ok(line)
}

fn join(terms: &[Term], separator: &str) -> String {
    terms
        .iter()
        .map(|term| term.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
