//! CLI for enumerating fixed-length letter sequences.
//!
//! # Usage
//!
//! ```bash
//! # Every successor of an explicit seed
//! cargo run -p alphaseq-cli -- --seed aay
//!
//! # All-'A' seed of length 4, first ten successors
//! cargo run -p alphaseq-cli -- --length 4 --upper --limit 10
//!
//! # Count without enumerating
//! cargo run -p alphaseq-cli -- --seed zzu --count-only
//!
//! # Machine-readable report
//! cargo run -p alphaseq-cli -- --seed zzu --limit 8 --json
//! ```

use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use serde::Serialize;

use alphaseq_core::{LetterSequence, SequenceError, SEQUENCE_LEN_MAX};

/// Enumerate fixed-length letter sequences in successor order.
#[derive(Debug, Parser)]
#[command(name = "alphaseq", version, about)]
#[command(group = ArgGroup::new("start").required(true).args(["seed", "length"]))]
struct Args {
    /// Seed sequence to start from (letters only)
    #[arg(short, long)]
    seed: Option<String>,

    /// Build an all-'a' (or, with --upper, all-'A') seed of this length
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(0..=SEQUENCE_LEN_MAX as u64))]
    length: Option<u64>,

    /// Seed in upper case (only with --length)
    #[arg(long, requires = "length")]
    upper: bool,

    /// Print at most this many successors
    #[arg(long)]
    limit: Option<u64>,

    /// Print the seed and case count only, without enumerating
    #[arg(long)]
    count_only: bool,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let sequence = match build_sequence(&args) {
        Ok(sequence) => sequence,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let report = Report::collect(&sequence, &args);
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(error) => {
                eprintln!("Error: failed to serialize report: {error}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Seed: {}", sequence.seed());
    println!("Case count: {}", sequence.case_count());

    if !args.count_only {
        let mut successors = sequence.successors();
        let limit = args.limit.unwrap_or(u64::MAX);
        let mut produced = 0u64;

        while produced < limit {
            match successors.next() {
                Some(value) => println!("{value}"),
                None => break,
            }
            produced += 1;
        }

        if successors.remaining() > 0 {
            eprintln!("... {} more not shown", successors.remaining());
        }
    }

    ExitCode::SUCCESS
}

fn build_sequence(args: &Args) -> Result<LetterSequence, SequenceError> {
    match (&args.seed, args.length) {
        (Some(text), _) => LetterSequence::from_text(text),
        (None, Some(length)) if args.upper => {
            Ok(LetterSequence::with_upper_case_seed(length as usize))
        }
        (None, Some(length)) => Ok(LetterSequence::with_lower_case_seed(length as usize)),
        // The start argument group requires one of --seed/--length.
        (None, None) => unreachable!("clap enforces the start group"),
    }
}

/// Machine-readable enumeration report for `--json`.
#[derive(Debug, Serialize)]
struct Report {
    seed: String,
    case_count: u64,
    produced: u64,
    truncated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sequences: Vec<String>,
}

impl Report {
    fn collect(sequence: &LetterSequence, args: &Args) -> Self {
        let mut report = Self {
            seed: sequence.seed(),
            case_count: sequence.case_count(),
            produced: 0,
            truncated: false,
            sequences: Vec::new(),
        };

        if args.count_only {
            report.truncated = sequence.case_count() > 1;
            return report;
        }

        let limit = args.limit.unwrap_or(u64::MAX);
        let mut successors = sequence.successors();

        while report.produced < limit {
            match successors.next() {
                Some(value) => {
                    report.sequences.push(value);
                    report.produced += 1;
                }
                None => break,
            }
        }
        report.truncated = successors.remaining() > 0;

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for_seed(seed: &str, limit: Option<u64>, count_only: bool) -> Args {
        Args {
            seed: Some(seed.to_string()),
            length: None,
            upper: false,
            limit,
            count_only,
            json: false,
        }
    }

    #[test]
    fn test_build_sequence_from_seed_text() {
        let args = args_for_seed("aay", None, false);
        let sequence = build_sequence(&args).unwrap();
        assert_eq!(sequence.seed(), "aay");
        assert_eq!(sequence.case_count(), 17_576);
    }

    #[test]
    fn test_build_sequence_rejects_non_letters() {
        let args = args_for_seed("a1c", None, false);
        assert!(build_sequence(&args).is_err());
    }

    #[test]
    fn test_build_sequence_from_length() {
        let args = Args {
            seed: None,
            length: Some(3),
            upper: true,
            limit: None,
            count_only: false,
            json: false,
        };
        let sequence = build_sequence(&args).unwrap();
        assert_eq!(sequence.seed(), "AAA");
    }

    #[test]
    fn test_report_respects_limit_and_flags_truncation() {
        let sequence = LetterSequence::from_text("aa").unwrap();

        let limited = Report::collect(&sequence, &args_for_seed("aa", Some(3), false));
        assert_eq!(limited.sequences, ["ab", "ac", "ad"]);
        assert_eq!(limited.produced, 3);
        assert!(limited.truncated);

        let full = Report::collect(&sequence, &args_for_seed("aa", None, false));
        assert_eq!(full.produced, 675);
        assert!(!full.truncated);
    }

    #[test]
    fn test_count_only_report_lists_nothing() {
        let sequence = LetterSequence::from_text("zzu").unwrap();
        let report = Report::collect(&sequence, &args_for_seed("zzu", None, true));
        assert_eq!(report.case_count, 676);
        assert_eq!(report.produced, 0);
        assert!(report.sequences.is_empty());
    }
}
