//! Runs the Caliper model conformance suite.
//!
//! Validates the fixture corpus against the canonical serialization
//! rules: round-trip equalities, document layout, and vocabulary
//! membership.
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use caliper_conformance::{run_all, Severity};
use clap::Parser;

/// Run the Caliper model conformance suite.
#[derive(Parser)]
#[command(
    name = "caliper-conformance",
    about = "Validate the Caliper model against its canonical serialization rules"
)]
struct Args {
    /// Emit the report as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let report = run_all();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Caliper Model Conformance Report");
        println!("================================");
        println!();

        let mut passed = 0usize;
        let mut warned = 0usize;
        let mut failed = 0usize;

        for result in &report.results {
            let status = match result.severity {
                Severity::Pass => {
                    passed += 1;
                    "PASS"
                }
                Severity::Warning => {
                    warned += 1;
                    "WARN"
                }
                Severity::Failure => {
                    failed += 1;
                    "FAIL"
                }
            };
            println!("[{}] {}: {}", status, result.check, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            passed, warned, failed
        );
    }

    if !report.all_passed() {
        eprintln!(
            "Conformance FAILED: {} check(s) did not pass.",
            report.failure_count()
        );
        process::exit(1);
    }
    Ok(())
}
