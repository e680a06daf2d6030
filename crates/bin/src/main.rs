//! `secnorm` CLI binary: orchestrates the SEC EDGAR company-facts
//! normalization pipeline (spec §4.7, §6).

mod cli;
mod error;
mod run;

use chrono::Utc;
use clap::Parser;
use std::process;

use cli::Cli;
use run::{RunConfig, RunOutcome, run};

fn main() {
    let cli = Cli::parse();

    let config = RunConfig {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        force: cli.force,
        fail_fast: cli.fail_fast,
        verbose: cli.verbose,
        snapshot_date: Utc::now().date_naive().to_string(),
    };

    match run(&config) {
        Ok(RunOutcome::SkippedResumability) => process::exit(0),
        Ok(RunOutcome::Completed(manifest)) => {
            println!(
                "processed {} files in {:.1}s: {} ok ({} repaired), {} skipped, {} errors",
                manifest.total_files,
                manifest.elapsed_seconds,
                manifest.processed_ok,
                manifest.repaired_truncated,
                manifest.skipped_empty,
                manifest.errors,
            );
            println!(
                "{} entities, {} concepts, {} filings, {} RAG sentences",
                manifest.entities,
                manifest.unique_concepts,
                manifest.unique_filings,
                manifest.rag_sentences,
            );
            process::exit(if manifest.errors > 0 { 1 } else { 0 });
        }
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(1);
        }
    }
}
