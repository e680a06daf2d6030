//! Sequential driver: file discovery, the resumability gate, per-file
//! processing, progress reporting, and error accounting (spec §4.7, §7).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use secnorm::ingest::{LoadOutcome, extract, load_path, validate_top_level};
use secnorm::model::EntityRow;
use secnorm::output::{FactsWriter, FailedFile, Manifest, RunAccumulators, facts_output_path};
use secnorm::transform::{build_rag_sentences, rank};

use crate::error::{Result, RunError};

/// How often (in files processed) the driver logs a progress line, besides
/// always logging on the final file (spec §4.7).
const PROGRESS_INTERVAL: usize = 500;

/// Parsed and validated command-line configuration for one run.
#[derive(Debug, Clone)]
pub(crate) struct RunConfig {
    /// Directory containing `CIK*.json` input documents.
    pub(crate) input_dir: PathBuf,
    /// Directory output tables and the manifest are written under.
    pub(crate) output_dir: PathBuf,
    /// Bypass the resumability gate and overwrite existing output.
    pub(crate) force: bool,
    /// Abort the run on the first file error instead of continuing.
    pub(crate) fail_fast: bool,
    /// Widen per-file progress lines with repair/skip detail.
    pub(crate) verbose: bool,
    /// Date stamped onto every `entity_master` row as `snapshot_date`.
    pub(crate) snapshot_date: String,
}

impl RunConfig {
    /// `<output_dir>/processed/sec`, where the four non-streamed tables and
    /// the manifest are written.
    pub(crate) fn processed_dir(&self) -> PathBuf {
        self.output_dir.join("processed").join("sec")
    }

    /// `<output_dir>/rag`, where the RAG sentence index is written.
    pub(crate) fn rag_dir(&self) -> PathBuf {
        self.output_dir.join("rag")
    }
}

/// What a run actually did: skip the resumability gate, or process the
/// input directory and produce a manifest.
#[derive(Debug)]
pub(crate) enum RunOutcome {
    /// `facts.parquet` already existed and `--force` was not set; nothing
    /// was read or written.
    SkippedResumability,
    /// The run processed (a prefix of) the input directory.
    Completed(Manifest),
}

/// Runs the full pipeline per `config`.
///
/// Returns [`RunOutcome::SkippedResumability`] without touching the
/// filesystem beyond the existence check when the facts output already
/// exists and `force` is unset. Otherwise walks `input_dir` in sorted order,
/// processes each file, and always finalizes the writer and manifest before
/// returning — including when `fail_fast` aborts the loop early.
pub(crate) fn run(config: &RunConfig) -> Result<RunOutcome> {
    let processed_dir = config.processed_dir();
    let facts_path = facts_output_path(&processed_dir);

    if facts_path.exists() && !config.force {
        println!(
            "facts output already exists at {} (use --force to rebuild); skipping run",
            facts_path.display()
        );
        return Ok(RunOutcome::SkippedResumability);
    }

    let started = Instant::now();
    let input_files = discover_input_files(&config.input_dir)?;
    let total_files = input_files.len();

    let pb = ProgressBar::new(total_files as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );

    let mut writer = FactsWriter::create(&facts_path)?;
    let mut accumulators = RunAccumulators::new();

    let mut processed_ok = 0usize;
    let mut repaired_truncated = 0usize;
    let mut skipped_empty = 0usize;
    let mut errors = 0usize;
    let mut failed_files: Vec<FailedFile> = Vec::new();
    let mut aborted_early = false;

    for (index, path) in input_files.iter().enumerate() {
        match process_file(path, &config.snapshot_date, &mut writer, &mut accumulators) {
            Ok(Outcome::Ok) => processed_ok += 1,
            Ok(Outcome::Repaired) => {
                processed_ok += 1;
                repaired_truncated += 1;
                if config.verbose {
                    pb.println(format!("repaired truncated JSON: {}", path.display()));
                }
            }
            Ok(Outcome::SkippedEmpty) => {
                skipped_empty += 1;
                if config.verbose {
                    pb.println(format!("skipped (under size floor): {}", path.display()));
                }
            }
            Err(RunError::Output(output_error)) => {
                // The shared writer itself is broken; no further file can be
                // trusted to append cleanly, so the run aborts immediately.
                writer.close().ok();
                return Err(RunError::Output(output_error));
            }
            Err(e) => {
                errors += 1;
                failed_files.push(FailedFile {
                    file: path.display().to_string(),
                    error: e.to_string(),
                });
                eprintln!("error processing {}: {e}", path.display());
                if config.fail_fast {
                    aborted_early = true;
                }
            }
        }

        pb.set_position((index + 1) as u64);

        let is_last = index + 1 == total_files;
        if !aborted_early && ((index + 1) % PROGRESS_INTERVAL == 0 || is_last) {
            log_progress(&pb, started, index + 1, total_files, processed_ok, errors);
        }

        if aborted_early {
            log_progress(&pb, started, index + 1, total_files, processed_ok, errors);
            break;
        }
    }

    pb.finish_and_clear();

    // Guaranteed-execution close: reached on the happy path, on a fail-fast
    // abort, and (via the early return above) on a writer failure.
    writer.close()?;

    let manifest = Manifest {
        total_files,
        processed_ok,
        repaired_truncated,
        skipped_empty,
        errors,
        elapsed_seconds: started.elapsed().as_secs_f64(),
        entities: accumulators.entity_count(),
        unique_concepts: accumulators.unique_concepts(),
        unique_filings: accumulators.unique_filings(),
        rag_sentences: accumulators.rag_sentence_count(),
        failed_files,
    };

    accumulators.finalize(&processed_dir, &config.rag_dir())?;
    manifest.write(&processed_dir.join("manifest.json"))?;

    Ok(RunOutcome::Completed(manifest))
}

fn log_progress(
    pb: &ProgressBar,
    started: Instant,
    done: usize,
    total: usize,
    processed_ok: usize,
    errors: usize,
) {
    let elapsed = started.elapsed().as_secs_f64();
    let rate = if elapsed > 0.0 {
        done as f64 / elapsed
    } else {
        0.0
    };
    pb.println(format!(
        "{done}/{total} files ({elapsed:.1}s elapsed, {rate:.1} files/s) — ok: {processed_ok}, errors: {errors}"
    ));
}

/// Outcome of processing one file, before it's folded into the running
/// manifest counters.
enum Outcome {
    Ok,
    Repaired,
    SkippedEmpty,
}

/// Loads, validates, extracts, ranks, and builds sentences for one company,
/// then folds the result into `writer` and `accumulators`.
fn process_file(
    path: &Path,
    snapshot_date: &str,
    writer: &mut FactsWriter,
    accumulators: &mut RunAccumulators,
) -> Result<Outcome> {
    let loaded = load_path(path)?;
    let (doc, partial) = match loaded {
        LoadOutcome::SkippedEmpty => return Ok(Outcome::SkippedEmpty),
        LoadOutcome::Loaded { doc, partial, .. } => (doc, partial),
    };

    let top = validate_top_level(&doc)?;
    let cik = top.cik.clone();
    let entity_name = top.entity_name.to_string();

    let mut extraction = extract(&top, partial)?;
    rank(&mut extraction.facts);
    let rag_rows = build_rag_sentences(&extraction.facts, &entity_name, &extraction.concepts);

    let last_seen_filing_date = extraction
        .facts
        .iter()
        .map(|fact| fact.filed_date.as_str())
        .max()
        .unwrap_or("")
        .to_string();

    writer.write_batch(&extraction.facts)?;
    accumulators.record_company(
        EntityRow {
            cik,
            entity_name,
            last_seen_filing_date,
            snapshot_date: snapshot_date.to_string(),
            partial,
        },
        extraction.concepts,
        extraction.filings,
        rag_rows,
    );

    Ok(if partial { Outcome::Repaired } else { Outcome::Ok })
}

/// Lists `CIK*.json` files directly under `input_dir`, sorted lexicographically
/// (spec §6, §9 — reproducible per-company ordering within the facts table).
fn discover_input_files(input_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("CIK") && name.ends_with(".json"))
        })
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn discover_input_files_filters_and_sorts_cik_json() {
        let dir = temp_dir("secnorm_run_discover");
        write_file(&dir, "CIK0000000002.json", "{}");
        write_file(&dir, "CIK0000000001.json", "{}");
        write_file(&dir, "README.md", "not a fact file");
        write_file(&dir, "other.json", "{}");

        let files = discover_input_files(&dir).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(
            names,
            vec!["CIK0000000001.json".to_string(), "CIK0000000002.json".to_string()]
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn resumability_gate_skips_an_existing_run_without_force() {
        let dir = temp_dir("secnorm_run_resumability");
        let input_dir = dir.join("input");
        let output_dir = dir.join("output");
        fs::create_dir_all(&input_dir).unwrap();
        let processed = output_dir.join("processed").join("sec");
        fs::create_dir_all(&processed).unwrap();
        fs::write(processed.join("facts.parquet"), b"existing").unwrap();

        let config = RunConfig {
            input_dir,
            output_dir,
            force: false,
            fail_fast: false,
            verbose: false,
            snapshot_date: "2026-07-29".to_string(),
        };

        let outcome = run(&config).unwrap();
        assert!(matches!(outcome, RunOutcome::SkippedResumability));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn end_to_end_run_processes_one_company_and_writes_manifest() {
        let dir = temp_dir("secnorm_run_end_to_end");
        let input_dir = dir.join("input");
        let output_dir = dir.join("output");
        fs::create_dir_all(&input_dir).unwrap();

        let body = r#"{"cik":320193,"entityName":"Apple Inc.","facts":{"us-gaap":{"Assets":{"label":"Assets","description":"Total assets","units":{"USD":[{"end":"2022-09-24","val":352755000000.0,"accn":"A1","fy":2022,"fp":"FY","form":"10-K","filed":"2022-10-28"}]}}}}}"#;
        write_file(&input_dir, "CIK0000320193.json", body);
        write_file(&input_dir, "CIK0000000001.json", "tiny");

        let config = RunConfig {
            input_dir,
            output_dir: output_dir.clone(),
            force: false,
            fail_fast: false,
            verbose: false,
            snapshot_date: "2026-07-29".to_string(),
        };

        let outcome = run(&config).unwrap();
        let RunOutcome::Completed(manifest) = outcome else {
            panic!("expected a completed run");
        };

        assert_eq!(manifest.total_files, 2);
        assert_eq!(manifest.processed_ok, 1);
        assert_eq!(manifest.skipped_empty, 1);
        assert_eq!(manifest.errors, 0);
        assert_eq!(manifest.entities, 1);
        assert_eq!(manifest.rag_sentences, 1);

        assert!(
            output_dir
                .join("processed")
                .join("sec")
                .join("facts.parquet")
                .exists()
        );
        assert!(
            output_dir
                .join("processed")
                .join("sec")
                .join("manifest.json")
                .exists()
        );
        assert!(output_dir.join("rag").join("sec_facts_index.parquet").exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn fail_fast_aborts_after_first_error_but_still_closes_writer() {
        let dir = temp_dir("secnorm_run_fail_fast");
        let input_dir = dir.join("input");
        let output_dir = dir.join("output");
        fs::create_dir_all(&input_dir).unwrap();

        // Over the size floor but unrecoverably truncated.
        let bad = format!(r#"{{"cik":1,"entityNa{}"#, "x".repeat(120));
        write_file(&input_dir, "CIK0000000001.json", &bad);
        let good = r#"{"cik":2,"entityName":"Y","facts":{}}"#;
        write_file(&input_dir, "CIK0000000002.json", good);

        let config = RunConfig {
            input_dir,
            output_dir: output_dir.clone(),
            force: false,
            fail_fast: true,
            verbose: false,
            snapshot_date: "2026-07-29".to_string(),
        };

        let outcome = run(&config).unwrap();
        let RunOutcome::Completed(manifest) = outcome else {
            panic!("expected a completed run");
        };

        assert_eq!(manifest.errors, 1);
        assert_eq!(manifest.failed_files.len(), 1);
        // The second, valid file never ran because fail_fast aborted first.
        assert_eq!(manifest.processed_ok, 0);
        assert!(
            output_dir
                .join("processed")
                .join("sec")
                .join("facts.parquet")
                .exists()
        );

        fs::remove_dir_all(&dir).ok();
    }
}
