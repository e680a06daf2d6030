//! Command-line surface (spec §6): `--input-dir`, `--output-dir`, `--force`,
//! `--fail-fast`, `--verbose`.

use std::path::PathBuf;

use clap::Parser;

/// Normalizes a directory of SEC EDGAR company-facts JSON documents into a
/// star schema of columnar tables plus a natural-language RAG index.
#[derive(Parser, Debug)]
#[command(name = "secnorm")]
#[command(about = "SEC EDGAR company-facts normalization pipeline", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    /// Directory containing `CIK*.json` input documents.
    #[arg(long)]
    pub(crate) input_dir: PathBuf,

    /// Directory output tables and the manifest are written under.
    #[arg(long)]
    pub(crate) output_dir: PathBuf,

    /// Bypass the resumability gate and overwrite any existing output.
    #[arg(long)]
    pub(crate) force: bool,

    /// Abort the run on the first file error instead of continuing.
    #[arg(long)]
    pub(crate) fail_fast: bool,

    /// Widen per-file progress lines with repair/skip detail.
    #[arg(long)]
    pub(crate) verbose: bool,
}
