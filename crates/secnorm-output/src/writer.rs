//! Run-scoped output accumulation and the streaming facts writer (spec §4.6).

use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use secnorm_model::{ConceptRow, EntityRow, FactRow, FilingRow, RagRow};

use crate::error::{OutputError, Result};
use crate::tables;

/// Appends facts to `<output-root>/processed/sec/facts.parquet` one
/// company's batch at a time, so peak memory never holds the whole facts
/// table at once.
///
/// Must be closed with [`FactsWriter::close`] on every exit path — a
/// dropped-without-closing writer leaves a parquet footer unwritten and the
/// file unreadable. The driver is responsible for calling `close` inside its
/// guaranteed-execution wrapper around the per-file loop.
pub struct FactsWriter {
    inner: Option<BatchedWriter<File>>,
}

impl FactsWriter {
    /// Opens the facts Parquet file at `path`, creating parent directories
    /// as needed. The writer's schema is fixed at open time from
    /// [`tables::facts_frame`]'s empty-batch shape.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let schema_df = tables::facts_frame(&[])?;
        let inner = ParquetWriter::new(file)
            .with_compression(ParquetCompression::Snappy)
            .batched(&schema_df.schema())?;
        Ok(Self { inner: Some(inner) })
    }

    /// Appends one company's facts as a single column batch. A no-op on an
    /// empty slice, so callers don't need to special-case companies with no
    /// accepted facts.
    pub fn write_batch(&mut self, facts: &[FactRow]) -> Result<()> {
        if facts.is_empty() {
            return Ok(());
        }
        let mut df = tables::facts_frame(facts)?;
        let writer = self.inner.as_mut().ok_or(OutputError::WriterAlreadyClosed)?;
        writer.write_batch(&mut df)?;
        Ok(())
    }

    /// Flushes the Parquet footer. Idempotent: a second call is a no-op
    /// rather than an error, so the driver can call this unconditionally in
    /// its guaranteed-execution wrapper even after an earlier explicit
    /// close.
    pub fn close(&mut self) -> Result<()> {
        if let Some(writer) = self.inner.take() {
            writer.finish()?;
        }
        Ok(())
    }
}

/// The four small tables built up in memory across a run, plus the paths
/// they're written to at finalization.
#[derive(Debug, Default)]
pub struct RunAccumulators {
    entities: Vec<EntityRow>,
    concepts: BTreeMap<(String, String), (String, String)>,
    filings: BTreeSet<(String, String, String, String)>,
    rag_rows: Vec<RagRow>,
}

impl RunAccumulators {
    /// Creates an empty accumulator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds in one company's results: the entity row, its contribution to
    /// the concept dictionary (last writer wins), its filings, and its RAG
    /// sentences.
    pub fn record_company(
        &mut self,
        entity: EntityRow,
        concepts: BTreeMap<(String, String), (String, String)>,
        filings: BTreeSet<(String, String, String, String)>,
        rag_rows: Vec<RagRow>,
    ) {
        self.entities.push(entity);
        self.concepts.extend(concepts);
        self.filings.extend(filings);
        self.rag_rows.extend(rag_rows);
    }

    /// Number of unique `(taxonomy, concept)` pairs seen so far.
    pub fn unique_concepts(&self) -> usize {
        self.concepts.len()
    }

    /// Number of unique filings seen so far.
    pub fn unique_filings(&self) -> usize {
        self.filings.len()
    }

    /// Number of RAG sentences accumulated so far.
    pub fn rag_sentence_count(&self) -> usize {
        self.rag_rows.len()
    }

    /// Number of entity rows accumulated so far.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Writes `entity_master.parquet`, `concepts.parquet`, `filings.parquet`,
    /// and `sec_facts_index.parquet`. `concepts` and `filings` are sorted by
    /// their natural key for reproducible diffs; `entity_master` and the RAG
    /// index keep company input order.
    pub fn finalize(&self, output_root: &Path, rag_root: &Path) -> Result<()> {
        let concept_rows: Vec<ConceptRow> = self
            .concepts
            .iter()
            .map(|((taxonomy, concept), (label, description))| ConceptRow {
                taxonomy: taxonomy.clone(),
                concept: concept.clone(),
                label: label.clone(),
                description: description.clone(),
            })
            .collect();

        let filing_rows: Vec<FilingRow> = self
            .filings
            .iter()
            .map(|(cik, accession_number, form, filed_date)| FilingRow {
                cik: cik.clone(),
                accession_number: accession_number.clone(),
                form: form.clone(),
                filed_date: filed_date.clone(),
            })
            .collect();

        write_table(
            tables::entity_master_frame(&self.entities)?,
            &output_root.join("entity_master.parquet"),
        )?;
        write_table(
            tables::concepts_frame(&concept_rows)?,
            &output_root.join("concepts.parquet"),
        )?;
        write_table(
            tables::filings_frame(&filing_rows)?,
            &output_root.join("filings.parquet"),
        )?;

        fs::create_dir_all(rag_root)?;
        write_table(
            tables::rag_index_frame(&self.rag_rows)?,
            &rag_root.join("sec_facts_index.parquet"),
        )?;

        Ok(())
    }
}

fn write_table(mut df: DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df)?;
    Ok(())
}

/// Path the driver checks for the resumability gate (spec §4.7).
pub fn facts_output_path(output_root: &Path) -> PathBuf {
    output_root.join("facts.parquet")
}
