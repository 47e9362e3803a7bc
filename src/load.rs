// src/load.rs

use anyhow::{Context, Result};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use std::{
    fs::File,
    io::Seek,
    path::Path,
    sync::Arc,
};
use tracing::{debug, warn};

use crate::registry::TableRegistry;

/// Rows per Arrow batch when reading a CSV.
const BATCH_SIZE: usize = 8192;

/// One CSV file parsed into Arrow batches, with a header row and column types
/// inferred from cell contents. Read-only after load.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl LoadedTable {
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    /// `(rows, columns)`, pandas-style.
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    /// At most the first `n` rows, as a single batch.
    pub fn head(&self, n: usize) -> RecordBatch {
        match self.batches.first() {
            Some(batch) => batch.slice(0, n.min(batch.num_rows())),
            None => RecordBatch::new_empty(self.schema.clone()),
        }
    }
}

/// A per-file failure. The entry is simply absent from the run; nothing is
/// retried.
#[derive(Debug)]
pub struct LoadFailure {
    pub key: String,
    pub filename: String,
    pub error: anyhow::Error,
}

/// The outcome of one batch load: tables that parsed, in load order, plus the
/// failures collected along the way. A key is present iff its file existed
/// and parsed without error.
#[derive(Debug, Default)]
pub struct LoadRun {
    tables: Vec<(String, LoadedTable)>,
    failures: Vec<LoadFailure>,
    total: usize,
}

impl LoadRun {
    /// Number of tables that loaded.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Size of the registry the run was driven by.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, key: &str) -> Option<&LoadedTable> {
        self.tables
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, t)| t)
    }

    /// Loaded tables in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LoadedTable)> {
        self.tables.iter().map(|(k, t)| (k.as_str(), t))
    }

    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }
}

/// Parse one CSV file: header row, then column types inferred from content.
/// Any I/O or parse error fails the file as a whole.
pub fn load_table(path: &Path) -> Result<LoadedTable> {
    let mut file =
        File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(&mut file, None)
        .with_context(|| format!("inferring schema for {}", path.display()))?;
    file.rewind()
        .context("rewinding after schema inference")?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(BATCH_SIZE)
        .build(file)
        .context("creating CSV reader")?;

    let batches: Vec<RecordBatch> = reader
        .collect::<Result<_, _>>()
        .with_context(|| format!("reading CSV batches from {}", path.display()))?;

    Ok(LoadedTable { schema, batches })
}

/// Attempt every registry entry under `dir`, in registry order.
///
/// Per-file failures are recorded and the scan continues; the batch is never
/// aborted. An inaccessible directory just fails every entry.
pub fn load_all(dir: &Path, registry: &TableRegistry) -> LoadRun {
    let mut run = LoadRun {
        tables: Vec::with_capacity(registry.len()),
        failures: Vec::new(),
        total: registry.len(),
    };

    for (key, filename) in registry.iter() {
        let path = dir.join(filename);
        match load_table(&path) {
            Ok(table) => {
                debug!(
                    key,
                    rows = table.num_rows(),
                    cols = table.num_columns(),
                    "loaded"
                );
                run.tables.push((key.to_string(), table));
            }
            Err(error) => {
                warn!(key, filename, error = %error, "table failed to load");
                run.failures.push(LoadFailure {
                    key: key.to_string(),
                    filename: filename.to_string(),
                    error,
                });
            }
        }
    }

    run
}
