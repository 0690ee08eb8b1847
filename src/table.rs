// Tabular boundary — CSV input/output with one-shot column validation.
//
// Input tables come from the surrounding orchestration (reference-manager
// exports and intermediate pipeline files). Arbitrary columns are preserved
// untouched; each pipeline appends exactly one. Required columns are checked
// once, up front, so a missing column fails before any row is processed;
// a missing cell is an empty string, never an error.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

/// An in-memory CSV table: header row plus string cells.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn read_csv(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open input table {}", path.display()))?;
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Cannot read header row of {}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("Malformed CSV row in {}", path.display()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Index of a required column. Absence is a fatal validation error —
    /// callers resolve every required column before touching any row.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        match self.headers.iter().position(|h| h == name) {
            Some(index) => Ok(index),
            None => anyhow::bail!(
                "Input table must contain the '{name}' column (found: {})",
                self.headers.join(", ")
            ),
        }
    }

    /// All values of a column, top to bottom. Cells missing from short rows
    /// come back as "".
    pub fn column(&self, index: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect()
    }

    /// Append one column on the right; `values` must hold one entry per row.
    pub fn append_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            anyhow::bail!(
                "Column '{name}' has {} values for {} rows",
                values.len(),
                self.rows.len()
            );
        }
        let width = self.headers.len();
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.resize(width, String::new());
            row.push(value);
        }
        Ok(())
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Cannot create output table {}", path.display()))?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            // Pad short rows so every record spans the full header width
            let mut record = row.clone();
            record.resize(self.headers.len(), String::new());
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}
