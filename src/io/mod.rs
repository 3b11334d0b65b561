pub mod output;

pub use output::{JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

use crate::core::{RecordInput, SpeakerCountRecord};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Parse a JSON array of input rows.
pub fn parse_records(contents: &str) -> Result<Vec<SpeakerCountRecord>> {
    let rows: Vec<RecordInput> =
        serde_json::from_str(contents).context("Expected a JSON array of records")?;
    Ok(rows.into_iter().map(SpeakerCountRecord::from).collect())
}

/// Read and parse an input file of records.
pub fn read_records(path: &Path) -> Result<Vec<SpeakerCountRecord>> {
    let contents = read_file(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_records(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
