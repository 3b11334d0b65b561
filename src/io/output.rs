use crate::pipeline::EnrichedBatch;
use crate::plotting::SpeakerBand;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_batch(&mut self, batch: &EnrichedBatch) -> anyhow::Result<()>;
}

/// Enriched records as a pretty-printed JSON array.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_batch(&mut self, batch: &EnrichedBatch) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&batch.records)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Table of enriched records followed by the batch summary.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_batch(&mut self, batch: &EnrichedBatch) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", render_table(batch))?;
        writeln!(self.writer, "{}", "Summary".bold())?;
        write!(self.writer, "{}", batch.summary.report())?;
        Ok(())
    }
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn band_cell(band: SpeakerBand) -> String {
    let label = band.to_string();
    match band {
        SpeakerBand::Unknown => label.bright_black().to_string(),
        SpeakerBand::Silent => label.dimmed().to_string(),
        SpeakerBand::UnderHundred => label.green().to_string(),
        SpeakerBand::Hundreds => label.yellow().to_string(),
        SpeakerBand::Thousands => label.truecolor(255, 165, 0).to_string(),
        SpeakerBand::TensOfThousands => label.red().to_string(),
        SpeakerBand::Large => label.truecolor(139, 0, 0).to_string(),
    }
}

pub fn render_table(batch: &EnrichedBatch) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Language", "Raw", "Category", "Min", "Max", "Confidence", "Plot", "Band",
        ]);

    for record in &batch.records {
        table.add_row(vec![
            record.language.clone().unwrap_or_else(|| "-".to_string()),
            record.raw_text.clone().unwrap_or_default(),
            record
                .category
                .map_or_else(|| "-".to_string(), |c| c.to_string()),
            optional(record.min),
            optional(record.max),
            optional(record.confidence),
            optional(record.plotting_value),
            band_cell(SpeakerBand::of(record)),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Provenance, SpeakerCountRecord};
    use crate::pipeline::enrich;

    fn batch() -> EnrichedBatch {
        enrich(vec![SpeakerCountRecord {
            language: Some("Ainu".to_string()),
            ..SpeakerCountRecord::new(Some("1,500".into()), Provenance::default(), None)
        }])
    }

    #[test]
    fn test_json_writer_emits_records_array() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_batch(&batch()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["category"], "exact");
        assert_eq!(records[0]["tooltip_label"], "1,500");
    }

    #[test]
    fn test_terminal_writer_includes_summary() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_batch(&batch())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Ainu"));
        assert!(text.contains("Enriched 1 record(s)"));
    }
}
