use crate::config::{load_config, load_config_file, ParallelConfig, SpeakermapConfig};
use crate::io::{self, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};
use crate::observability::{set_phase, PipelinePhase};
use crate::pipeline::{EnrichedBatch, RecordPipeline};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Everything `speakermap normalize` was asked to do.
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config_path: Option<PathBuf>,
    pub parallel: bool,
    pub jobs: usize,
    pub verbosity: u8,
}

pub fn handle_normalize(config: NormalizeConfig) -> Result<()> {
    let (pipeline, records) = {
        let _phase = set_phase(PipelinePhase::Loading);
        let settings = load_settings(&config)?;
        let records = io::read_records(&config.input)?;
        info!(records = records.len(), input = %config.input.display(), "Loaded records");
        let pipeline =
            RecordPipeline::new(&settings).with_parallel(parallel_settings(&settings, &config));
        (pipeline, records)
    };

    let batch = pipeline.enrich_batch(records);

    let _phase = set_phase(PipelinePhase::OutputGeneration);
    write_output(&config, &batch)?;

    if config.format == OutputFormat::Json && config.verbosity > 0 {
        eprint!("{}", batch.summary.report());
    }

    Ok(())
}

fn load_settings(config: &NormalizeConfig) -> Result<SpeakermapConfig> {
    match &config.config_path {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Command-line flags override the `[parallel]` section.
fn parallel_settings(settings: &SpeakermapConfig, config: &NormalizeConfig) -> ParallelConfig {
    let base = settings.parallel_config();
    ParallelConfig {
        enabled: base.enabled && config.parallel,
        max_concurrency: if config.jobs > 0 {
            Some(config.jobs)
        } else {
            base.max_concurrency
        },
        ..base
    }
}

fn write_output(config: &NormalizeConfig, batch: &EnrichedBatch) -> Result<()> {
    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_batch(config.format, BufWriter::new(file), batch)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!(output = %path.display(), "Wrote enriched records");
        }
        None => write_batch(config.format, std::io::stdout().lock(), batch)?,
    }
    Ok(())
}

/// Write the batch and flush, so a failed final write is reported.
fn write_batch<W: Write>(format: OutputFormat, mut writer: W, batch: &EnrichedBatch) -> Result<()> {
    match format {
        OutputFormat::Json => JsonWriter::new(&mut writer).write_batch(batch)?,
        OutputFormat::Terminal => TerminalWriter::new(&mut writer).write_batch(batch)?,
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_config(parallel: bool, jobs: usize) -> NormalizeConfig {
        NormalizeConfig {
            input: PathBuf::from("records.json"),
            output: None,
            format: OutputFormat::Json,
            config_path: None,
            parallel,
            jobs,
            verbosity: 0,
        }
    }

    /// Accepts writes but fails when flushed.
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    fn empty_batch() -> EnrichedBatch {
        RecordPipeline::new(&SpeakermapConfig::default()).enrich_batch(Vec::new())
    }

    #[test]
    fn test_write_batch_reports_flush_failure() {
        let err = write_batch(OutputFormat::Json, FailingFlush(Vec::new()), &empty_batch())
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to flush output"));
    }

    #[test]
    fn test_write_batch_flushes_buffered_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        let file = File::create(&path).unwrap();
        write_batch(OutputFormat::Json, BufWriter::new(file), &empty_batch()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn test_no_parallel_flag_disables_pool() {
        let settings = SpeakermapConfig::default();
        let parallel = parallel_settings(&settings, &normalize_config(false, 0));
        assert!(!parallel.enabled);
    }

    #[test]
    fn test_jobs_flag_overrides_config() {
        let settings = SpeakermapConfig {
            parallel: Some(ParallelConfig {
                max_concurrency: Some(2),
                ..ParallelConfig::default()
            }),
            ..SpeakermapConfig::default()
        };
        assert_eq!(
            parallel_settings(&settings, &normalize_config(true, 8)).max_concurrency,
            Some(8)
        );
        assert_eq!(
            parallel_settings(&settings, &normalize_config(true, 0)).max_concurrency,
            Some(2)
        );
    }
}
