use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Speakermap Configuration

# Weight of each provenance axis value. All weights must be in [0.0, 1.0].
[confidence.source_category]
primary = 1.0
secondary = 0.75
tertiary = 0.5

[confidence.source_type]
expert_curated = 1.0
community_curated = 0.75

[confidence.access_route]
direct = 1.0
indirect = 0.5

[confidence.number_category]
exact = 1.0
estimate = 0.75
range = 0.5
qualitative_estimate = 0.25
qualitative_range = 0.25

[classifier]
# A trailing 4-digit number inside this window is read as a census year
year_min = 1500
year_max = 2100

[plotting]
# Extinct and dormant languages plot at (corpus minimum - extinct_offset)
extinct_offset = 0.5
empty_corpus_min = 1.0
# Keep sentinels positive when a "<N" record pulls the minimum to 0
# sentinel_floor = 0.1

[parallel]
enabled = true
# max_concurrency = 4
min_parallel_batch = 256
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

/// Write the default configuration into `dir`, returning the file path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
