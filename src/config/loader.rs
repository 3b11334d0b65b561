use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SpeakermapConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".speakermap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Validation result for each section present in the config
fn section_validations(config: &SpeakermapConfig) -> Vec<(&'static str, std::result::Result<(), String>)> {
    let mut validations = Vec::new();
    if let Some(weights) = &config.confidence {
        validations.push(("confidence", weights.validate()));
    }
    if let Some(classifier) = &config.classifier {
        validations.push(("classifier", classifier.validate()));
    }
    if let Some(plotting) = &config.plotting {
        validations.push(("plotting", plotting.validate()));
    }
    validations
}

/// Pure function to parse and validate config from TOML string
///
/// A section that fails validation is replaced by its defaults rather than
/// rejecting the whole file.
pub fn parse_and_validate_config(contents: &str) -> Result<SpeakermapConfig> {
    let mut config = toml::from_str::<SpeakermapConfig>(contents)?;

    let invalid: Vec<_> = section_validations(&config)
        .into_iter()
        .filter_map(|(section, result)| result.err().map(|e| (section, e)))
        .collect();

    for (section, e) in invalid {
        log::warn!("Invalid [{}] config: {}. Using defaults.", section, e);
        match section {
            "confidence" => config.confidence = None,
            "classifier" => config.classifier = None,
            _ => config.plotting = None,
        }
    }

    Ok(config)
}

/// Parse a config and reject it if any section fails validation.
pub fn parse_config_strict(contents: &str) -> Result<SpeakermapConfig> {
    let config = toml::from_str::<SpeakermapConfig>(contents)?;
    for (section, result) in section_validations(&config) {
        result.map_err(|e| Error::Validation(format!("[{}] {}", section, e)))?;
    }
    Ok(config)
}

/// Load an explicitly named config file. Unlike discovery, a missing,
/// malformed or invalid file is an error.
pub fn load_config_file(path: &Path) -> Result<SpeakermapConfig> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: format!("Failed to read config file: {}", e),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    parse_config_strict(&contents)
}

/// Try loading config from a specific path, logging instead of failing
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SpeakermapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> SpeakermapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SpeakermapConfig::default()
        })
}

pub fn load_config() -> SpeakermapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SpeakermapConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [confidence.source_category]
            secondary = 0.8

            [classifier]
            year_min = 1800

            [plotting]
            extinct_offset = 0.25

            [parallel]
            enabled = false
        "#})
        .unwrap();

        assert_eq!(config.confidence_weights().source_category.secondary, 0.8);
        assert_eq!(config.classifier_config().year_min, 1800);
        assert_eq!(config.classifier_config().year_max, 2100);
        assert_eq!(config.plotting_config().extinct_offset, 0.25);
        assert!(!config.parallel_config().enabled);
    }

    #[test]
    fn test_invalid_section_falls_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [confidence.access_route]
            direct = 2.0
        "#})
        .unwrap();
        assert!(config.confidence.is_none());
        assert_eq!(config.confidence_weights().access_route.direct, 1.0);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let result = parse_and_validate_config("[classifier\nyear_min = ");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_strict_parse_rejects_invalid_section() {
        let result = parse_config_strict(indoc! {r#"
            [confidence.access_route]
            direct = 2.0
        "#});
        match result {
            Err(Error::Validation(message)) => assert!(message.starts_with("[confidence]")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_explicit_file_with_invalid_section_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[classifier]\nyear_min = 2100\nyear_max = 1500\n").unwrap();
        assert!(matches!(load_config_file(&path), Err(Error::Validation(_))));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_from_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("data").join("raw");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[plotting]\nempty_corpus_min = 10.0\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.plotting_config().empty_corpus_min, 10.0);
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::FileSystem { .. })));
    }
}
