//! Configuration loading functionality
//!
//! This module contains functions for loading configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde::Deserialize;
use serde_yaml::from_str;

use crate::errors::config_parsing_error;
use crate::utils::expand_path;

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the YAML configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid YAML
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config: Config = from_str(&content_str).map_err(|e| {
        config_parsing_error(
            e,
            &format!("{} is not a valid rename configuration", file.display()),
        )
    })?;

    debug!("Loaded configuration from {}", file.display());
    Ok(config)
}

/// Deserializes an optional path, expanding a leading `~`
pub fn deserialize_optional_path<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let path: Option<String> = Option::deserialize(deserializer)?;
    Ok(path.map(|p| expand_path(&p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_with_aliases() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("rename.yaml");
        fs::write(
            &config_path,
            r#"
inpDir: /data/in
outDir: /data/out
filePattern: "img_x{row:dd}_{channel:c+}.tif"
outFilePattern: "x{row:ddd}_c{channel:dd}.tif"
"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.inp_dir, Some(PathBuf::from("/data/in")));
        assert_eq!(config.out_dir, Some(PathBuf::from("/data/out")));
        assert_eq!(
            config.out_file_pattern.as_deref(),
            Some("x{row:ddd}_c{channel:dd}.tif")
        );
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("rename.yaml");
        fs::write(&config_path, "file_pattern: \"{t:d+}.tif\"\n").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.file_pattern.as_deref(), Some("{t:d+}.tif"));
        assert_eq!(config.inp_dir, None);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("rename.yaml");
        fs::write(&config_path, "inp_dir: [unclosed\n").unwrap();

        let error = load_config(&config_path).unwrap_err();
        assert!(error.to_string().contains("is not a valid rename configuration"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config(Path::new("/definitely/not/here.yaml"));
        assert!(result.is_err());
    }
}
