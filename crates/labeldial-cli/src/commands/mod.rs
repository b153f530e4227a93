//! CLI subcommands.

pub mod batch;
pub mod clipboard;
pub mod config;
pub mod extract;
pub mod link;
pub mod scan;

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;
use tracing::debug;

use labeldial_core::LabelDialConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("labeldial")
        .join("config.json")
}

/// Load the configuration named by `--config`, else the default file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LabelDialConfig> {
    if let Some(path) = config_path {
        return Ok(LabelDialConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config {}", path.display());
        Ok(LabelDialConfig::from_file(&path)?)
    } else {
        Ok(LabelDialConfig::default())
    }
}

/// Read text from a file, or from stdin when the input is absent or `-`.
pub async fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}
