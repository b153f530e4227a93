//! Batch command - extract numbers from many label text dumps.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use serde::Serialize;
use tracing::{debug, error, warn};

use labeldial_core::{Decision, NumberExtractor};

use super::{load_config, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of text dumps (e.g. "labels/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
#[derive(Serialize)]
struct FileResult {
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let extractor = NumberExtractor::from_config(&config.extraction)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.input);
    }
    debug!("Processing {} files", files.len());

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                let decision = extractor.decide(&text);
                if !decision.is_found() {
                    warn!("No mobile number in {}", path.display());
                }
                results.push(FileResult {
                    path,
                    decision: Some(decision),
                    error: None,
                });
            }
            Err(e) if args.continue_on_error => {
                error!("Failed to read {}: {}", path.display(), e);
                results.push(FileResult {
                    path,
                    decision: None,
                    error: Some(e.to_string()),
                });
            }
            Err(e) => anyhow::bail!("Failed to read {}: {}", path.display(), e),
        }
    }

    let output = format_results(&results, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} {} files processed in {:?}, output written to {}",
            style("✓").green(),
            results.len(),
            start.elapsed(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    Ok(())
}

fn format_results(results: &[FileResult], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["file", "number", "role", "error"])?;
            for result in results {
                let file = result.path.display().to_string();
                let candidates = result
                    .decision
                    .as_ref()
                    .map(Decision::candidates)
                    .unwrap_or_default();
                if candidates.is_empty() {
                    wtr.write_record([file.as_str(), "", "", result.error.as_deref().unwrap_or("")])?;
                }
                for candidate in candidates {
                    wtr.write_record([file.as_str(), candidate.number.as_str(), candidate.role.as_str(), ""])?;
                }
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for result in results {
                output.push_str(&format!("{}: ", result.path.display()));
                match (&result.decision, &result.error) {
                    (Some(decision), _) if decision.is_found() => {
                        let numbers: Vec<_> = decision
                            .candidates()
                            .iter()
                            .map(|c| format!("{} ({})", c.number, c.role))
                            .collect();
                        output.push_str(&numbers.join(", "));
                    }
                    (_, Some(error)) => output.push_str(&format!("error: {}", error)),
                    _ => output.push_str("no number"),
                }
                output.push('\n');
            }
            Ok(output)
        }
    }
}
