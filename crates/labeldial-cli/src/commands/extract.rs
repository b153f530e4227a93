//! Extract command - find mobile numbers in recognized label text.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use labeldial_core::{Candidate, Decision, NumberExtractor};

use super::{load_config, read_input, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file with recognized label text (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the none/single/multiple decision instead of the list
    #[arg(long)]
    decision: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(args.input.as_deref()).await?;

    let extractor = NumberExtractor::from_config(&config.extraction)?;
    let candidates = extractor.extract_all(&text);
    info!("Extracted {} candidate(s)", candidates.len());

    let output = if args.decision {
        format_decision(&Decision::from(candidates), args.format)?
    } else {
        format_candidates(&candidates, args.format)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    Ok(())
}

pub fn format_candidates(candidates: &[Candidate], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(candidates)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["number", "role"])?;
            for candidate in candidates {
                wtr.write_record([candidate.number.as_str(), candidate.role.as_str()])?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => Ok(format_text(candidates)),
    }
}

fn format_decision(decision: &Decision, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(decision)?),
        OutputFormat::Csv => format_candidates(decision.candidates(), format),
        OutputFormat::Text => Ok(match decision {
            Decision::NotFound => "No mobile number found.".to_string(),
            Decision::Single(candidate) => {
                format!("Number detected: {}", candidate.number)
            }
            Decision::Multiple(candidates) => {
                format!("Multiple numbers found:\n{}", format_text(candidates))
            }
        }),
    }
}

fn format_text(candidates: &[Candidate]) -> String {
    let mut output = String::new();
    for (i, candidate) in candidates.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({})\n",
            i + 1,
            candidate.display_number(),
            candidate.role
        ));
    }
    output
}
