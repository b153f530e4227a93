//! Scan command - recognize a label and choose the number to contact.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::debug;

use labeldial_core::error::{RecognitionError, SelectionError};
use labeldial_core::{Candidate, LabelScanner, NumberExtractor, ScanOutcome, Selector, TextRecognizer};

use super::load_config;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Label image with a `.txt` recognizer dump beside it, or the dump itself
    #[arg(required = true)]
    input: PathBuf,

    /// Pick the Nth listed number (1-based) instead of asking
    #[arg(long)]
    pick: Option<usize>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "heic", "tiff", "bmp"];

/// Reads recognizer output saved as text next to the label image.
pub struct TextDumpRecognizer;

impl TextDumpRecognizer {
    fn dump_path(image: &Path) -> PathBuf {
        let extension = image
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            image.with_extension("txt")
        } else {
            image.to_path_buf()
        }
    }
}

impl TextRecognizer for TextDumpRecognizer {
    fn recognize(&self, image: &Path) -> Result<String, RecognitionError> {
        let path = Self::dump_path(image);
        debug!("Reading recognized text from {}", path.display());
        let bytes = std::fs::read(&path)
            .map_err(|e| RecognitionError::Engine(format!("{}: {}", path.display(), e)))?;
        String::from_utf8(bytes)
            .map_err(|_| RecognitionError::UnsupportedImage(path.display().to_string()))
    }
}

/// Asks on the terminal which number to use.
pub struct TerminalSelector;

impl Selector for TerminalSelector {
    fn select(&self, candidates: &[Candidate]) -> Result<Option<Candidate>, SelectionError> {
        let mut err = io::stderr();
        let aborted = |e: io::Error| SelectionError::Aborted(e.to_string());

        writeln!(err, "{}", style("Numbers found").bold()).map_err(aborted)?;
        writeln!(err, "Select the recipient's number:").map_err(aborted)?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(
                err,
                "  {}) {}  {}",
                i + 1,
                candidate.display_number(),
                style(candidate.role).dim()
            )
            .map_err(aborted)?;
        }
        write!(err, "Choice [1-{}, empty to cancel]: ", candidates.len()).map_err(aborted)?;
        err.flush().map_err(aborted)?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).map_err(aborted)?;
        let line = line.trim();
        if line.is_empty() || line == "0" {
            return Ok(None);
        }

        let index: usize = line
            .parse()
            .map_err(|_| SelectionError::Aborted(format!("not a number: {}", line)))?;
        pick(candidates, index)
    }
}

/// Picks a fixed 1-based position.
pub struct IndexSelector(pub usize);

impl Selector for IndexSelector {
    fn select(&self, candidates: &[Candidate]) -> Result<Option<Candidate>, SelectionError> {
        pick(candidates, self.0)
    }
}

fn pick(candidates: &[Candidate], index: usize) -> Result<Option<Candidate>, SelectionError> {
    index
        .checked_sub(1)
        .and_then(|i| candidates.get(i))
        .cloned()
        .map(Some)
        .ok_or_else(|| SelectionError::Aborted(format!("no number at position {}", index)))
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let extractor = NumberExtractor::from_config(&config.extraction)?;

    let outcome = match args.pick {
        Some(index) => LabelScanner::new(TextDumpRecognizer, IndexSelector(index))
            .with_extractor(extractor)
            .scan(&args.input)?,
        None => LabelScanner::new(TextDumpRecognizer, TerminalSelector)
            .with_extractor(extractor)
            .scan(&args.input)?,
    };

    if args.json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }

    match &outcome {
        ScanOutcome::NotFound => {
            println!(
                "{} No Italian mobile number (starting with 3) found. Frame the label better.",
                style("✗").red()
            );
        }
        ScanOutcome::Detected(candidate) => {
            println!("{} Number detected: {}", style("✓").green(), candidate.number);
        }
        ScanOutcome::Selected(candidate) => {
            println!("{} Number selected: {}", style("✓").green(), candidate.number);
        }
        ScanOutcome::Dismissed => {
            println!("{} Selection cancelled.", style("ℹ").blue());
        }
    }

    Ok(())
}
