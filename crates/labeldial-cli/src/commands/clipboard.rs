//! Clipboard command - detect a phone number in copied text.

use clap::Args;

use labeldial_core::clipboard_number;

use super::{load_config, read_input};

/// Arguments for the clipboard command.
#[derive(Args)]
pub struct ClipboardArgs {
    /// Copied text (default: read stdin)
    text: Option<String>,
}

pub async fn run(args: ClipboardArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = match args.text {
        Some(text) => text,
        None => read_input(None).await?,
    };

    match clipboard_number(&text, &config.clipboard) {
        Some(number) => println!("{}", number),
        None => anyhow::bail!("No phone number in the copied text"),
    }

    Ok(())
}
