//! Link command - build a WhatsApp or call link for a number.

use clap::Args;

use labeldial_core::links::quick_message;
use labeldial_core::{ActionLink, QUICK_MESSAGES};

use super::load_config;

/// Arguments for the link command.
#[derive(Args)]
pub struct LinkArgs {
    /// Phone number, any formatting
    #[arg(required_unless_present = "list_messages")]
    number: Option<String>,

    /// Build a tel: link instead of a WhatsApp one
    #[arg(long)]
    call: bool,

    /// Message to prefill
    #[arg(short, long, conflicts_with = "quick")]
    message: Option<String>,

    /// Use the Nth quick message (1-based)
    #[arg(short, long)]
    quick: Option<usize>,

    /// List the quick messages and exit
    #[arg(long)]
    list_messages: bool,

    /// Print the link as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: LinkArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    if args.list_messages {
        for (i, message) in QUICK_MESSAGES.iter().enumerate() {
            println!("{}. {}", i + 1, message);
        }
        return Ok(());
    }

    let config = load_config(config_path)?;
    let Some(number) = args.number.as_deref() else {
        anyhow::bail!("A phone number is required");
    };

    let link = if args.call {
        ActionLink::call(number, &config.links)?
    } else {
        let message = match (args.message, args.quick) {
            (Some(message), _) => message,
            (None, Some(index)) => {
                let index = index
                    .checked_sub(1)
                    .ok_or_else(|| anyhow::anyhow!("Quick messages are numbered from 1"))?;
                quick_message(index)?.to_string()
            }
            (None, None) => config.links.default_message.clone(),
        };
        ActionLink::whatsapp(number, &message, &config.links)?
    };

    if args.json {
        println!("{}", serde_json::to_string(&link)?);
    } else {
        println!("{}", link.url);
    }

    Ok(())
}
