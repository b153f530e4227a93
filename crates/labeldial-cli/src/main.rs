//! CLI for reading courier shipping labels.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, clipboard, config, extract, link, scan};

/// labeldial - Find the recipient's mobile number on a shipping label
#[derive(Parser)]
#[command(name = "labeldial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract mobile numbers from recognized label text
    Extract(extract::ExtractArgs),

    /// Scan a label and choose the number to contact
    Scan(scan::ScanArgs),

    /// Extract numbers from many label text dumps
    Batch(batch::BatchArgs),

    /// Detect a phone number in copied text
    Clipboard(clipboard::ClipboardArgs),

    /// Build a WhatsApp or call link for a number
    Link(link::LinkArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Extract(args) => extract::run(args, config_path).await,
        Commands::Scan(args) => scan::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Clipboard(args) => clipboard::run(args, config_path).await,
        Commands::Link(args) => link::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
