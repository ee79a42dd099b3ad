//! waopen - open a WhatsApp chat from the command line
//!
//! Normalizes a phone number (or the one on the clipboard) and hands the
//! `wa.me` deep link to the platform.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use waopen::clipboard::{check_clipboard, SystemClipboard};
use waopen::config::Config;
use waopen::core::PhoneNormalizer;
use waopen::launcher::{self, dry_run::DryRunOpener, DeepLinkOpener};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Phone number; numbers without a leading '+' get the country code
    number: Option<String>,

    /// Take the number from the clipboard
    #[arg(short, long, conflicts_with = "number")]
    clipboard: bool,

    /// Country calling code for numbers without '+' (e.g. +44)
    #[arg(long, value_name = "CODE")]
    country_code: Option<String>,

    /// Print the link instead of opening it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("waopen v{} starting", env!("CARGO_PKG_VERSION"));

    let normalizer = match args.country_code.as_deref() {
        Some(code) => PhoneNormalizer::new(code)?,
        None => config.normalizer().context("invalid country_code in config")?,
    };

    let launcher = if args.dry_run {
        DeepLinkOpener::new(config.link_base.clone(), Arc::new(DryRunOpener::new()))
    } else {
        launcher::create_launcher(&config)?
    };

    let raw = match (args.number, args.clipboard) {
        (Some(number), _) => number,
        (None, true) => match check_clipboard(&SystemClipboard::new(), &config.detector()) {
            Some(number) => number,
            None => bail!("clipboard does not contain a phone number"),
        },
        (None, false) => bail!("no phone number given (pass NUMBER or --clipboard)"),
    };

    let normalized = normalizer.normalize(&raw);
    info!("📞 Parsed number is: {}", normalized);

    let launched = launcher.open(&normalized)?;
    println!("{}", launched.url);
    Ok(())
}
