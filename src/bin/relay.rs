//! Command-line client for the link relay.
//!
//! Runs the same provider chain and resolver as the HTTP server, in-process,
//! without starting a listener.
//!
//! # Usage
//!
//! ```bash
//! # Shorten with a preferred provider
//! cargo run --bin relay -- shorten https://example.com --service tinyurl
//!
//! # Shorten interactively (prompts for the URL)
//! cargo run --bin relay -- shorten --link-type server
//!
//! # Resolve a short link
//! cargo run --bin relay -- unshorten https://is.gd/abc123
//!
//! # List selectable providers
//! cargo run --bin relay -- providers
//! ```
//!
//! # Environment Variables
//!
//! Reads the same `UPSTREAM_*`, `DEMO_DOMAIN` and `UNSHORTEN_API_URL`
//! variables as the server.

use link_relay::config::load_from_env;
use link_relay::{AppState, logging};
use link_relay::domain::entities::LinkType;
use link_relay::domain::providers::SELECTABLE_PROVIDERS;
use link_relay::utils::concealed_link::concealed_link;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Input;

/// CLI client for link-relay.
#[derive(Parser)]
#[command(name = "relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL through the provider chain
    Shorten {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,

        /// Preferred provider id
        #[arg(short, long, default_value = "is.gd")]
        service: String,

        /// Concealed link style
        #[arg(short, long, value_enum)]
        link_type: Option<LinkTypeArg>,
    },

    /// Resolve a short URL to its target
    Unshorten {
        /// Short URL (prompted for if omitted)
        url: Option<String>,
    },

    /// List selectable providers
    Providers,
}

#[derive(Clone, Copy, ValueEnum)]
enum LinkTypeArg {
    Profile,
    Server,
    Group,
}

impl From<LinkTypeArg> for LinkType {
    fn from(arg: LinkTypeArg) -> Self {
        match arg {
            LinkTypeArg::Profile => LinkType::Profile,
            LinkTypeArg::Server => LinkType::Server,
            LinkTypeArg::Group => LinkType::Group,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env()?;
    logging::init("warn", &config.log_format);

    let state = AppState::from_config(&config).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Shorten {
            url,
            service,
            link_type,
        } => shorten(&state, url, &service, link_type.map(LinkType::from)).await?,
        Commands::Unshorten { url } => unshorten(&state, url).await?,
        Commands::Providers => list_providers(&state),
    }

    Ok(())
}

fn url_or_prompt(url: Option<String>, prompt: &str) -> Result<String> {
    match url {
        Some(url) => Ok(url),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

async fn shorten(
    state: &AppState,
    url: Option<String>,
    service: &str,
    link_type: Option<LinkType>,
) -> Result<()> {
    let url = url_or_prompt(url, "URL to shorten")?;

    println!("{}", "🔗 Shortening".bright_blue().bold());
    println!();

    let outcome = state
        .shorten_service
        .shorten(&url, service, link_type)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Original: {}", outcome.original_url.cyan());
    println!("  Short:    {}", outcome.shortened_url.bright_yellow().bold());
    println!("  Service:  {}", outcome.service);
    if let Some(link_type) = outcome.link_type {
        println!(
            "  Concealed: {}",
            concealed_link(Some(link_type), &url, &outcome.shortened_url)
        );
    }
    println!();

    if outcome.is_demo {
        println!(
            "{}",
            "⚠️  All providers failed, this is a demo link".yellow()
        );
    } else {
        println!("{}", "✅ Done".green().bold());
    }

    Ok(())
}

async fn unshorten(state: &AppState, url: Option<String>) -> Result<()> {
    let url = url_or_prompt(url, "Short URL")?;

    println!("{}", "🔍 Resolving".bright_blue().bold());
    println!();

    let outcome = state.unshorten_service.unshorten(&url).await;

    println!("  Short:    {}", outcome.shortened_url.cyan());
    println!("  Original: {}", outcome.original_url.bright_yellow().bold());
    println!();

    match outcome.note {
        Some(note) => println!("{} {}", "⚠️ ".yellow(), note.yellow()),
        None => println!("{}", "✅ Done".green().bold()),
    }

    Ok(())
}

fn list_providers(state: &AppState) {
    println!("{}", "📋 Providers".bright_blue().bold());
    println!();
    println!("  {:<12} {:<12} {}", "ID", "Name", "Description");
    println!("  {}", "─".repeat(60));

    for info in SELECTABLE_PROVIDERS
        .iter()
        .filter(|info| state.shorten_service.catalog().contains(info.id))
    {
        let id = if info.recommended {
            info.id.green().bold()
        } else {
            info.id.normal()
        };
        println!("  {:<12} {:<12} {}", id, info.name, info.description.dimmed());
    }

    println!();
}
