use anyhow::Result;
use clap::Parser;
use link_relay::{config, logging, server};

/// URL shortening relay server.
#[derive(Parser)]
#[command(name = "link-relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Log format (`text` or `json`), overrides `LOG_FORMAT`
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env();
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }
    config.validate()?;

    logging::init(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}
