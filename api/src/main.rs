use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use typetrial_api::create_router;
use typetrial_core::QuoteStore;

/// JSON HTTP API over the quote store.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the quotes JSON file.
    #[arg(long, default_value = "quotes.json")]
    quotes: PathBuf,

    /// Socket address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let store = QuoteStore::load(&cli.quotes)
        .with_context(|| format!("could not load quotes from {}", cli.quotes.display()))?;
    info!("loaded {} quotes from {}", store.len(), cli.quotes.display());

    let router = create_router(Arc::new(Mutex::new(store)));
    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
