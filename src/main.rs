use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canon_resolver::{
    config::Config,
    fuzzy::InMemoryFuzzyIndex,
    index_loader,
    parser::NameParser,
    services::ResolverService,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "canon-resolver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recursive scientific name resolver service")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Path to a TSV canonical-name index file (see index_loader for the
    /// format); falls back to a small coded demo fixture when omitted.
    #[arg(short = 'n', long, value_name = "PATH")]
    names_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("canon_resolver={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting canon-resolver service v{}", env!("CARGO_PKG_VERSION"));

    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    let canonical_index = match &cli.names_file {
        Some(path) => index_loader::load_tsv(path)?,
        None => index_loader::demo_fixture(),
    };
    info!(terms = canonical_index.len(), "canonical index loaded");

    let fuzzy_index = InMemoryFuzzyIndex::new(
        canonical_index
            .terms()
            .map(|t| (t.to_string(), canonical_index.lookup(t)))
            .collect::<Vec<_>>(),
        config.resolver.max_edit_distance,
        config.resolver.max_candidates,
    );

    let resolver_service = ResolverService::new(
        canonical_index,
        Arc::new(fuzzy_index),
        NameParser::new(),
        config.resolver.clone(),
    );

    let web_server = WebServer::new(&config, resolver_service)?;
    info!("Starting web server on {}:{}", web_server.host(), web_server.port());
    web_server.serve().await?;

    Ok(())
}
