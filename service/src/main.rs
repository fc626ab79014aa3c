#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use congress_gateway_api::{
    config::Config,
    congress::{HttpUpstreamClient, RequestExecutor},
    gateway::Gateway,
    http,
};

#[derive(Debug, Parser)]
#[command(name = "congress-gateway-api", about = "Identifier gateway for congress.gov")]
struct Args {
    /// Path to a YAML configuration file (defaults to ./config.yaml).
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // Load and validate configuration first (fail-fast)
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    // Set up logging from config
    std::env::set_var("RUST_LOG", &config.logging.level);
    tracing_subscriber::fmt::init();

    // Init banner so container logs clearly show startup
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        upstream = %config.upstream.base_url,
        "congress-gateway-api starting up"
    );

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream.timeout_secs))
        .build()?;
    let client = Arc::new(HttpUpstreamClient::with_client(
        http_client,
        config.upstream.base_url.clone(),
        config.upstream.api_key.clone(),
    ));

    let executor = RequestExecutor::new(
        client,
        config.upstream.max_requests,
        Duration::from_secs(config.upstream.window_hours * 3600),
    );
    let gateway = Arc::new(Gateway::new(executor));

    tracing::info!(
        max_requests = config.upstream.max_requests,
        window_hours = config.upstream.window_hours,
        "admission budget configured"
    );

    let app = http::router(gateway);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Starting server at http://{addr}/v1/resolve");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
