use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod client;
mod config;
mod errors;
mod models;
mod reconciler;

use models::ReconcileRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the structured result.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "token_sync=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = config::load();
    let args = cli::Cli::parse();

    let request = ReconcileRequest {
        api_url: args.api_url,
        auth_token: args.auth_token,
        name: args.name,
        endpoints: args.endpoints,
        skip_unchanged: args.skip_unchanged,
    };

    let outcome = reconciler::reconcile(&request, cfg.request_timeout).await?;

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
