use clap::Parser;
use link_gossip::config::Cli;
use link_gossip::node::Node;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = cli.into_config();
    tracing::info!("Starting node on {}", config.http_addr);
    if !config.seed_peers.is_empty() {
        tracing::info!("Seed peers: {:?}", config.seed_peers);
    }

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    let node = Node::new(config).await?;

    tracing::info!("Press Ctrl+C to shutdown");
    node.serve(listener, shutdown_signal()).await?;

    tracing::info!("Node stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
