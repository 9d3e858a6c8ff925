use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

use kvbench::config::Config;
use kvbench::{report, transport};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("kvbench=debug,info")
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            Config::from_file(&path).with_context(|| format!("loading config {}", path))?
        }
        None => Config::default(),
    };

    let addr = config.target_addr();
    info!(
        "Benchmarking {}: concurrency {}, {} requests per command",
        addr, config.run.concurrency, config.run.requests_per_command
    );

    let timeout = Duration::from_secs(config.run.connect_timeout_seconds);
    transport::probe(&addr, timeout)
        .await
        .with_context(|| format!("target {} is unreachable", addr))?;

    let report = report::run_suite(&config).await;
    println!("\n{}", report.render());

    Ok(())
}
