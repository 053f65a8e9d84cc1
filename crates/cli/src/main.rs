use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use zonedns_domain::CliOverrides;
use zonedns_infrastructure::dns::server::DnsServerHandler;
use zonedns_jobs::{CacheSweepJob, JobRunner};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "zonedns")]
#[command(version)]
#[command(about = "zonedns - authoritative DNS server for statically configured zones")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable the answer cache for every zone
    #[arg(long)]
    no_cache: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        no_cache: cli.no_cache,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting zonedns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let shutdown = CancellationToken::new();

    let mut runner = JobRunner::new().with_shutdown_token(shutdown.clone());
    for (origin, maintenance) in dns_services.cache_maintenance {
        runner = runner.with_cache_sweep(
            CacheSweepJob::new(origin, maintenance)
                .with_interval_secs(config.cache.sweep_interval_secs),
        );
    }
    runner.start().await;

    let handler = DnsServerHandler::new(Arc::clone(&dns_services.handler_use_case));
    server::start_dns_server(
        config.server.listen_address(),
        handler,
        Duration::from_secs(config.server.tcp_timeout_secs),
        shutdown,
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
