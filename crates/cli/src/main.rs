use anyhow::Context;
use clap::Parser;
use dohgate_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dohgate")]
#[command(version)]
#[command(about = "dohgate - DNS-over-HTTPS lookup gateway across public resolvers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dohgate v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        "Configuration loaded"
    );

    let services = di::Services::new(&config)?;
    info!(
        resolvers = ?services.registry.names(),
        default_resolver = %services.default_resolver,
        timeout_ms = config.doh.timeout_ms,
        "Resolver registry ready"
    );

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.bind_address, config.server.web_port
            )
        })?;

    server::start_web_server(web_addr, services.into_app_state()).await?;

    info!("Server shutdown complete");
    Ok(())
}
