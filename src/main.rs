use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use url_shortener::config::{Config, default_base_url};
use url_shortener::server;

/// In-memory URL shortener service.
#[derive(Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on (overrides the port of LISTEN)
    #[arg(short, long)]
    port: Option<u16>,

    /// Public base URL of short links (overrides BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Disable logging
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    apply_cli(&mut config, cli);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn apply_cli(config: &mut Config, cli: Cli) {
    if let Some(port) = cli.port {
        let host = config
            .listen_addr
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        config.listen_addr = format!("{}:{}", host, port);

        if std::env::var("BASE_URL").is_err() {
            config.base_url = default_base_url(&config.listen_addr);
        }
    }

    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    if cli.quiet {
        config.log_enabled = false;
    }
}

fn init_tracing(config: &Config) {
    if !config.log_enabled {
        return;
    }

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
