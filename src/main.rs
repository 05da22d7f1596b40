//! humanize-proxy: HTTP proxy for rewriting AI-generated text
//!
//! A small axum service that accepts `{ "inputText": ... }`, forwards it to
//! the OpenAI chat-completions API under a fixed humanizer instruction, and
//! returns `{ "humanizedText": ... }` or a normalized error to the browser
//! client.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use humanize_proxy::{config::API_KEY_ENV, run_server, AppConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
#[command(name = "humanize-proxy")]
#[command(version = "0.1.0")]
#[command(about = "HTTP proxy that rewrites AI-generated text via the OpenAI API")]
#[command(long_about = "
humanize-proxy fronts the OpenAI chat-completions API with a single endpoint
for browser clients:
  - POST { \"inputText\": ... } from any origin, any path
  - fixed humanizer instruction, temperature 0.8, max 2000 output tokens
  - normalized success/error JSON, credential kept server-side

Example usage:
  OPENAI_API_KEY=sk-... humanize-proxy run
  humanize-proxy run --config config.yaml --port 8090
  humanize-proxy check-config --config config.yaml
")]
struct Cli {
    /// Path to config file (built-in defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the proxy server
    Run {
        /// Override listen port
        #[arg(short, long)]
        port: Option<u16>,
        /// Override upstream base URL (e.g., "https://api.openai.com")
        #[arg(long)]
        upstream_url: Option<String>,
    },

    /// Validate configuration and print the effective settings
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level_filter = if let Some(level) = cli.log_level {
        level.to_string()
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            .to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&level_filter))
        .init();

    match cli.command {
        Commands::Run { port, upstream_url } => {
            run_proxy(cli.config, port, upstream_url).await?;
        }
        Commands::CheckConfig => {
            check_config(cli.config.as_deref());
        }
    }

    Ok(())
}

/// Run the proxy server
async fn run_proxy(
    config_path: Option<PathBuf>,
    port_override: Option<u16>,
    upstream_url_override: Option<String>,
) -> anyhow::Result<()> {
    let mut config = load_config_or_exit(config_path.as_deref());

    // Apply CLI overrides
    if let Some(port) = port_override {
        config.server.port = port;
    }
    if let Some(url) = upstream_url_override {
        config.upstream.url = url;
    }

    if config.upstream.resolve_api_key().is_none() {
        tracing::warn!(
            "No API key in config or {}; humanize requests will fail until one is set",
            API_KEY_ENV
        );
    }

    run_server(config).await
}

/// Validate configuration file and print the effective settings
fn check_config(config_path: Option<&std::path::Path>) {
    match AppConfig::load_or_default(config_path) {
        Ok(config) => {
            println!("✓ Configuration is valid\n");
            println!("Server:");
            println!("  Listen: {}:{}", config.server.host, config.server.port);
            println!("\nUpstream:");
            println!("  URL: {}", config.upstream.base_url());
            println!(
                "  TLS: {}",
                if config.upstream.is_tls() { "enabled" } else { "disabled" }
            );
            println!("  Timeout: {}s", config.upstream.timeout_seconds);
            let key_source = if config.upstream.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
                "from config file"
            } else if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.is_empty()) {
                "from environment"
            } else {
                "NOT CONFIGURED"
            };
            println!("  API key: {}", key_source);
        }
        Err(e) => {
            eprintln!("✗ Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load configuration or exit with error
fn load_config_or_exit(config_path: Option<&std::path::Path>) -> AppConfig {
    match AppConfig::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            eprintln!("\nPass --config <file> or place a config.yaml next to the binary.");
            eprintln!("You can copy config.yaml.default and modify it:");
            eprintln!("  cp config.yaml.default config.yaml");
            std::process::exit(1);
        }
    }
}
