//! # LinkTracer
//!
//! Command-line entry point: analyze one domain and compare it to a target.

mod bootstrap;
mod output;

use clap::Parser;
use linktracer_domain::CliOverrides;
use linktracer_infrastructure::dns::AnalyzerBuilder;
use std::time::Duration;
use tracing::debug;

use bootstrap::{init_logging, load_config};

/// Upper bound on one whole analysis, independent of the per-exchange timeout.
const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(name = "linktracer")]
#[command(version)]
#[command(about = "Collect DNS records for a domain and score how closely it resembles another")]
struct Cli {
    /// Domain to analyze
    domain: String,

    /// Domain to compare against
    target_domain: String,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Per-exchange timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Nameserver as host:port, repeatable; replaces the configured list
    #[arg(short = 'n', long = "nameserver", value_name = "HOST:PORT")]
    nameservers: Vec<String>,

    /// Disable the analysis cache
    #[arg(long)]
    no_cache: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| cli.verbose.then(|| "debug".to_string()));

    let overrides = CliOverrides {
        name_servers: cli.nameservers.clone(),
        timeout_ms: cli.timeout_ms,
        no_cache: cli.no_cache,
        log_level,
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    let analyzer = AnalyzerBuilder::new()
        .with_config(config.analyzer)
        .build();

    debug!(domain = %cli.domain, target = %cli.target_domain, "Starting analysis");

    let result = match analyzer
        .execute_with_timeout(&cli.domain, &cli.target_domain, ANALYSIS_TIMEOUT)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            println!("Error analyzing domain: {}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", output::render_json(&result)?);
    } else {
        print!(
            "{}",
            output::render_human(&cli.domain, &cli.target_domain, &result)
        );
    }

    Ok(())
}
