use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use rpcprovider::cli::Cli;
use rpcprovider::config::{Config, LoggingConfig};
use rpcprovider::provider::RpcProvider;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from file and environment, then apply CLI flags
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env()?;
            config
        }
        None => Config::load()?,
    };
    config.merge(cli.overrides());
    config.validate()?;

    init_logging(&config.logging, config.provider.verbose);

    if let Some(input) = &cli.input {
        debug!("input file: {}", input.display());
    }

    let verbose = config.provider.verbose;
    let mut provider = RpcProvider::new(config.provider);

    if verbose {
        println!("Starting RPCProvider processing...");
    }

    let result = provider.execute().await;
    debug!("result envelope: {}", serde_json::to_string(&result)?);

    if !result.success {
        anyhow::bail!(result.message);
    }

    if verbose {
        println!("{}", result.message);
    }

    // The output path is only reported; no file is written.
    if let Some(output) = &cli.output {
        println!("Results saved to: {}", output.display());
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        logging.level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Status lines for the user go to stdout; diagnostics stay on stderr.
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if logging.format == "json" {
        let _ = subscriber.json().try_init();
    } else {
        let _ = subscriber.try_init();
    }
}
