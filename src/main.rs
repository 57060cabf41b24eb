//! `channel-auth`: authorize one pub/sub channel from the command line.
//!
//! ```text
//! channel-auth --config auth.toml private-chat 123.456
//! channel-auth --endpoint http://localhost:8000/broadcasting/auth \
//!     -H "Authorization=Bearer abc" private-chat 123.456
//! ```
//!
//! Prints the auth payload to stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use channel_authorizer::config::validation::validate_config;
use channel_authorizer::config::{load_config, AuthorizerConfig, ConfigError};
use channel_authorizer::observability::logging;
use channel_authorizer::{Authorizer, ChannelAuthorizer};

#[derive(Parser)]
#[command(name = "channel-auth")]
#[command(about = "Authorize a private or presence channel against an auth endpoint", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Auth endpoint URL (overrides the config file).
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Extra header as NAME=VALUE. Repeatable.
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Seconds to wait for the auth endpoint.
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Channel to authorize, e.g. private-chat.
    channel: String,

    /// Socket id issued by the real-time connection.
    socket_id: String,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

fn build_config(cli: &Cli) -> Result<AuthorizerConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AuthorizerConfig::default(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.auth_endpoint = endpoint.clone();
    }
    for (name, value) in &cli.headers {
        config = config.header(name.clone(), value.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.timeout(Duration::from_secs(secs));
    }

    // Flags bypass the loader, so check the merged result again.
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = build_config(&cli)?;
    logging::init(&config.observability);

    let authorizer = ChannelAuthorizer::new(config)?;
    let token = authorizer.authorize(&cli.channel, &cli.socket_id)?;
    Ok(token)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
