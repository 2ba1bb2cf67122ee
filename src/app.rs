// CLI layer: argument definitions and the run flow. Kept apart from
// `api` so the request/response logic stays testable without a terminal
// and the argument handling without a network.

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};

use crate::api::ApiClient;

/// Shorten a URL with lovli.fyi.
#[derive(Parser, Debug)]
#[command(name = "lovli", version, disable_version_flag = true)]
pub struct Cli {
    /// The URL to shorten
    pub url: String,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

/// Trim and validate the input, call the service, print the short URL.
/// Whitespace-only input never reaches the network.
pub fn run(cli: &Cli) -> Result<()> {
    let long_url = cli.url.trim();
    if long_url.is_empty() {
        bail!("invalid URL");
    }
    let api = ApiClient::from_env()?;
    let redirection = api.shorten(long_url)?;
    println!("{}", redirection.short_url);
    Ok(())
}
