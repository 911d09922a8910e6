//! okta-swa - bulk-provision Okta SWA applications from a credentials CSV

use clap::CommandFactory;

mod cli;
mod client;
mod config;
mod error;
mod input;
mod output;
mod provision;

use cli::Cli;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Bare invocation shows usage and does nothing else
    if std::env::args_os().len() < 2 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse_normalized(std::env::args_os());

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    cli::provision::run(&cli).await
}
