//! Provision command implementation

use colored::Colorize;
use log::debug;

use crate::cli::Cli;
use crate::client::{OktaClient, OktaEndpoints};
use crate::config::{AuthToken, Config, Settings};
use crate::error::Result;
use crate::input::CredentialReader;
use crate::output::ResultWriter;
use crate::provision::{ConsoleObserver, Provisioner};

/// Create an app for every credential row and record the results.
///
/// The token is checked before any file is touched, and the CSV columns are
/// resolved before the results file is truncated or any request is sent.
pub async fn run(cli: &Cli) -> Result<()> {
    let token = AuthToken::from_env()?;

    let config = Config::load_at(cli.config.as_deref())?;
    let settings = Settings::resolve(cli.overrides(), config)?;
    debug!("Resolved settings: {:?}", settings);

    let mut reader = CredentialReader::open(&cli.csv_file, &settings.columns)?;
    let mut results = ResultWriter::create(&settings.results_file)?;

    let client = OktaClient::new()?;
    let endpoints = OktaEndpoints::new(&settings.okta_url, token);
    let provisioner = Provisioner::new(&client, &endpoints, &settings, &ConsoleObserver);

    let summary = provisioner.run(reader.rows(), &mut results).await?;

    summary.print();
    println!(
        "Results written to {}",
        settings.results_file.display().to_string().cyan()
    );

    Ok(())
}
