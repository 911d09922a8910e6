//! Bulk provisioning of SWA apps
//!
//! Rows are handled strictly one after another: create the app, link it to
//! the group, record the result. A row whose creation fails is skipped and
//! never retried.

use std::io::Write;

use log::{debug, info, warn};

use crate::client::{CreateOutcome, LinkOutcome, OktaApi, OktaEndpoints, SwaApplication};
use crate::config::Settings;
use crate::error::Result;
use crate::input::CredentialRow;
use crate::output::{ProvisionSummary, ResultWriter};

pub mod observer;

pub use observer::{ConsoleObserver, ProvisionObserver, SilentObserver};

/// Drives creation, group linking and recording for each credential row
pub struct Provisioner<'a, C: OktaApi, O: ProvisionObserver> {
    client: &'a C,
    endpoints: &'a OktaEndpoints,
    settings: &'a Settings,
    observer: &'a O,
}

impl<'a, C: OktaApi, O: ProvisionObserver> Provisioner<'a, C, O> {
    pub fn new(
        client: &'a C,
        endpoints: &'a OktaEndpoints,
        settings: &'a Settings,
        observer: &'a O,
    ) -> Self {
        Self {
            client,
            endpoints,
            settings,
            observer,
        }
    }

    /// Create one SWA app for a credential row.
    ///
    /// HTTP failures come back as a [`CreateOutcome`]; only transport errors
    /// are returned as `Err`.
    pub async fn create_app(&self, row: &CredentialRow) -> Result<CreateOutcome> {
        let app = SwaApplication::new(
            row.name.as_str(),
            self.settings.login_url(&row.admin_url),
            self.settings.shared_username.as_str(),
            row.password.as_str(),
        );
        let request = self.endpoints.create_app(&app)?;

        debug!("Creating app '{}' ({})", app.label, app.login_url());
        self.observer.request(&request);
        let response = self.client.send(&request).await?;
        self.observer.response(&response);

        Ok(CreateOutcome::from_response(&response))
    }

    /// Assign a created app to the configured group.
    ///
    /// The outcome is reported but never changes what happens to the row.
    pub async fn link_group(&self, application_id: &str) -> Result<LinkOutcome> {
        let request = self
            .endpoints
            .assign_group(application_id, &self.settings.group_id);

        debug!(
            "Linking app {} to group {}",
            application_id, self.settings.group_id
        );
        self.observer.request(&request);
        let response = self.client.send(&request).await?;
        self.observer.response(&response);

        Ok(LinkOutcome::from(&response))
    }

    /// Provision every row, writing a result line for each created app.
    pub async fn run<I, W>(
        &self,
        rows: I,
        results: &mut ResultWriter<W>,
    ) -> Result<ProvisionSummary>
    where
        I: IntoIterator<Item = Result<CredentialRow>>,
        W: Write,
    {
        let mut summary = ProvisionSummary::default();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row?;
            summary.rows += 1;
            self.observer.row_started(index + 1, &row);

            let outcome = self.create_app(&row).await?;
            let Some(application_id) = outcome.application_id().map(str::to_string) else {
                warn!("Skipping '{}': app creation failed", row.name);
                self.observer.row_skipped(&row, &outcome);
                summary.skipped += 1;
                continue;
            };

            match self.link_group(&application_id).await {
                Ok(link) if link.is_success() => {}
                Ok(link) => {
                    warn!(
                        "Group link for app {} returned HTTP {}",
                        application_id, link.status
                    );
                    debug!("Group link response body: {}", link.body);
                    summary.link_failures += 1;
                }
                Err(e) => {
                    warn!("Group link for app {} failed: {}", application_id, e);
                    summary.link_failures += 1;
                }
            }

            results.record(&row, &application_id)?;
            self.observer.row_recorded(&row, &application_id);
            summary.created += 1;
        }

        info!("Provisioning finished: {}", summary);
        Ok(summary)
    }
}
