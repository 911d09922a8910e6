//! Diagnostics emitted around every Okta call
//!
//! The orchestrator reports each step through [`ProvisionObserver`]; the HTTP
//! layer itself never prints.

use colored::Colorize;

use crate::client::{ApiRequest, ApiResponse, CreateOutcome};
use crate::input::CredentialRow;

const SEPARATOR_WIDTH: usize = 120;

/// Hooks invoked by the provisioner. All methods default to no-ops.
pub trait ProvisionObserver {
    /// A credential row is about to be provisioned (1-based index)
    fn row_started(&self, _index: usize, _row: &CredentialRow) {}

    /// A request is about to be sent
    fn request(&self, _request: &ApiRequest) {}

    /// A response was received
    fn response(&self, _response: &ApiResponse) {}

    /// Creation failed and the row produced no output
    fn row_skipped(&self, _row: &CredentialRow, _outcome: &CreateOutcome) {}

    /// The row was written to the results file
    fn row_recorded(&self, _row: &CredentialRow, _application_id: &str) {}
}

/// Observer that ignores everything
#[allow(dead_code)]
pub struct SilentObserver;

impl ProvisionObserver for SilentObserver {}

/// Dumps every exchange to stdout
pub struct ConsoleObserver;

impl ProvisionObserver for ConsoleObserver {
    fn row_started(&self, index: usize, row: &CredentialRow) {
        println!(
            "{} {} {}",
            format!("[{}]", index).dimmed(),
            row.name.bold(),
            row.admin_url
        );
    }

    fn request(&self, request: &ApiRequest) {
        println!("{}", format_request(request));
    }

    fn response(&self, response: &ApiResponse) {
        println!("{}", format_response(response));
    }

    fn row_skipped(&self, row: &CredentialRow, outcome: &CreateOutcome) {
        let reason = match outcome {
            CreateOutcome::Rejected { status, .. } => format!("HTTP {}", status),
            CreateOutcome::Malformed { reason, .. } => format!("unreadable response: {}", reason),
            CreateOutcome::Created { .. } => return,
        };
        println!("{} {} skipped ({})", "✗".red(), row.name, reason);
    }

    fn row_recorded(&self, row: &CredentialRow, application_id: &str) {
        println!("{} {} created as {}", "✓".green(), row.name, application_id);
    }
}

/// Render a request: target, headers and body, framed by separator lines
pub fn format_request(request: &ApiRequest) -> String {
    let separator = "*".repeat(SEPARATOR_WIDTH);
    let mut out = format!("{}\n{} {}\n", separator, request.method, request.url);

    for (name, value) in &request.headers {
        let value = if name.eq_ignore_ascii_case("authorization") {
            redact_authorization(value)
        } else {
            value.clone()
        };
        out.push_str(&format!("{}: {}\n", name, value));
    }

    if let Some(ref body) = request.body {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

/// Render a response: status line, headers and body
pub fn format_response(response: &ApiResponse) -> String {
    let mut out = format!("<Response [{}]>\n", response.status_line());
    for (name, value) in &response.headers {
        out.push_str(&format!("{}: {}\n", name, value));
    }
    out.push_str(&response.body);
    out
}

/// Keep the auth scheme and the last four token characters
pub fn redact_authorization(value: &str) -> String {
    let (scheme, token) = match value.split_once(' ') {
        Some((scheme, token)) => (scheme, token),
        None => ("", value),
    };

    let chars: Vec<char> = token.chars().collect();
    let tail: String = if chars.len() > 8 {
        chars[chars.len() - 4..].iter().collect()
    } else {
        String::new()
    };

    if scheme.is_empty() {
        format!("****{}", tail)
    } else {
        format!("{} ****{}", scheme, tail)
    }
}
