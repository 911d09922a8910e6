//! End-of-run summary

use colored::Colorize;
use std::fmt;

/// Counts collected over one provisioning run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionSummary {
    /// Credential rows read
    pub rows: usize,
    /// Apps created (and written to the results file)
    pub created: usize,
    /// Rows whose creation was rejected or unreadable
    pub skipped: usize,
    /// Group links that did not return a 2xx status
    pub link_failures: usize,
}

impl ProvisionSummary {
    /// Print the summary to stdout
    pub fn print(&self) {
        println!();
        println!("{}", "Provisioning summary".bold());
        println!("  Rows read:      {}", self.rows);
        println!("  {} Created:      {}", "✓".green(), self.created);
        if self.skipped > 0 {
            println!("  {} Skipped:      {}", "✗".red(), self.skipped);
        }
        if self.link_failures > 0 {
            println!(
                "  {} Group links:  {} returned an error status",
                "⚠".yellow(),
                self.link_failures
            );
        }
    }
}

impl fmt::Display for ProvisionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} created, {} skipped, {} link failures",
            self.rows, self.created, self.skipped, self.link_failures
        )
    }
}
