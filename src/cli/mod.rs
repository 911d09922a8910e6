//! CLI definition and handler

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

pub mod provision;

const EXAMPLES: &str = "\
EXAMPLES:
  okta-swa merchants.csv
  okta-swa -g 00g1a2b3c4d5 merchants.csv
  okta-swa -r results.csv -hp pw merchants.csv

The Okta API token is read from OKTA_AUTH_TOKEN.";

/// Multi-letter short flags accepted for compatibility with existing scripts
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-hn", "--header_name"),
    ("-hu", "--header_url"),
    ("-hp", "--header_password"),
];

/// Creates an Okta SWA application for each row of a credentials CSV
#[derive(Parser, Debug)]
#[command(name = "okta-swa")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// CSV file containing credentials
    pub csv_file: PathBuf,

    /// Add apps to this group [default: Chargeback-Team]
    #[arg(short = 'g', long = "group_id", visible_alias = "group-id")]
    pub group_id: Option<String>,

    /// Store the results in this file [default: created_apps.csv]
    #[arg(short = 'r', long = "results_file", visible_alias = "results-file")]
    pub results_file: Option<PathBuf>,

    /// CSV header for the name column, also -hn [default: Name]
    #[arg(long = "header_name", visible_alias = "header-name", value_name = "HEADER")]
    pub header_name: Option<String>,

    /// CSV header for the URL column, also -hu [default: admin]
    #[arg(long = "header_url", visible_alias = "header-url", value_name = "HEADER")]
    pub header_url: Option<String>,

    /// CSV header for the password column, also -hp [default: admin]
    #[arg(
        long = "header_password",
        visible_alias = "header-password",
        value_name = "HEADER"
    )]
    pub header_password: Option<String>,

    /// Okta org URL
    #[arg(long, env = "OKTA_ORG_URL", hide_env = true)]
    pub okta_url: Option<String>,

    /// Username shared by every created app
    #[arg(long, env = "OKTA_SHARED_USERNAME", hide_env = true)]
    pub shared_username: Option<String>,

    /// Override config file location
    #[arg(long, env = "OKTA_SWA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, env = "OKTA_SWA_DEBUG", hide_env = true)]
    pub debug: bool,
}

impl Cli {
    /// Parse arguments, accepting the legacy `-hn/-hu/-hp` spellings
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            okta_url: self.okta_url.clone(),
            group_id: self.group_id.clone(),
            shared_username: self.shared_username.clone(),
            results_file: self.results_file.clone(),
            header_name: self.header_name.clone(),
            header_url: self.header_url.clone(),
            header_password: self.header_password.clone(),
        }
    }
}

/// Rewrite `-hn VALUE`, `-hn=VALUE` and `-hnVALUE` (and -hu, -hp) to their
/// long forms.
///
/// Clap short flags are single characters, and `-hn` would otherwise parse
/// as `-h -n`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut positional_only = false;

    for arg in args.into_iter().map(Into::into) {
        if positional_only {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            positional_only = true;
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            LEGACY_FLAGS.iter().find_map(|(short, long)| {
                let rest = s.strip_prefix(short)?;
                if rest.is_empty() {
                    return Some(OsString::from(*long));
                }
                let value = rest.strip_prefix('=').unwrap_or(rest);
                Some(OsString::from(format!("{}={}", long, value)))
            })
        });
        out.push(rewritten.unwrap_or(arg));
    }

    out
}
