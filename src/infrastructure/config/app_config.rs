//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const APP_NAME: &str = "homebudget";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "homebudget";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Base URL of the budget-data service.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// URL opened for the selected spreadsheet; `{id}` is replaced by its id.
    #[serde(default = "default_spreadsheet_url_template")]
    pub spreadsheet_url_template: String,

    /// Expense categories offered by the entry form, first one preselected.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8080/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_spreadsheet_url_template() -> String {
    "https://docs.google.com/spreadsheets/d/{id}".to_string()
}

fn default_categories() -> Vec<String> {
    ["Jedzenie", "Transport", "Hobby"]
        .into_iter()
        .map(String::from)
        .collect()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_base_url) = args.api_base_url {
            self.api_base_url = api_base_url;
        }
        if let Some(timeout) = args.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if !args.categories.is_empty() {
            self.categories = args.categories;
        }
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("homebudget.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            spreadsheet_url_template: default_spreadsheet_url_template(),
            categories: default_categories(),
        }
    }
}
