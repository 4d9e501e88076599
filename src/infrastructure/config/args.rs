use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "homebudget",
    version,
    about = "Monthly budget overview and expense entry",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Budget-data service base URL.
    #[arg(long, env = "HOMEBUDGET_API_URL")]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Select this spreadsheet before starting.
    #[arg(long, env = "HOMEBUDGET_SPREADSHEET_ID")]
    pub spreadsheet_id: Option<String>,

    /// Expense categories, in display order (repeatable).
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,
}
