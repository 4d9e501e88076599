use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use homebudget::domain::ports::SpreadsheetRepositoryPort;
use homebudget::infrastructure::{
    AppConfig, BrowserSpreadsheetLauncher, CliArgs, HttpBudgetClient, StateStore, StorageManager,
    SystemClock,
};
use homebudget::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let mut args = CliArgs::parse();
    let spreadsheet_id = args.spreadsheet_id.take();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = homebudget::VERSION, "Starting homebudget");

    let repository = Arc::new(StateStore::load(storage));
    if let Some(id) = spreadsheet_id {
        repository.set_spreadsheet_id(Some(id))?;
    }

    let api = Arc::new(HttpBudgetClient::new(
        config.api_base_url.clone(),
        config.request_timeout(),
        repository.clone(),
    )?);
    let launcher = Arc::new(BrowserSpreadsheetLauncher::new(
        repository.clone(),
        config.spreadsheet_url_template.clone(),
    ));

    Ok(App::new(
        config.categories,
        api,
        repository,
        launcher,
        Arc::new(SystemClock),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let app = create_app()?;

    app.run().await
}
