//! Opens the selected spreadsheet in the system browser.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{SpreadsheetLauncherPort, SpreadsheetRepositoryPort};

/// Browser-based spreadsheet launcher.
pub struct BrowserSpreadsheetLauncher {
    repository: Arc<dyn SpreadsheetRepositoryPort>,
    url_template: String,
}

impl BrowserSpreadsheetLauncher {
    /// Creates launcher; `{id}` in `url_template` is replaced by the spreadsheet id.
    #[must_use]
    pub fn new(repository: Arc<dyn SpreadsheetRepositoryPort>, url_template: impl Into<String>) -> Self {
        Self {
            repository,
            url_template: url_template.into(),
        }
    }

    fn url(&self) -> Option<String> {
        self.repository
            .spreadsheet_id()
            .map(|id| self.url_template.replace("{id}", &id))
    }
}

impl SpreadsheetLauncherPort for BrowserSpreadsheetLauncher {
    fn launch(&self) {
        let Some(url) = self.url() else {
            warn!("No spreadsheet selected, nothing to open");
            return;
        };

        debug!(%url, "Opening spreadsheet");
        tokio::task::spawn_blocking(move || {
            if let Err(e) = opener::open_browser(&url) {
                warn!(error = %e, "Failed to open spreadsheet");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSpreadsheetRepository;

    #[test]
    fn test_url_from_template() {
        let launcher = BrowserSpreadsheetLauncher::new(
            Arc::new(MockSpreadsheetRepository::with_id("abc123")),
            "https://docs.google.com/spreadsheets/d/{id}/edit",
        );

        assert_eq!(
            launcher.url().as_deref(),
            Some("https://docs.google.com/spreadsheets/d/abc123/edit")
        );
    }

    #[test]
    fn test_no_url_without_selection() {
        let launcher = BrowserSpreadsheetLauncher::new(
            Arc::new(MockSpreadsheetRepository::default()),
            "https://docs.google.com/spreadsheets/d/{id}",
        );

        assert_eq!(launcher.url(), None);
    }
}
