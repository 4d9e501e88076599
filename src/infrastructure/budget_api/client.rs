//! Budget-data service HTTP client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Month;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{AddExpenseRequest, ErrorResponse};
use crate::domain::entities::{MonthlyBudget, NewExpense};
use crate::domain::errors::BudgetError;
use crate::domain::ports::{BudgetDataPort, SpreadsheetRepositoryPort};

const USER_AGENT: &str = concat!("homebudget/", env!("CARGO_PKG_VERSION"));

/// JSON client for the budget-data service.
///
/// Requests target the spreadsheet currently selected in the repository.
pub struct HttpBudgetClient {
    client: Client,
    base_url: String,
    repository: Arc<dyn SpreadsheetRepositoryPort>,
}

impl HttpBudgetClient {
    /// Creates client for the service at `base_url`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        repository: Arc<dyn SpreadsheetRepositoryPort>,
    ) -> Result<Self, BudgetError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| BudgetError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            repository,
        })
    }

    fn spreadsheet_url(&self, path: &str) -> Result<String, BudgetError> {
        let id = self
            .repository
            .spreadsheet_id()
            .ok_or(BudgetError::NotConfigured)?;
        Ok(format!("{}/spreadsheets/{id}/{path}", self.base_url))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, BudgetError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Budget service request failed");
            if e.is_timeout() {
                BudgetError::data_service("request timed out")
            } else if e.is_connect() {
                BudgetError::data_service("failed to connect to budget service")
            } else {
                BudgetError::data_service(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(Self::error_from_response(status, response).await)
    }

    async fn error_from_response(status: StatusCode, response: reqwest::Response) -> BudgetError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(error) => error.message,
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                BudgetError::data_service(format!("access denied: {message}"))
            }
            StatusCode::NOT_FOUND => BudgetError::data_service(format!("not found: {message}")),
            _ => BudgetError::data_service(format!("{status}: {message}")),
        }
    }
}

#[async_trait]
impl BudgetDataPort for HttpBudgetClient {
    async fn get_monthly_budget(&self, month: Month) -> Result<MonthlyBudget, BudgetError> {
        // Without a selection the screen offers the picker, same as any failed load.
        let url = self
            .spreadsheet_url(&format!("months/{}", month.number_from_month()))
            .map_err(|e| BudgetError::data_service(e.to_string()))?;

        debug!(?month, "Fetching monthly budget");

        let response = self.send(self.client.get(&url)).await?;
        response.json::<MonthlyBudget>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse monthly budget");
            BudgetError::data_service(format!("failed to parse response: {e}"))
        })
    }

    async fn add_expense(&self, expense: NewExpense) -> Result<(), BudgetError> {
        let url = self.spreadsheet_url("expenses")?;
        let body = AddExpenseRequest {
            date: expense.date,
            category: &expense.category,
            value: expense.value,
        };

        debug!(date = %expense.date, category = %expense.category, "Posting expense");

        self.send(self.client.post(&url).json(&body)).await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), BudgetError> {
        let url = format!("{}/session/sign-out", self.base_url);

        debug!("Signing out of budget service");

        self.send(self.client.post(&url)).await?;
        Ok(())
    }
}
