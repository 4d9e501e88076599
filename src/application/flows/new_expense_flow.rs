//! Expense entry form action loop.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

use crate::application::dto::{NewExpenseAction, NewExpenseState};
use crate::domain::entities::NewExpense;
use crate::domain::errors::BudgetError;
use crate::domain::ports::{BudgetDataPort, ClockPort};

/// Owns the in-progress expense form and submits it on request.
pub struct NewExpenseFlow {
    actions: mpsc::UnboundedReceiver<NewExpenseAction>,
    form: NewExpenseState,
    state: watch::Sender<NewExpenseState>,
    api: Arc<dyn BudgetDataPort>,
}

impl NewExpenseFlow {
    /// Creates the loop with today's date and the first category preselected.
    ///
    /// The returned receiver already holds the default form state.
    #[must_use]
    pub fn new(
        actions: mpsc::UnboundedReceiver<NewExpenseAction>,
        categories: &[String],
        api: Arc<dyn BudgetDataPort>,
        clock: &dyn ClockPort,
    ) -> (Self, watch::Receiver<NewExpenseState>) {
        let form = NewExpenseState::new(
            clock.today(),
            categories.first().cloned().unwrap_or_default(),
            None,
        );
        let (state, state_rx) = watch::channel(form.clone());

        (
            Self {
                actions,
                form,
                state,
                api,
            },
            state_rx,
        )
    }

    /// Runs the loop until the action source closes.
    ///
    /// # Errors
    /// Returns error if submitting an expense fails.
    pub async fn run(mut self) -> Result<(), BudgetError> {
        info!(
            date = %self.form.selected_date,
            category = %self.form.selected_category,
            "New expense flow started"
        );

        while let Some(action) = self.actions.recv().await {
            debug!(?action, "Handling new expense action");

            match action {
                NewExpenseAction::SelectDate(date) => {
                    self.form.selected_date = date;
                    self.publish();
                }
                NewExpenseAction::SelectCategory(category) => {
                    self.form.selected_category = category;
                    self.publish();
                }
                NewExpenseAction::SelectValue(value) => {
                    self.form.selected_value = Some(value);
                    self.publish();
                }
                NewExpenseAction::SelectAdd => self.submit().await?,
            }
        }

        info!("New expense action source closed");
        Ok(())
    }

    fn publish(&self) {
        self.state.send_replace(self.form.clone());
    }

    async fn submit(&self) -> Result<(), BudgetError> {
        // The entered amount is not forwarded; the service always receives zero.
        let expense = NewExpense::new(
            self.form.selected_date,
            self.form.selected_category.clone(),
            Decimal::ZERO,
        );

        debug!(date = %expense.date, category = %expense.category, "Adding expense");

        self.api.add_expense(expense).await.map_err(|e| {
            error!(error = %e, "Failed to add expense");
            e
        })?;

        info!("Expense added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockBudgetData, MockBudgetDataHandle};
    use crate::infrastructure::FixedClock;
    use chrono::NaiveDate;
    use tokio::task::JoinHandle;
    use tokio_test::assert_err;

    struct Harness {
        actions: mpsc::UnboundedSender<NewExpenseAction>,
        state: watch::Receiver<NewExpenseState>,
        api: MockBudgetDataHandle,
        task: JoinHandle<Result<(), BudgetError>>,
    }

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn categories() -> Vec<String> {
        vec![
            "Jedzenie".to_string(),
            "Transport".to_string(),
            "Hobby".to_string(),
        ]
    }

    fn start_with(categories: &[String], api: MockBudgetData, handle: MockBudgetDataHandle) -> Harness {
        let (actions_tx, actions_rx) = mpsc::unbounded_channel();
        let clock = FixedClock::new(date("2020-06-09"));
        let (flow, state) = NewExpenseFlow::new(actions_rx, categories, Arc::new(api), &clock);

        Harness {
            actions: actions_tx,
            state,
            api: handle,
            task: tokio::spawn(flow.run()),
        }
    }

    fn start() -> Harness {
        let (api, handle) = MockBudgetData::new();
        start_with(&categories(), api, handle)
    }

    impl Harness {
        async fn send(&mut self, action: NewExpenseAction) -> NewExpenseState {
            self.actions.send(action).unwrap();
            self.state.changed().await.unwrap();
            self.state.borrow_and_update().clone()
        }

        async fn submit(self) -> (MockBudgetDataHandle, Result<(), BudgetError>) {
            self.actions.send(NewExpenseAction::SelectAdd).unwrap();
            drop(self.actions);
            let result = self.task.await.unwrap();
            (self.api, result)
        }
    }

    #[tokio::test]
    async fn test_default_state() {
        let h = start();

        assert_eq!(
            *h.state.borrow(),
            NewExpenseState::new(date("2020-06-09"), "Jedzenie", None)
        );
    }

    #[tokio::test]
    async fn test_empty_category_list_defaults_to_empty_name() {
        let (api, handle) = MockBudgetData::new();
        let h = start_with(&[], api, handle);

        assert_eq!(h.state.borrow().selected_category, "");
    }

    #[tokio::test]
    async fn test_select_date_updates_date() {
        let mut h = start();

        let state = h.send(NewExpenseAction::SelectDate(date("2020-06-07"))).await;

        assert_eq!(
            state,
            NewExpenseState::new(date("2020-06-07"), "Jedzenie", None)
        );
    }

    #[tokio::test]
    async fn test_new_date_keeps_selected_category() {
        let mut h = start();

        h.send(NewExpenseAction::SelectCategory("Hobby".to_string()))
            .await;
        let state = h.send(NewExpenseAction::SelectDate(date("2020-05-07"))).await;

        assert_eq!(state.selected_category, "Hobby");
        assert_eq!(state.selected_date, date("2020-05-07"));
    }

    #[tokio::test]
    async fn test_select_value_updates_value() {
        let mut h = start();

        let state = h
            .send(NewExpenseAction::SelectValue(Decimal::new(15, 0)))
            .await;

        assert_eq!(state.selected_value, Some(Decimal::new(15, 0)));
        assert_eq!(state.selected_date, date("2020-06-09"));
        assert_eq!(state.selected_category, "Jedzenie");
    }

    #[tokio::test]
    async fn test_add_uses_selected_date_and_category() {
        let mut h = start();
        h.send(NewExpenseAction::SelectDate(date("2020-06-07"))).await;
        h.send(NewExpenseAction::SelectCategory("Hobby".to_string()))
            .await;
        h.send(NewExpenseAction::SelectValue(Decimal::new(300, 0)))
            .await;

        let (api, result) = h.submit().await;

        assert!(result.is_ok());
        let added = api.added_expenses();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].date, date("2020-06-07"));
        assert_eq!(added[0].category, "Hobby");
    }

    #[tokio::test]
    async fn test_add_submits_zero_amount() {
        let mut h = start();
        h.send(NewExpenseAction::SelectValue(Decimal::new(7, 0)))
            .await;

        let (api, _) = h.submit().await;

        assert_eq!(api.added_expenses()[0].value, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_add_leaves_form_unchanged() {
        let mut h = start();
        h.send(NewExpenseAction::SelectValue(Decimal::new(15, 0)))
            .await;
        h.actions.send(NewExpenseAction::SelectAdd).unwrap();

        let state = h
            .send(NewExpenseAction::SelectCategory("Transport".to_string()))
            .await;

        assert_eq!(state.selected_value, Some(Decimal::new(15, 0)));
        assert_eq!(state.selected_date, date("2020-06-09"));
        assert_eq!(h.api.added_expenses().len(), 1);
        assert_eq!(h.api.added_expenses()[0].category, "Jedzenie");
    }

    #[tokio::test]
    async fn test_failed_add_ends_flow() {
        let (api, handle) = MockBudgetData::new();
        let api = api.failing_add(BudgetError::data_service("sheet is read-only"));
        let h = start_with(&categories(), api, handle);

        let (api, result) = h.submit().await;

        assert_err!(result);
        assert_eq!(api.added_expenses().len(), 1);
    }
}
