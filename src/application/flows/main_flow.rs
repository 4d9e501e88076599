//! Monthly budget screen action loop.

use std::ops::ControlFlow;
use std::sync::Arc;

use chrono::Month;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::application::dto::{MainAction, MainView};
use crate::domain::entities::{MonthType, MonthlyBudget, classify_month, next_month, prev_month};
use crate::domain::errors::BudgetError;
use crate::domain::ports::{
    BudgetDataPort, ClockPort, NavigatorPort, Route, SpreadsheetLauncherPort,
    SpreadsheetRepositoryPort,
};

/// Clears the loading flag when dropped, whatever way the load ends.
struct LoadingGuard<'a> {
    is_loading: &'a watch::Sender<bool>,
}

impl<'a> LoadingGuard<'a> {
    fn raise(is_loading: &'a watch::Sender<bool>) -> Self {
        is_loading.send_replace(true);
        Self { is_loading }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.is_loading.send_replace(false);
    }
}

/// Owns the selected month and the monthly budget view state.
///
/// Actions are handled one at a time in arrival order. While the initial load
/// is in flight, actions that need no load are served immediately; the first
/// one that loads or signs out waits for it. After that, a load triggered by an
/// action finishes before the next action is read.
pub struct MainFlow {
    actions: mpsc::UnboundedReceiver<MainAction>,
    state: MainState,
}

/// Everything the loop owns besides its action source.
struct MainState {
    month: Month,
    month_type: watch::Sender<Option<MonthType>>,
    monthly_budget: watch::Sender<Option<MonthlyBudget>>,
    is_loading: watch::Sender<bool>,
    api: Arc<dyn BudgetDataPort>,
    repository: Arc<dyn SpreadsheetRepositoryPort>,
    launcher: Arc<dyn SpreadsheetLauncherPort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl MainFlow {
    /// Creates the loop starting at the clock's current month, plus its view.
    #[must_use]
    pub fn new(
        actions: mpsc::UnboundedReceiver<MainAction>,
        api: Arc<dyn BudgetDataPort>,
        repository: Arc<dyn SpreadsheetRepositoryPort>,
        launcher: Arc<dyn SpreadsheetLauncherPort>,
        navigator: Arc<dyn NavigatorPort>,
        clock: &dyn ClockPort,
    ) -> (Self, MainView) {
        let (month_type, month_type_rx) = watch::channel(None);
        let (monthly_budget, monthly_budget_rx) = watch::channel(None);
        let (is_loading, is_loading_rx) = watch::channel(false);

        let state = MainState {
            month: clock.current_month(),
            month_type,
            monthly_budget,
            is_loading,
            api,
            repository,
            launcher,
            navigator,
        };
        let view = MainView {
            month_type: month_type_rx,
            monthly_budget: monthly_budget_rx,
            is_loading: is_loading_rx,
        };

        (Self { actions, state }, view)
    }

    /// Runs the loop until sign-out completes or the action source closes.
    ///
    /// Pops the back stack exactly once after a completed sign-out.
    ///
    /// # Errors
    /// Returns error if signing out fails, the spreadsheet selection cannot be
    /// cleared, or a load fails with anything other than a data service error.
    pub async fn run(self) -> Result<(), BudgetError> {
        let Self {
            mut actions,
            mut state,
        } = self;

        info!(month = ?state.month, "Main flow started");

        let mut held = state.initial_load(&mut actions).await?;

        loop {
            let action = match held.take() {
                Some(action) => action,
                None => match actions.recv().await {
                    Some(action) => action,
                    None => {
                        info!("Main action source closed");
                        return Ok(());
                    }
                },
            };

            if state.handle(action).await?.is_break() {
                break;
            }
        }

        state.navigator.pop_back_stack();
        info!("Main flow finished");
        Ok(())
    }
}

impl MainState {
    /// Performs the first load while serving actions that need no load.
    ///
    /// Returns the first action that has to wait for the load, if any.
    async fn initial_load(
        &self,
        actions: &mut mpsc::UnboundedReceiver<MainAction>,
    ) -> Result<Option<MainAction>, BudgetError> {
        let load = self.load();
        tokio::pin!(load);

        loop {
            tokio::select! {
                biased;

                result = &mut load => {
                    result?;
                    return Ok(None);
                }

                action = actions.recv() => match action {
                    Some(action) if action.triggers_load() || matches!(action, MainAction::SignOut) => {
                        debug!(?action, "Holding action until initial load completes");
                        (&mut load).await?;
                        return Ok(Some(action));
                    }
                    Some(action) => {
                        debug!(?action, "Handling main action during initial load");
                        self.show(action);
                    }
                    None => {
                        (&mut load).await?;
                        return Ok(None);
                    }
                },
            }
        }
    }

    async fn handle(&mut self, action: MainAction) -> Result<ControlFlow<()>, BudgetError> {
        debug!(?action, month = ?self.month, "Handling main action");

        match action {
            MainAction::Resume | MainAction::Refresh | MainAction::TryAgain => {}
            MainAction::SelectPrevMonth => self.month = prev_month(self.month),
            MainAction::SelectNextMonth => self.month = next_month(self.month),
            MainAction::SignOut => {
                self.sign_out().await?;
                return Ok(ControlFlow::Break(()));
            }
            MainAction::OpenSpreadsheet
            | MainAction::AddTransaction
            | MainAction::PickDocumentAgain
            | MainAction::SelectAbout => self.show(action),
        }

        if action.triggers_load() {
            self.load().await?;
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Handles actions that only launch or navigate.
    fn show(&self, action: MainAction) {
        match action {
            MainAction::OpenSpreadsheet => self.launcher.launch(),
            MainAction::AddTransaction => {
                let monthly_budget = self.monthly_budget.borrow().clone();
                self.navigator.navigate(Route::Transaction { monthly_budget });
            }
            MainAction::PickDocumentAgain => self.navigator.navigate(Route::DocumentPicker),
            MainAction::SelectAbout => self.navigator.navigate(Route::About),
            MainAction::Resume
            | MainAction::Refresh
            | MainAction::TryAgain
            | MainAction::SelectPrevMonth
            | MainAction::SelectNextMonth
            | MainAction::SignOut => {}
        }
    }

    async fn load(&self) -> Result<(), BudgetError> {
        let _loading = LoadingGuard::raise(&self.is_loading);
        self.month_type.send_replace(Some(classify_month(self.month)));

        debug!(month = ?self.month, "Loading monthly budget");

        match self.api.get_monthly_budget(self.month).await {
            Ok(budget) => {
                debug!(
                    month = ?self.month,
                    categories = budget.categories.len(),
                    "Monthly budget loaded"
                );
                self.monthly_budget.send_replace(Some(budget));
                Ok(())
            }
            Err(e) if e.is_data_service() => {
                warn!(month = ?self.month, error = %e, "Monthly budget load failed");
                self.monthly_budget.send_replace(None);
                self.navigator.navigate(Route::LoadError);
                Ok(())
            }
            Err(e) => {
                error!(month = ?self.month, error = %e, "Monthly budget load aborted");
                Err(e)
            }
        }
    }

    async fn sign_out(&self) -> Result<(), BudgetError> {
        self.repository.set_spreadsheet_id(None).map_err(|e| {
            error!(error = %e, "Failed to clear spreadsheet selection");
            e
        })?;

        self.api.sign_out().await.map_err(|e| {
            error!(error = %e, "Sign out failed");
            e
        })?;

        info!("Signed out");
        Ok(())
    }
}
