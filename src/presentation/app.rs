//! Line-oriented console driver for the budget screens.

use std::ops::ControlFlow;
use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use futures_util::future::Either;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

use super::commands::{Command, Screen, help, parse_command};
use super::navigator::{ChannelNavigator, NavigationEvent};
use super::render;
use crate::application::dto::{MainAction, MainView, NewExpenseAction, NewExpenseState};
use crate::application::flows::{MainFlow, NewExpenseFlow};
use crate::domain::entities::MonthlyBudget;
use crate::domain::errors::BudgetError;
use crate::domain::ports::{
    BudgetDataPort, ClockPort, Route, SpreadsheetLauncherPort, SpreadsheetRepositoryPort,
};
use crate::{NAME, VERSION};

type FlowResult = Result<Result<(), BudgetError>, JoinError>;

/// Open expense entry screen.
struct ExpenseSession {
    actions: mpsc::UnboundedSender<NewExpenseAction>,
    state: watch::Receiver<NewExpenseState>,
    task: JoinHandle<Result<(), BudgetError>>,
}

enum SessionEvent {
    Changed,
    Finished(FlowResult),
}

impl ExpenseSession {
    async fn next_event(&mut self) -> SessionEvent {
        tokio::select! {
            Ok(()) = self.state.changed() => SessionEvent::Changed,
            result = &mut self.task => SessionEvent::Finished(result),
        }
    }
}

/// Reason the console stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The budget screen signed out and closed.
    SignedOut,
    /// The user typed `quit`.
    Quit,
    /// Input reached end of file.
    InputClosed,
    /// The budget screen ended without signing out.
    Closed,
}

/// Console application wiring the action loops to stdin and stdout.
pub struct App {
    categories: Vec<String>,
    api: Arc<dyn BudgetDataPort>,
    repository: Arc<dyn SpreadsheetRepositoryPort>,
    launcher: Arc<dyn SpreadsheetLauncherPort>,
    clock: Arc<dyn ClockPort>,
    expense: Option<ExpenseSession>,
}

impl App {
    /// Creates the console over the given adapters.
    #[must_use]
    pub fn new(
        categories: Vec<String>,
        api: Arc<dyn BudgetDataPort>,
        repository: Arc<dyn SpreadsheetRepositoryPort>,
        launcher: Arc<dyn SpreadsheetLauncherPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            categories,
            api,
            repository,
            launcher,
            clock,
            expense: None,
        }
    }

    /// Runs the console reading commands from stdin.
    ///
    /// # Errors
    /// Returns error if the input thread cannot start or a screen loop fails.
    pub async fn run(self) -> color_eyre::Result<()> {
        let input = spawn_stdin_reader().wrap_err("failed to start input reader")?;
        let exit = self.run_with_input(input).await?;
        debug!(?exit, "Console stopped");
        Ok(())
    }

    /// Runs the console with lines taken from `input`.
    ///
    /// Ends after sign-out, on `quit`, or when `input` closes.
    ///
    /// # Errors
    /// Returns error if the monthly budget loop fails.
    pub async fn run_with_input(
        mut self,
        mut input: mpsc::UnboundedReceiver<String>,
    ) -> color_eyre::Result<Exit> {
        let (nav_tx, mut nav_rx) = mpsc::unbounded_channel();
        let (main_tx, main_rx) = mpsc::unbounded_channel();
        let (flow, mut view) = MainFlow::new(
            main_rx,
            self.api.clone(),
            self.repository.clone(),
            self.launcher.clone(),
            Arc::new(ChannelNavigator::new(nav_tx)),
            self.clock.as_ref(),
        );
        let mut main_task = tokio::spawn(flow.run());

        info!("Console started");
        println!("{NAME} {VERSION}. Type `help` for commands.");

        let mut exit = Exit::Closed;
        loop {
            let session_event = match &mut self.expense {
                Some(session) => Either::Left(session.next_event()),
                None => Either::Right(std::future::pending()),
            };

            tokio::select! {
                result = &mut main_task => {
                    // Everything the loop sent before ending is already queued.
                    while let Ok(event) = nav_rx.try_recv() {
                        if self.handle_navigation(event).is_break() {
                            exit = Exit::SignedOut;
                        }
                    }
                    return Self::finish(result).map(|()| exit);
                }

                Some(event) = nav_rx.recv() => {
                    if self.handle_navigation(event).is_break() {
                        exit = Exit::SignedOut;
                    }
                }

                Ok(()) = view.is_loading.changed() => {
                    if *view.is_loading.borrow_and_update() {
                        println!("Loading...");
                    }
                }

                Ok(()) = view.monthly_budget.changed() => Self::print_budget(&mut view),

                event = session_event => self.handle_session_event(event, &main_tx),

                line = input.recv() => {
                    let Some(line) = line else {
                        info!("Input closed");
                        exit = Exit::InputClosed;
                        break;
                    };
                    if self.handle_line(&line, &main_tx).is_break() {
                        exit = Exit::Quit;
                        break;
                    }
                }
            }
        }

        info!(?exit, "Console exiting");
        Ok(exit)
    }

    fn finish(result: FlowResult) -> color_eyre::Result<()> {
        match result {
            Ok(Ok(())) => {
                info!("Budget screen closed");
                Ok(())
            }
            Ok(Err(e)) => {
                error!(error = %e, "Budget screen failed");
                Err(e).wrap_err("budget screen failed")
            }
            Err(e) => Err(e).wrap_err("budget screen task panicked"),
        }
    }

    fn screen(&self) -> Screen {
        if self.expense.is_some() {
            Screen::NewExpense
        } else {
            Screen::Main
        }
    }

    fn handle_line(
        &mut self,
        line: &str,
        main_tx: &mpsc::UnboundedSender<MainAction>,
    ) -> ControlFlow<()> {
        let command = match parse_command(self.screen(), line) {
            Ok(Some(command)) => command,
            Ok(None) => return ControlFlow::Continue(()),
            Err(e) => {
                println!("{e}");
                return ControlFlow::Continue(());
            }
        };

        debug!(?command, "Console command");

        match command {
            Command::Main(action) => send_main(main_tx, action),
            Command::Expense(action) => {
                if let Some(session) = &self.expense {
                    if matches!(action, NewExpenseAction::SelectAdd) {
                        println!("Submitting expense...");
                    }
                    if session.actions.send(action).is_err() {
                        warn!("Expense screen already closed");
                    }
                }
            }
            Command::PickSpreadsheet(id) => match self.repository.set_spreadsheet_id(Some(id)) {
                Ok(()) => send_main(main_tx, MainAction::Refresh),
                Err(e) => println!("Could not save the selection: {e}"),
            },
            Command::Back => {
                self.close_expense();
                send_main(main_tx, MainAction::Resume);
            }
            Command::Help => print!("{}", render::help_text(help(self.screen()))),
            Command::Quit => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    /// Applies a navigation request; breaks when the budget screen closes.
    fn handle_navigation(&mut self, event: NavigationEvent) -> ControlFlow<()> {
        match event {
            NavigationEvent::Navigate(Route::Transaction { monthly_budget }) => {
                self.open_expense(monthly_budget.as_ref());
            }
            NavigationEvent::Navigate(Route::DocumentPicker) => {
                match self.repository.spreadsheet_id() {
                    Some(id) => println!("Current spreadsheet: {id}"),
                    None => println!("No spreadsheet selected."),
                }
                println!("Type `pick <ID>` to choose a spreadsheet.");
            }
            NavigationEvent::Navigate(Route::About) => {
                println!("{NAME} {VERSION}");
                println!("Monthly household budget kept in a spreadsheet.");
            }
            NavigationEvent::Navigate(Route::LoadError) => {
                println!("Could not load the budget.");
                println!("Type `retry` to try again or `pick <ID>` to choose another spreadsheet.");
            }
            NavigationEvent::PopBackStack => {
                if self.expense.is_some() {
                    self.close_expense();
                } else {
                    println!("Signed out.");
                    return ControlFlow::Break(());
                }
            }
        }

        ControlFlow::Continue(())
    }

    fn open_expense(&mut self, monthly_budget: Option<&MonthlyBudget>) {
        let (actions, actions_rx) = mpsc::unbounded_channel();
        let (flow, state) = NewExpenseFlow::new(
            actions_rx,
            &self.categories,
            self.api.clone(),
            self.clock.as_ref(),
        );

        println!("New expense");
        if let Some(budget) = monthly_budget {
            println!(
                "Spent this month: {} of {}",
                budget.actual_expense.round_dp(2),
                budget.planned_expense.round_dp(2)
            );
        }
        print!("{}", render::expense_form(&state.borrow(), &self.categories));

        self.expense = Some(ExpenseSession {
            actions,
            state,
            task: tokio::spawn(flow.run()),
        });
    }

    fn close_expense(&mut self) {
        if self.expense.take().is_some() {
            debug!("Expense screen closed");
        }
    }

    fn handle_session_event(
        &mut self,
        event: SessionEvent,
        main_tx: &mpsc::UnboundedSender<MainAction>,
    ) {
        match event {
            SessionEvent::Changed => {
                if let Some(session) = &mut self.expense {
                    let state = session.state.borrow_and_update().clone();
                    print!("{}", render::expense_form(&state, &self.categories));
                }
            }
            SessionEvent::Finished(result) => {
                self.expense = None;
                match result {
                    Ok(Ok(())) => debug!("Expense flow finished"),
                    Ok(Err(e)) => {
                        error!(error = %e, "Expense flow failed");
                        println!("Could not add the expense: {e}");
                    }
                    Err(e) => error!(error = %e, "Expense flow task panicked"),
                }
                send_main(main_tx, MainAction::Resume);
            }
        }
    }

    fn print_budget(view: &mut MainView) {
        let Some(budget) = view.monthly_budget.borrow_and_update().clone() else {
            return;
        };
        let month_type = *view.month_type.borrow();

        println!("{}", render::month_header(month_type));
        print!("{}", render::budget_summary(&budget));
    }
}

fn send_main(main_tx: &mpsc::UnboundedSender<MainAction>, action: MainAction) {
    if main_tx.send(action).is_err() {
        warn!(?action, "Budget screen already closed");
    }
}

/// Reads stdin lines on a dedicated thread.
fn spawn_stdin_reader() -> std::io::Result<mpsc::UnboundedReceiver<String>> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read input");
                        break;
                    }
                }
            }
        })?;

    Ok(rx)
}
