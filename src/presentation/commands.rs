//! Console command parsing.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::application::dto::{MainAction, NewExpenseAction};

/// Screen the console is showing; decides which commands are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Monthly budget overview.
    Main,
    /// Expense entry form.
    NewExpense,
}

/// Parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Intent for the monthly budget loop.
    Main(MainAction),
    /// Intent for the expense entry loop.
    Expense(NewExpenseAction),
    /// Select a spreadsheet by id and reload.
    PickSpreadsheet(String),
    /// Leave the expense entry form.
    Back,
    /// Print available commands.
    Help,
    /// Exit the program.
    Quit,
}

/// Command parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Command name not known on the current screen.
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    /// Command given without its argument.
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    /// Date not in ISO format.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Amount that is not a decimal number.
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
}

const MAIN_HELP: &[(&str, &str)] = &[
    ("refresh", "reload the selected month"),
    ("prev / next", "show the previous or next month"),
    ("retry", "try loading again after an error"),
    ("open", "open the spreadsheet in the browser"),
    ("add", "record a new expense"),
    ("pick [ID]", "choose a spreadsheet"),
    ("about", "show version information"),
    ("signout", "forget the spreadsheet and sign out"),
    ("quit", "exit"),
];

const EXPENSE_HELP: &[(&str, &str)] = &[
    ("date YYYY-MM-DD", "set the expense date"),
    ("category NAME", "set the category"),
    ("value AMOUNT", "set the amount, `12,50` or `12.50`"),
    ("add", "submit the expense"),
    ("back", "return to the monthly budget"),
    ("quit", "exit"),
];

/// Returns `(usage, description)` pairs for `screen`.
#[must_use]
pub const fn help(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Main => MAIN_HELP,
        Screen::NewExpense => EXPENSE_HELP,
    }
}

/// Parses an amount typed with either a comma or a dot as decimal separator.
///
/// Returns `None` for empty or malformed input.
#[must_use]
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

/// Parses one input line; blank lines yield `Ok(None)`.
///
/// # Errors
/// Returns error if the command is unknown on `screen` or its argument is invalid.
pub fn parse_command(screen: Screen, line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };
    let name = name.to_lowercase();

    match (name.as_str(), screen) {
        ("help" | "?", _) => Ok(Some(Command::Help)),
        ("quit" | "exit", _) => Ok(Some(Command::Quit)),
        (_, Screen::Main) => parse_main(&name, arg).map(Some),
        (_, Screen::NewExpense) => parse_expense(&name, arg).map(Some),
    }
}

fn parse_main(name: &str, arg: &str) -> Result<Command, CommandError> {
    let action = match name {
        "refresh" | "r" => MainAction::Refresh,
        "prev" | "p" => MainAction::SelectPrevMonth,
        "next" | "n" => MainAction::SelectNextMonth,
        "retry" => MainAction::TryAgain,
        "open" => MainAction::OpenSpreadsheet,
        "add" | "a" => MainAction::AddTransaction,
        "pick" if !arg.is_empty() => return Ok(Command::PickSpreadsheet(arg.to_string())),
        "pick" => MainAction::PickDocumentAgain,
        "about" => MainAction::SelectAbout,
        "signout" => MainAction::SignOut,
        _ => return Err(CommandError::Unknown(name.to_string())),
    };
    Ok(Command::Main(action))
}

fn parse_expense(name: &str, arg: &str) -> Result<Command, CommandError> {
    let action = match name {
        "date" | "d" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("date"));
            }
            let date = NaiveDate::parse_from_str(arg, "%Y-%m-%d")
                .map_err(|_| CommandError::InvalidDate(arg.to_string()))?;
            NewExpenseAction::SelectDate(date)
        }
        "category" | "c" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("category"));
            }
            NewExpenseAction::SelectCategory(arg.to_string())
        }
        "value" | "v" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument("value"));
            }
            let value =
                parse_amount(arg).ok_or_else(|| CommandError::InvalidAmount(arg.to_string()))?;
            NewExpenseAction::SelectValue(value)
        }
        "add" | "a" => NewExpenseAction::SelectAdd,
        "back" | "b" => return Ok(Command::Back),
        _ => return Err(CommandError::Unknown(name.to_string())),
    };
    Ok(Command::Expense(action))
}
