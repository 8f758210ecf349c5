use std::io::{self, BufRead};
use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::cli::{charts, commands, forms, output};
use crate::cli::commands::{Command, HELP_TEXT};
use crate::config::Settings;
use crate::core::notify::{LogSink, NotificationSink};
use crate::core::LedgerManager;
use crate::errors::LedgerError;
use crate::ledger::{category_totals, expenses_by_category, monthly_series, reports};
use crate::storage::JsonStorage;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

enum CliMode {
    Interactive,
    Script,
}

/// Entry point for the binary. `BILLBUDDY_SCRIPT` selects the line-oriented
/// script mode; otherwise the interactive menus run.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("BILLBUDDY_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let storage = JsonStorage::new_default()?;
    let data_dir = storage.base_dir().to_path_buf();
    let settings = Settings::load(&data_dir);
    let mut manager = LedgerManager::open(Box::new(storage))?;

    if settings.notifications_enabled {
        let sink: Box<dyn NotificationSink> = match mode {
            CliMode::Interactive => Box::new(output::TerminalNotifier),
            CliMode::Script => Box::new(LogSink),
        };
        manager.set_notifier(Some(sink));
    }

    let result = match mode {
        CliMode::Interactive => run_interactive(&mut manager, data_dir, settings),
        CliMode::Script => run_script(&mut manager),
    };
    manager.close();
    result
}

fn run_script(manager: &mut LedgerManager) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match commands::parse(&line) {
            Ok(Some(Command::Exit)) => break,
            Ok(Some(command)) => execute(manager, command),
            Ok(None) => {}
            Err(err) => output::warning(err.message),
        }
    }
    Ok(())
}

fn execute(manager: &mut LedgerManager, command: Command) {
    match command {
        Command::AddUser { name } => match manager.add_user(&name) {
            Some(added) => output::success(format!("Added user {added}")),
            None => output::warning("Invalid input ignored"),
        },
        Command::AddExpense {
            description,
            amount,
            split_between,
        } => match manager.add_group_expense(&description, amount, split_between) {
            Some(_) => output::success("Expense added"),
            None => output::warning("Invalid input ignored"),
        },
        Command::AddPersonal {
            description,
            amount,
            category,
        } => match manager.add_personal_expense(&description, amount, &category) {
            Some(_) => output::success("Personal expense added"),
            None => output::warning("Invalid input ignored"),
        },
        Command::Settle { user, amount } => match manager.add_settlement(&user, amount) {
            Some(_) => output::success("Settlement recorded"),
            None => output::warning("Invalid input ignored"),
        },
        Command::Users => {
            for user in manager.ledger().user_names() {
                println!("{user}");
            }
        }
        Command::Balances => print_balances(manager),
        Command::Balance { user } => {
            println!("{user}: {:.2}", manager.balance_of(&user));
        }
        Command::Summary { month } => print_summary(manager, month),
        Command::Series => {
            let series = monthly_series(&manager.ledger().personal_expenses);
            for line in charts::monthly_chart(&series) {
                println!("{line}");
            }
        }
        Command::Help => println!("{HELP_TEXT}"),
        Command::Exit => {}
    }
}

fn print_balances(manager: &LedgerManager) {
    let ledger = manager.ledger();
    if ledger.users.is_empty() {
        output::info("No users yet");
        return;
    }
    for user in ledger.user_names() {
        println!("{user}: {:.2}", manager.balance_of(user));
    }
}

fn print_summary(manager: &LedgerManager, month: Option<u32>) {
    let expenses = &manager.ledger().personal_expenses;
    let grouped = expenses_by_category(expenses, month);
    if grouped.is_empty() {
        output::info("No personal expenses recorded");
        return;
    }
    if let Some(month) = month {
        output::section(format!("Spending in {}", reports::month_label(month)));
    } else {
        output::section("Spending by category");
    }
    for line in charts::category_breakdown(&category_totals(&grouped)) {
        println!("{line}");
    }
    let total: f64 = grouped
        .values()
        .flatten()
        .map(|expense| expense.amount)
        .sum();
    output::info(format!("Total: {total:.2}"));
}

const MAIN_MENU: [&str; 9] = [
    "Add shared expense",
    "Show balances",
    "Add personal expense",
    "Monthly summary",
    "Yearly chart",
    "Settle up",
    "Users",
    "Settings",
    "Exit",
];

fn run_interactive(
    manager: &mut LedgerManager,
    data_dir: PathBuf,
    mut settings: Settings,
) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    output::section("BillBuddy");

    loop {
        let Some(choice) = forms::select(&theme, "Menu", &MAIN_MENU)? else {
            return Ok(());
        };
        match MAIN_MENU[choice] {
            "Add shared expense" => add_shared_expense(manager, &theme)?,
            "Show balances" => print_balances(manager),
            "Add personal expense" => add_personal_expense(manager, &theme)?,
            "Monthly summary" => monthly_summary(manager, &theme)?,
            "Yearly chart" => execute(manager, Command::Series),
            "Settle up" => settle_up(manager, &theme)?,
            "Users" => users_menu(manager, &theme)?,
            "Settings" => settings_menu(manager, &theme, &data_dir, &mut settings)?,
            _ => break,
        }
    }
    Ok(())
}

fn add_shared_expense(
    manager: &mut LedgerManager,
    theme: &ColorfulTheme,
) -> Result<(), CliError> {
    let names: Vec<String> = manager
        .ledger()
        .user_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    if names.is_empty() {
        output::warning("Add users before splitting an expense");
        return Ok(());
    }
    let description = forms::prompt_text(theme, "Description")?;
    let amount = forms::prompt_amount(theme, "Amount")?;
    let items: Vec<&str> = names.iter().map(String::as_str).collect();
    let picked = forms::multi_select(theme, "Split between", &items)?;
    let split_between: Vec<String> = picked.into_iter().map(|i| names[i].clone()).collect();

    match amount.and_then(|amount| manager.add_group_expense(&description, amount, split_between))
    {
        Some(_) => output::success("Expense added"),
        None => output::warning("Invalid input ignored"),
    }
    Ok(())
}

fn add_personal_expense(
    manager: &mut LedgerManager,
    theme: &ColorfulTheme,
) -> Result<(), CliError> {
    let description = forms::prompt_text(theme, "Description")?;
    let amount = forms::prompt_amount(theme, "Amount")?;
    let category = forms::prompt_text(theme, "Category")?;

    match amount.and_then(|amount| manager.add_personal_expense(&description, amount, &category)) {
        Some(_) => output::success("Personal expense added"),
        None => output::warning("Invalid input ignored"),
    }
    Ok(())
}

fn settle_up(manager: &mut LedgerManager, theme: &ColorfulTheme) -> Result<(), CliError> {
    let names: Vec<String> = manager
        .ledger()
        .user_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let items: Vec<&str> = names.iter().map(String::as_str).collect();
    let Some(choice) = forms::select(theme, "Who is settling?", &items)? else {
        output::warning("No users yet");
        return Ok(());
    };
    let amount = forms::prompt_amount(theme, "Amount")?;

    match amount.and_then(|amount| manager.add_settlement(&names[choice], amount)) {
        Some(_) => output::success("Settlement recorded"),
        None => output::warning("Invalid input ignored"),
    }
    Ok(())
}

fn monthly_summary(manager: &LedgerManager, theme: &ColorfulTheme) -> Result<(), CliError> {
    let mut items: Vec<&str> = (0..12).map(reports::month_label).collect();
    items.push("All months");
    let Some(choice) = forms::select(theme, "Month", &items)? else {
        return Ok(());
    };
    let month = if choice < 12 { Some(choice as u32) } else { None };
    print_summary(manager, month);
    Ok(())
}

fn users_menu(manager: &mut LedgerManager, theme: &ColorfulTheme) -> Result<(), CliError> {
    for user in manager.ledger().user_names() {
        println!("{user}");
    }
    let name = forms::prompt_text(theme, "Add user (blank to skip)")?;
    if let Some(added) = manager.add_user(&name) {
        output::success(format!("Added user {added}"));
    }
    Ok(())
}

fn settings_menu(
    manager: &mut LedgerManager,
    theme: &ColorfulTheme,
    data_dir: &std::path::Path,
    settings: &mut Settings,
) -> Result<(), CliError> {
    let enabled = forms::confirm(
        theme,
        "Enable notifications?",
        settings.notifications_enabled,
    )?;
    settings.notifications_enabled = enabled;
    settings.save(data_dir)?;
    manager.set_notifier(if enabled {
        Some(Box::new(output::TerminalNotifier))
    } else {
        None
    });
    output::success("Settings saved");
    Ok(())
}
