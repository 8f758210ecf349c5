//! Line-oriented commands for script mode.

/// A parsed script-mode command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddUser { name: String },
    AddExpense {
        description: String,
        amount: f64,
        split_between: Vec<String>,
    },
    AddPersonal {
        description: String,
        amount: f64,
        category: String,
    },
    Settle { user: String, amount: f64 },
    Users,
    Balances,
    Balance { user: String },
    /// Month is 0-based; the script syntax takes 1-12.
    Summary { month: Option<u32> },
    Series,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let tokens = shell_words::split(trimmed)
        .map_err(|err| ParseError::new(format!("unbalanced quotes: {err}")))?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name.as_str() {
        "add-user" => match args {
            [user] => Command::AddUser { name: user.clone() },
            _ => return Err(ParseError::new("usage: add-user NAME")),
        },
        "add-expense" => match args {
            [description, amount, split] => Command::AddExpense {
                description: description.clone(),
                amount: parse_amount(amount)?,
                split_between: split
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
            _ => return Err(ParseError::new("usage: add-expense DESC AMOUNT USER[,USER...]")),
        },
        "add-personal" => match args {
            [description, amount, category] => Command::AddPersonal {
                description: description.clone(),
                amount: parse_amount(amount)?,
                category: category.clone(),
            },
            _ => return Err(ParseError::new("usage: add-personal DESC AMOUNT CATEGORY")),
        },
        "settle" => match args {
            [user, amount] => Command::Settle {
                user: user.clone(),
                amount: parse_amount(amount)?,
            },
            _ => return Err(ParseError::new("usage: settle USER AMOUNT")),
        },
        "users" => Command::Users,
        "balances" => Command::Balances,
        "balance" => match args {
            [user] => Command::Balance { user: user.clone() },
            _ => return Err(ParseError::new("usage: balance USER")),
        },
        "summary" => match args {
            [] => Command::Summary { month: None },
            [month] => Command::Summary {
                month: Some(parse_month(month)?),
            },
            _ => return Err(ParseError::new("usage: summary [MONTH 1-12]")),
        },
        "series" => Command::Series,
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => return Err(ParseError::new(format!("unknown command `{other}`"))),
    };
    Ok(Some(command))
}

pub const HELP_TEXT: &str = "\
add-user NAME                       add a group participant
add-expense DESC AMOUNT USERS       add a shared expense (USERS comma-separated)
add-personal DESC AMOUNT CATEGORY   add a personal expense dated today
settle USER AMOUNT                  record a settlement payment
users                               list participants
balances                            show every participant's balance
balance USER                        show one participant's balance
summary [MONTH]                     category breakdown, optionally one month (1-12)
series                              12-month personal spending chart
help                                show this help
exit                                quit";

fn parse_amount(raw: &str) -> Result<f64, ParseError> {
    raw.parse::<f64>()
        .map_err(|_| ParseError::new(format!("`{raw}` is not an amount")))
}

fn parse_month(raw: &str) -> Result<u32, ParseError> {
    match raw.parse::<u32>() {
        Ok(month @ 1..=12) => Ok(month - 1),
        _ => Err(ParseError::new(format!("`{raw}` is not a month (1-12)"))),
    }
}
