//! Line-oriented driver for the app screens.
//!
//! Each input line is one command. After every command the mounted screen is
//! rendered again. API failures are never printed here; the views log them.
//! Only input the host cannot understand is reported back to the user.

use std::io::{self, BufRead, Write};

use product_core::{Action, App, FormError, ProductId, Transport};
use thiserror::Error;
use tracing::warn;

pub const HELP: &str = "\
commands:
  create                 open an empty form
  edit <id>              open the form for product <id>
  delete <id>            delete product <id>
  set <desc|price> TEXT  change a form field
  submit                 create or update the product in the form
  open <path>            go to /, /create or /edit/<id>
  show                   render the current screen again
  help                   this text
  quit                   leave
";

const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(Action),
    Open(String),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a product id")]
    InvalidId(String),

    #[error(transparent)]
    Form(#[from] FormError),
}

/// Split off the first word; the remainder is trimmed.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<ProductId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let (word, rest) = split_word(line.trim());
    let command = match word {
        "create" => Command::Action(Action::Create),
        "edit" => Command::Action(Action::Edit(parse_id("edit", rest)?)),
        "delete" => Command::Action(Action::Delete(parse_id("delete", rest)?)),
        "set" => {
            let (field, value) = split_word(rest);
            if field.is_empty() {
                return Err(CommandError::MissingArgument("set"));
            }
            Command::Action(Action::SetField(field.parse()?, value.to_string()))
        }
        "submit" => Command::Action(Action::Submit),
        "open" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("open"));
            }
            Command::Open(rest.to_string())
        }
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

/// Run until `quit` or end of input.
pub fn run<T, R, W>(app: &mut App<T>, input: R, mut output: W) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    write!(output, "{}{PROMPT}", app.render())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => write!(output, "{HELP}")?,
            Ok(Command::Show) => write!(output, "{}", app.render())?,
            Ok(Command::Open(path)) => match app.open(&path) {
                Ok(()) => write!(output, "{}", app.render())?,
                Err(err) => writeln!(output, "error: {err}")?,
            },
            Ok(Command::Action(action)) => match app.dispatch(action) {
                Ok(()) => write!(output, "{}", app.render())?,
                Err(err) => writeln!(output, "error: {err}")?,
            },
            Err(err) => {
                warn!(input = %line, error = %err, "rejected command");
                writeln!(output, "error: {err}")?;
            }
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    Ok(())
}
