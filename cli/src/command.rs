//! Line commands understood by the interactive loop.

use thiserror::Error;

/// Rows are addressed by their 1-based position in the last rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`; a bare `add` resubmits what is left in the input field.
    Add(Option<String>),
    Toggle(usize),
    Edit(usize),
    /// Replace the text of the row being edited.
    Type(String),
    Save,
    Cancel,
    Delete(usize),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),

    #[error("`{0}` is not a row number")]
    BadRow(String),

    #[error("`type` needs the new text")]
    MissingText,
}

pub const HELP: &str = "\
commands:
  add <text>     create a todo (bare `add` retries the last input)
  toggle <n>     flip completion of row n
  edit <n>       start editing row n
  type <text>    replace the text being edited
  save           save the edit
  cancel         discard the edit
  delete <n>     delete row n
  reload         fetch the list again
  help           show this help
  quit           exit";

pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let command = match word {
        "add" | "a" => Command::Add((!rest.is_empty()).then(|| rest.to_string())),
        "toggle" | "t" => Command::Toggle(row("toggle", rest)?),
        "edit" | "e" => Command::Edit(row("edit", rest)?),
        "type" => {
            if rest.is_empty() {
                return Err(CommandError::MissingText);
            }
            Command::Type(rest.to_string())
        }
        "save" | "s" => Command::Save,
        "cancel" | "c" => Command::Cancel,
        "delete" | "rm" | "d" => Command::Delete(row("delete", rest)?),
        "reload" | "r" => Command::Reload,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn row(name: &'static str, arg: &str) -> Result<usize, CommandError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(CommandError::MissingRow(name));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadRow(arg.to_string())),
    }
}
