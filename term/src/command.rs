//! Parsing and running the commands typed at the `>` prompt.

use std::io::Write;
use std::str::FromStr;

use todo_core::view::{self, Style};
use todo_core::{Confirmer, Notifier, TodoController, Transport};

use crate::error::TermError;

pub const HELP: &str = "\
commands:
  add <title>   create a todo (plain `add` retries the last unsent title)
  toggle <n>    mark row n done / not done
  rm <n>        delete row n
  list          show the list
  reload        fetch the list from the server
  help          show this help
  quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` resubmits the draft kept from a failed add.
    Add(Option<String>),
    Toggle(usize),
    Remove(usize),
    List,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Command {
    type Err = TermError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "add" | "a" => Ok(Command::Add((!rest.is_empty()).then(|| rest.to_string()))),
            "toggle" | "t" | "done" => row_number(rest).map(Command::Toggle),
            "rm" | "delete" | "d" => row_number(rest).map(Command::Remove),
            "list" | "ls" | "" => Ok(Command::List),
            "reload" | "r" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(TermError::UnknownCommand(other.to_string())),
        }
    }
}

fn row_number(arg: &str) -> Result<usize, TermError> {
    if arg.is_empty() {
        return Err(TermError::MissingRow);
    }
    arg.parse().map_err(|_| TermError::BadRow(arg.to_string()))
}

/// Run one command against the controller and print the resulting list.
pub fn dispatch<T, C, N, W>(
    controller: &mut TodoController<T, C, N>,
    command: Command,
    style: Style,
    out: &mut W,
) -> Result<Flow, TermError>
where
    T: Transport,
    C: Confirmer,
    N: Notifier,
    W: Write,
{
    match command {
        Command::Add(title) => {
            if let Some(title) = title {
                controller.set_draft(title);
            }
            controller.add();
        }
        Command::Toggle(number) => {
            let id = row_id(controller, number)?;
            controller.toggle_completion(id);
        }
        Command::Remove(number) => {
            let id = row_id(controller, number)?;
            controller.remove(id);
        }
        Command::List => {}
        Command::Reload => controller.load(),
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    }

    write!(out, "{}", view::render(controller.state(), style))?;
    Ok(Flow::Continue)
}

fn row_id<T, C, N>(controller: &TodoController<T, C, N>, number: usize) -> Result<i64, TermError>
where
    T: Transport,
    C: Confirmer,
    N: Notifier,
{
    view::id_at(controller.state(), number).ok_or(TermError::NoSuchRow(number))
}
