//! Text rendering of the client state.

use std::fmt::Write;

use crate::controller::TodoState;
use crate::types::Todo;

pub const HEADING: &str = "TODO APP";
pub const EMPTY_STATE: &str = "No todos yet. Create a new todo.";

const STRIKE: &str = "\x1b[9;2m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Completed titles are struck through and dimmed.
    Ansi,
}

/// One displayed line. `number` is 1-based and is what the user types to
/// address the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub number: usize,
    pub id: i64,
    pub title: &'a str,
    pub completed: bool,
}

pub fn rows(todos: &[Todo]) -> Vec<Row<'_>> {
    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| Row {
            number: i + 1,
            id: todo.id,
            title: &todo.title,
            completed: todo.is_completed,
        })
        .collect()
}

/// Id of the todo shown as row `number`.
pub fn id_at(state: &TodoState, number: usize) -> Option<i64> {
    number
        .checked_sub(1)
        .and_then(|i| state.todos.get(i))
        .map(|t| t.id)
}

pub fn render(state: &TodoState, style: Style) -> String {
    let mut out = format!("{HEADING}\n\n");
    if state.todos.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
        return out;
    }

    for row in rows(&state.todos) {
        let mark = if row.completed { 'x' } else { ' ' };
        let _ = match (row.completed, style) {
            (true, Style::Ansi) => writeln!(out, "{:>3}. [{mark}] {STRIKE}{}{RESET}", row.number, row.title),
            _ => writeln!(out, "{:>3}. [{mark}] {}", row.number, row.title),
        };
    }
    out
}
