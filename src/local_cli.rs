//! Local command-line tool over a JSON todo file
//!
//! Flags select exactly one action: `-list`, `-add`, `-complete N`,
//! `-delete N` or `-get N`. Go-style single-dash long flags are accepted and
//! rewritten to their `--name` form before clap sees them.

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::todo::{TodoError, TodoList};

const BOOL_FLAGS: &[&str] = &["add", "list"];
const VALUE_FLAGS: &[&str] = &["complete", "delete", "get"];

/// Command-line flags of the local `todo` tool
#[derive(Parser, Debug, Default)]
#[command(name = "todo")]
#[command(about = "Manage a todo list stored in a JSON file ($TODO_FILE_NAME, default todo.json)")]
pub struct Cli {
    /// Add task to the todo list (from the arguments, or one line of stdin)
    #[arg(long)]
    pub add: bool,

    /// List all todo items
    #[arg(long)]
    pub list: bool,

    /// Mark a task as completed by task number
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub complete: usize,

    /// Delete a task by task number
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub delete: usize,

    /// Print a task as JSON by task number
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub get: usize,

    /// Task text for -add
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub task: Vec<String>,
}

/// The single operation selected by the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Complete(usize),
    Delete(usize),
    Get(usize),
}

/// Failures reported by the local CLI
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid option, see todo -h for help")]
    Usage,

    #[error("Could not open todo file: {0}")]
    Load(#[source] TodoError),

    #[error("Could not save the file: {0}")]
    Save(#[source] TodoError),

    #[error("Could not read the task: {0}")]
    ReadTask(#[source] std::io::Error),

    #[error("Could not read the task: task is empty")]
    EmptyTask,

    #[error("{0}")]
    Item(#[source] TodoError),

    #[error("Could not marshal the item: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Cli {
    /// Resolve the flags to exactly one action.
    ///
    /// Id flags only count when positive.
    pub fn action(&self) -> Result<Action, CliError> {
        let selected: Vec<Action> = [
            self.list.then_some(Action::List),
            self.add.then_some(Action::Add),
            (self.complete > 0).then_some(Action::Complete(self.complete)),
            (self.delete > 0).then_some(Action::Delete(self.delete)),
            (self.get > 0).then_some(Action::Get(self.get)),
        ]
        .into_iter()
        .flatten()
        .collect();

        match selected.as_slice() {
            [action] => Ok(*action),
            _ => Err(CliError::Usage),
        }
    }
}

/// Rewrite Go-style `-name` / `-name=value` flags to `--name` form.
///
/// Rewriting stops at the first positional argument or `--`, so task text
/// is passed through untouched.
pub fn normalize_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let mut out: Vec<String> = iter.next().into_iter().collect();
    let mut expect_value = false;
    let mut flags_done = false;

    for arg in iter {
        if flags_done || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            flags_done = true;
            out.push(arg);
            continue;
        }

        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            flags_done = true;
            out.push(arg);
            continue;
        };

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };

        if BOOL_FLAGS.contains(&name) || VALUE_FLAGS.contains(&name) {
            expect_value = VALUE_FLAGS.contains(&name) && !inline_value;
            out.push(format!("--{flag}"));
        } else {
            out.push(arg);
        }
    }

    out
}

/// Task text from the positional arguments, or one line of `input`
pub fn get_task(input: impl BufRead, args: &[String]) -> Result<String, CliError> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let line = input
        .lines()
        .next()
        .transpose()
        .map_err(CliError::ReadTask)?
        .unwrap_or_default();

    let task = line.trim_end_matches('\r').to_string();
    if task.trim().is_empty() {
        return Err(CliError::EmptyTask);
    }
    Ok(task)
}

/// Run the selected action against the list stored at `file`
pub fn run(
    cli: &Cli,
    file: &Path,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let action = cli.action()?;
    let mut list = TodoList::load(file).map_err(CliError::Load)?;
    tracing::debug!(?action, file = ?file, items = list.len(), "Running action");

    match action {
        Action::List => {
            write!(out, "{list}")?;
        }
        Action::Add => {
            let task = get_task(input, &cli.task)?;
            list.add(task);
            list.save(file).map_err(CliError::Save)?;
        }
        Action::Complete(id) => {
            list.complete(id).map_err(CliError::Item)?;
            list.save(file).map_err(CliError::Save)?;
        }
        Action::Delete(id) => {
            list.delete(id).map_err(CliError::Item)?;
            list.save(file).map_err(CliError::Save)?;
        }
        Action::Get(id) => {
            let item = list.get(id).map_err(CliError::Item)?;
            writeln!(out, "{}", serde_json::to_string_pretty(item)?)?;
        }
    }

    Ok(())
}
