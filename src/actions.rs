//! Client CLI actions
//!
//! Each action talks to the API through [`TodoClient`] and writes its
//! human-readable result to `out`, so the binary and the tests share them.

use chrono::Local;
use std::io::Write;

use crate::client::{parse_id, ClientError, TodoClient};
use crate::todo::Item;

/// Local-time format used by `view`
const TIME_FORMAT: &str = "%b/%d @%H:%M";

/// Minimum column width for `list`
const MIN_COLUMN_WIDTH: usize = 4;

/// Failure of a client action
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ActionError {
    /// The underlying API client error, if any
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            Self::Output(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ActionError>;

/// `add <text...>`
pub async fn add_action(out: &mut impl Write, client: &TodoClient, args: &[String]) -> Result<()> {
    let task = args.join(" ");
    client.add(&task).await?;
    writeln!(out, "Task: {task}, added to the list")?;
    Ok(())
}

/// `list`
pub async fn list_action(out: &mut impl Write, client: &TodoClient) -> Result<()> {
    let items = client.get_all().await?;
    print_all(out, &items)?;
    Ok(())
}

/// `view <id>`
pub async fn view_action(out: &mut impl Write, client: &TodoClient, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let item = client.get_one(id).await?;
    print_one(out, &item)?;
    Ok(())
}

/// `complete <id>`
pub async fn complete_action(out: &mut impl Write, client: &TodoClient, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    client.complete(id).await?;
    writeln!(out, "Item No {id} set as completed")?;
    Ok(())
}

/// `remove <id>`
pub async fn remove_action(out: &mut impl Write, client: &TodoClient, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    client.delete(id).await?;
    writeln!(out, "Item No {id} removed")?;
    Ok(())
}

/// Rows of `<done> <id> <task>` in left-aligned columns
fn print_all(out: &mut impl Write, items: &[Item]) -> std::io::Result<()> {
    let ids: Vec<String> = (1..=items.len()).map(|k| k.to_string()).collect();
    let id_width = ids
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN_WIDTH);

    for (item, id) in items.iter().zip(&ids) {
        let done = if item.done { "X" } else { "-" };
        writeln!(
            out,
            "{done:<w0$}{id:<w1$}{}",
            item.task,
            w0 = MIN_COLUMN_WIDTH,
            w1 = id_width
        )?;
    }
    Ok(())
}

fn print_one(out: &mut impl Write, item: &Item) -> std::io::Result<()> {
    let created = item.created_at.with_timezone(&Local).format(TIME_FORMAT);
    let completed = if item.done { "Yes" } else { "No" };

    writeln!(out, "Task:       {}", item.task)?;
    writeln!(out, "Created at: {created}")?;
    writeln!(out, "Completed:  {completed}")?;
    Ok(())
}
