use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tabled::{settings::Style, Table, Tabled};
use todolist_core::{parse_command, Command, RecordingDialogs, Screen, TextField};
use tracing::{debug, warn};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Title")]
    title: String,
}

/// Replays a task script against a fresh screen, writing alerts, prompts and
/// listings to `out`.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<Screen<RecordingDialogs>> {
    let mut screen = Screen::new(RecordingDialogs::new());

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Could not read line {}", line_no))?;
        let Some(command) =
            parse_command(&line).with_context(|| format!("Line {}: '{}'", line_no, line))?
        else {
            continue;
        };
        debug!(line_no, ?command, "running script command");
        execute(&mut screen, command, out)?;
        flush_alerts(&mut screen, out)?;
    }

    let pending = screen.store().dialogs().prompts.len();
    if pending > 0 {
        warn!(pending, "script ended with unanswered removal prompts");
    }
    Ok(screen)
}

fn execute<W: Write>(
    screen: &mut Screen<RecordingDialogs>,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Add(title) => {
            *screen.input_mut() = TextField::with_text(&title);
            screen.submit_input();
            screen.input_mut().clear();
        }
        Command::Toggle(row) => screen.toggle_row(row - 1),
        Command::Edit(row, title) => {
            screen.start_editing_row(row - 1);
            if let Some(draft) = screen.draft_mut(row - 1) {
                *draft = TextField::with_text(&title);
            }
            screen.commit_row(row - 1);
        }
        Command::Remove(row) => {
            if !screen.remove_row(row - 1) {
                debug!(row, "nothing to remove");
            } else if let Some(prompt) = screen.store().dialogs().prompts.last() {
                writeln!(
                    out,
                    "? {}: {} (answer yes/no/dismiss)",
                    prompt.title(),
                    prompt.message()
                )?;
            }
        }
        Command::Answer(answer) => match screen.dialogs_mut().take_prompt() {
            Some(prompt) => screen.resolve_removal(prompt, answer),
            None => writeln!(out, "No question to answer.")?,
        },
        Command::List => print_list(screen, out)?,
        Command::Json => {
            let json = serde_json::to_string_pretty(screen.tasks())?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

fn flush_alerts<W: Write>(screen: &mut Screen<RecordingDialogs>, out: &mut W) -> Result<()> {
    for alert in screen.dialogs_mut().alerts.drain(..) {
        writeln!(out, "! {}: {}", alert.title(), alert.message())?;
    }
    Ok(())
}

fn print_list<W: Write>(screen: &Screen<RecordingDialogs>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", screen.counter_label())?;
    if screen.tasks().is_empty() {
        writeln!(out, "No tasks found.")?;
        return Ok(());
    }

    let rows: Vec<TaskRow> = screen
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| TaskRow {
            row: i + 1,
            done: if task.done { "✓" } else { "" },
            title: task.title.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    writeln!(out, "{}", table)?;
    Ok(())
}
