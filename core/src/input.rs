use anyhow::{anyhow, Context, Result};

use crate::dialog::Answer;

pub const VERBS: &[&str] = &["add", "toggle", "edit", "remove", "answer", "list", "json"];
const ANSWERS: &[&str] = &["yes", "no", "dismiss"];

/// One line of a task script. Row numbers are 1-based positions in the
/// current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Edit(usize, String),
    Remove(usize),
    Answer(Answer),
    List,
    Json,
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Parses a script line. Blank lines and `#` comments yield `None`.
///
/// Everything after the row number (or after the verb, for `add`) is the
/// title, taken verbatim apart from the single separating space.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_word(trimmed);
    let verb = expand_key(verb, VERBS)?;

    let command = match verb.as_str() {
        "add" => Command::Add(non_empty(rest, "add needs a title")?),
        "toggle" => Command::Toggle(parse_row(rest)?),
        "remove" => Command::Remove(parse_row(rest)?),
        "edit" => {
            let (row, title) = split_word(rest);
            Command::Edit(parse_row(row)?, title.to_string())
        }
        "answer" => {
            let answer = expand_key(rest.trim(), ANSWERS)?;
            Command::Answer(match answer.as_str() {
                "yes" => Answer::Yes,
                "no" => Answer::No,
                _ => Answer::Dismissed,
            })
        }
        "list" => Command::List,
        "json" => Command::Json,
        other => return Err(anyhow!("Unhandled verb: '{}'", other)),
    };
    Ok(Some(command))
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

fn non_empty(s: &str, msg: &str) -> Result<String> {
    if s.is_empty() {
        Err(anyhow!("{}", msg))
    } else {
        Ok(s.to_string())
    }
}

fn parse_row(s: &str) -> Result<usize> {
    let s = s.trim();
    let row: usize = s
        .parse()
        .with_context(|| format!("Invalid row number: '{}'", s))?;
    if row == 0 {
        return Err(anyhow!("Row numbers start at 1"));
    }
    Ok(row)
}
