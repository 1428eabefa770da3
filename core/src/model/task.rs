use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a task, taken from its creation time in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }
}

/// Hands out task ids based on the wall clock.
///
/// Two tasks created within the same millisecond would collide on a raw
/// timestamp, so the generator never returns a value lower than `last + 1`.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> TaskId {
        self.next_from(Utc::now().timestamp_millis())
    }

    fn next_from(&mut self, now_millis: i64) -> TaskId {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        TaskId(id)
    }
}
