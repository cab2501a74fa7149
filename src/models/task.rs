use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single entry in the task list.
///
/// `priority` is conventionally one of Low/Medium/High but any string is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub priority: String,
    // Required key; only its value may be null.
    #[serde(deserialize_with = "Option::deserialize")]
    pub due_date: Option<String>,
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, priority: impl Into<String>, due_date: Option<String>) -> Self {
        Self {
            title: title.into(),
            priority: priority.into(),
            due_date,
            completed: false,
        }
    }

    /// One-way: a completed task never goes back to pending.
    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    pub fn status_glyph(&self) -> &'static str {
        if self.completed { "✅" } else { "❌" }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "title": self.title,
            "priority": self.priority,
            "due_date": self.due_date,
            "completed": self.completed
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | Priority: {} | Due: {}",
            self.status_glyph(),
            self.title,
            self.priority,
            self.due_date.as_deref().unwrap_or("N/A")
        )
    }
}
