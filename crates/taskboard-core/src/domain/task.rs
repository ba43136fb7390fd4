//! Task Entity
//!
//! A personal task as the server returns it. The client never creates ids.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned task identifier
pub type TaskId = String;

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// pending <-> completed
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

/// Which subset of tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Filter buttons, in display order
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Status sent as the `status` query parameter; `None` for `all`
    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(TaskStatus::Pending),
            StatusFilter::Completed => Some(TaskStatus::Completed),
        }
    }
}

/// Creation time as the server sends it: a date string or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Calendar day (UTC), accepting RFC 3339, `YYYY-MM-DD` or epoch millis
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Timestamp::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms).map(|ts| ts.date_naive()),
            Timestamp::Text(raw) => {
                let raw = raw.trim();
                if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
                    return Some(ts.date_naive());
                }
                NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d").ok()
            }
        }
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Timestamp::Text(raw.to_string())
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    /// Raw server timestamp; see [`Task::created_on`]
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Incoming task shape. Servers may send `_id`, `id` or both (virtuals).
#[derive(Deserialize)]
struct TaskWire {
    #[serde(rename = "_id", default)]
    object_id: Option<TaskId>,
    #[serde(default)]
    id: Option<TaskId>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: TaskStatus,
    #[serde(rename = "createdAt", default)]
    created_at: Option<Timestamp>,
}

impl TryFrom<TaskWire> for Task {
    type Error = String;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        let id = wire.object_id.or(wire.id).ok_or("missing field `_id`")?;
        Ok(Task {
            id,
            title: wire.title,
            description: wire.description,
            status: wire.status,
            created_at: wire.created_at,
        })
    }
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Description worth showing (empty strings count as absent)
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Calendar day the task was created
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.as_ref()?.date()
    }

    /// "Created: M/D/YYYY", or None when the timestamp is missing or unreadable
    pub fn created_label(&self) -> Option<String> {
        self.created_on()
            .map(|day| format!("Created: {}", day.format("%-m/%-d/%Y")))
    }
}
