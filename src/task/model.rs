//! Task data model

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

/// Timestamp layout used on disk and in list output
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A tracked to-do item
///
/// `id` is the 1-based position in the collection, not a stable identity:
/// deleting a task shifts every later id down by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,

    pub title: String,

    /// Local creation time, second precision
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,

    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a pending task stamped with the current local time
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Local::now().naive_local().trunc_subsecs(0),
            done: false,
        }
    }

    /// Status glyph shown in listings
    pub fn glyph(&self) -> &'static str {
        if self.done {
            "✅"
        } else {
            "⏳"
        }
    }

    /// Format as a single listing line
    pub fn to_list_line(&self) -> String {
        format!(
            "{} [{}] {} (created {})",
            self.glyph(),
            self.id,
            self.title,
            self.created_at.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Which tasks a listing yields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    PendingOnly,
}

impl ListFilter {
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::PendingOnly => !task.done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    Completed,
    AlreadyDone,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Reassign ids so they equal 1-based position
pub fn renumber(tasks: &mut [Task]) {
    for (index, task) in tasks.iter_mut().enumerate() {
        task.id = index as u32 + 1;
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    // Accepts an optional fractional part so hand-written files still load.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
    }
}
