//! Housekeeping -- cleaning tasks worked independently of the room board.

use serde::{Deserialize, Serialize};

/// Cleaning task states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HousekeepingStatus {
    #[default]
    Dirty,
    InProgress,
    Ready,
}

impl HousekeepingStatus {
    /// Return the display label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dirty => "Dirty",
            Self::InProgress => "InProgress",
            Self::Ready => "Ready",
        }
    }
}

/// Task urgency, as triaged by the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskPriority {
    #[default]
    Normal,
    Rush,
}

impl TaskPriority {
    /// Return the display label for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Rush => "Rush",
        }
    }
}

/// A cleaning task on the housekeeping queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousekeepingTask {
    /// Stable identifier.
    pub id: String,
    /// Room the task is for.
    pub room_number: String,
    /// Current task state.
    pub status: HousekeepingStatus,
    /// Urgency flag; rush tasks sort first on the queue.
    pub priority: TaskPriority,
    /// Attendant working the task, if dispatched.
    pub assigned_to: Option<String>,
    /// Free-form instructions ("deep clean", "replace towels").
    pub notes: Option<String>,
}
