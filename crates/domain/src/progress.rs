use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Marks that the plant of a `PlantReminder` has been watered
#[derive(Debug, Clone, PartialEq)]
pub struct WateringLogEntry {
    pub reminder_id: ID,
    /// Timestamp in millis
    pub watered_at: i64,
}

impl Entity for WateringLogEntry {
    fn id(&self) -> &ID {
        &self.reminder_id
    }
}

/// How many of the tracked plants have been watered today
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    pub completed: usize,
    pub total: usize,
}

impl DailyProgress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Value between 0 and 1
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let fraction = self.completed as f64 / self.total as f64;
        fraction.max(0.0).min(1.0)
    }

    pub fn is_goal_completed(&self) -> bool {
        self.total > 0 && self.fraction() >= 1.0
    }
}
