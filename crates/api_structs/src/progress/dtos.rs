use planto_domain::DailyProgress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgressDTO {
    pub completed: usize,
    pub total: usize,
    pub fraction: f64,
    pub goal_completed: bool,
}

impl DailyProgressDTO {
    pub fn new(progress: DailyProgress) -> Self {
        Self {
            completed: progress.completed,
            total: progress.total,
            fraction: progress.fraction(),
            goal_completed: progress.is_goal_completed(),
        }
    }
}
