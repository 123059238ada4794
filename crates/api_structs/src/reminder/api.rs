use crate::dtos::PlantReminderDTO;
use planto_domain::{CareDetails, PlantReminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantReminderResponse {
    pub reminder: PlantReminderDTO,
}

impl PlantReminderResponse {
    pub fn new(reminder: PlantReminder) -> Self {
        Self {
            reminder: PlantReminderDTO::new(reminder),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRemindersResponse {
    pub reminders: Vec<PlantReminderDTO>,
}

impl PlantRemindersResponse {
    pub fn new(reminders: Vec<PlantReminder>) -> Self {
        Self {
            reminders: reminders.into_iter().map(PlantReminderDTO::new).collect(),
        }
    }
}

pub mod create_reminder {
    use super::*;

    pub type RequestBody = CareDetails;

    pub type APIResponse = PlantReminderResponse;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = PlantRemindersResponse;
}

pub mod get_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = PlantReminderResponse;
}

pub mod update_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type RequestBody = CareDetails;

    pub type APIResponse = PlantReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    /// `reminder` is `None` when there was no reminder with the given id
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: Option<PlantReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminder: Option<PlantReminder>) -> Self {
            Self {
                reminder: reminder.map(PlantReminderDTO::new),
            }
        }
    }
}

pub mod delete_reminders_at {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Positions in the list as returned by `get_reminders`
        pub positions: Vec<usize>,
    }

    pub type APIResponse = PlantRemindersResponse;
}

pub mod clear_reminders {
    use super::*;

    pub type APIResponse = PlantRemindersResponse;
}

pub mod sync_reminder_alerts {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct FailedAlertDTO {
        pub reminder_id: ID,
        pub reason: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub scheduled: usize,
        pub failed: Vec<FailedAlertDTO>,
    }
}

pub mod set_reminder_watered {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub watered: bool,
    }

    pub type APIResponse = crate::progress::api::get_daily_progress::APIResponse;
}
