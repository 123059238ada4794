mod base;
mod notification;
mod options;
mod progress;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use notification::NotificationClient;
use options::OptionsClient;
pub use planto_api_structs::dtos::*;
pub use planto_api_structs::sync_reminder_alerts::FailedAlertDTO;
pub use planto_domain::{AuthorizationStatus, CareDetails, CareOptions, WateringCadence, ID};
use progress::ProgressClient;
use reminder::ReminderClient;
pub use reminder::{SetReminderWateredInput, UpdateReminderInput};
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use planto_api_structs::dtos::DailyProgressDTO as DailyProgress;
pub use planto_api_structs::dtos::PlantReminderDTO as PlantReminder;

/// Planto SDK
///
/// The SDK contains methods for interacting with the Planto server API.
#[derive(Clone)]
pub struct PlantoSDK {
    pub notification: NotificationClient,
    pub options: OptionsClient,
    pub progress: ProgressClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl PlantoSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));

        Self {
            notification: NotificationClient::new(base.clone()),
            options: OptionsClient::new(base.clone()),
            progress: ProgressClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base),
        }
    }
}
