mod reminder;
mod shared;
mod watering_log;

pub use reminder::{IReminderRepo, InMemoryReminderRepo};
use std::sync::Arc;
pub use watering_log::{IWateringLogRepo, InMemoryWateringLogRepo};

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub watering_log: Arc<dyn IWateringLogRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
            watering_log: Arc::new(InMemoryWateringLogRepo::new()),
        }
    }
}
