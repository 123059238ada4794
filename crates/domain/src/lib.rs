mod alert;
mod care_options;
mod progress;
mod reminder;
mod shared;
mod watering;

pub use alert::{AlertRequest, AuthorizationOptions, AuthorizationStatus};
pub use care_options::CareOptions;
pub use progress::{DailyProgress, WateringLogEntry};
pub use reminder::{sanitize_plant_name, CareDetails, PlantReminder, PLACEHOLDER_PLANT_NAME};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use watering::{
    FireDelayPolicy, WateringCadence, WateringCadences, DEFAULT_FIRE_DELAY_SECS,
    MIN_FIRE_DELAY_SECS,
};
