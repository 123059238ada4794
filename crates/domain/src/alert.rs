use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};

/// One shot notification that should be delivered `fire_delay_secs` after
/// it was registered. Keyed by the id of the `PlantReminder` it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRequest {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub fire_delay_secs: u64,
}

impl AlertRequest {
    pub fn watering_body(plant_name: &str) -> String {
        format!("Hey! let's water {}", plant_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    NotDetermined,
    Granted,
    Denied,
}

impl AuthorizationStatus {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::NotDetermined)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub sound: bool,
    pub badge: bool,
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self {
            alert: true,
            sound: true,
            badge: true,
        }
    }
}
