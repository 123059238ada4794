use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Name given to a `PlantReminder` when the user leaves the plant name blank
pub const PLACEHOLDER_PLANT_NAME: &str = "Untitled Plant";

/// The part of a `PlantReminder` that the user is able to edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareDetails {
    pub plant_name: String,
    /// Label from `CareOptions::rooms`
    pub room: String,
    /// Label from `CareOptions::lights`
    pub light: String,
    /// Cadence label from `CareOptions::watering_schedules`. This is kept
    /// as the label the user picked and is only turned into a duration
    /// when an alert is scheduled.
    pub watering_schedule: String,
    /// Label from `CareOptions::water_amounts`
    pub water_amount: String,
}

impl CareDetails {
    /// Trims the plant name and falls back to `PLACEHOLDER_PLANT_NAME`
    /// if nothing is left.
    pub fn sanitized(mut self) -> Self {
        self.plant_name = sanitize_plant_name(&self.plant_name);
        self
    }
}

pub fn sanitize_plant_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        PLACEHOLDER_PLANT_NAME.into()
    } else {
        name.into()
    }
}

/// A `PlantReminder` is the users record of how and when one plant
/// should be taken care of.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantReminder {
    pub id: ID,
    pub plant_name: String,
    pub room: String,
    pub light: String,
    pub watering_schedule: String,
    pub water_amount: String,
    /// Timestamp in millis. Set once when the reminder is created.
    pub created_at: i64,
}

impl PlantReminder {
    pub fn new(details: CareDetails, created_at: i64) -> Self {
        let details = details.sanitized();
        Self {
            id: Default::default(),
            plant_name: details.plant_name,
            room: details.room,
            light: details.light,
            watering_schedule: details.watering_schedule,
            water_amount: details.water_amount,
            created_at,
        }
    }

    /// Overwrites every user editable field. `id` and `created_at`
    /// are never touched.
    pub fn apply(&mut self, details: CareDetails) {
        let details = details.sanitized();
        self.plant_name = details.plant_name;
        self.room = details.room;
        self.light = details.light;
        self.watering_schedule = details.watering_schedule;
        self.water_amount = details.water_amount;
    }

    pub fn details(&self) -> CareDetails {
        CareDetails {
            plant_name: self.plant_name.clone(),
            room: self.room.clone(),
            light: self.light.clone(),
            watering_schedule: self.watering_schedule.clone(),
            water_amount: self.water_amount.clone(),
        }
    }
}

impl Entity for PlantReminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
