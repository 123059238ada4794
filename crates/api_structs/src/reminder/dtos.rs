use planto_domain::{PlantReminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantReminderDTO {
    pub id: ID,
    pub plant_name: String,
    pub room: String,
    pub light: String,
    pub watering_schedule: String,
    pub water_amount: String,
    pub created_at: i64,
}

impl PlantReminderDTO {
    pub fn new(reminder: PlantReminder) -> Self {
        Self {
            id: reminder.id,
            plant_name: reminder.plant_name,
            room: reminder.room,
            light: reminder.light,
            watering_schedule: reminder.watering_schedule,
            water_amount: reminder.water_amount,
            created_at: reminder.created_at,
        }
    }
}
