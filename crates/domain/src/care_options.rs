use serde::{Deserialize, Serialize};

/// The label sets a user picks from when describing a plant.
///
/// These are static configuration handed to the presentation layer,
/// the core itself treats the chosen labels as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareOptions {
    pub rooms: Vec<String>,
    pub lights: Vec<String>,
    pub watering_schedules: Vec<String>,
    pub water_amounts: Vec<String>,
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for CareOptions {
    fn default() -> Self {
        Self {
            rooms: labels(&["Living Room", "Bedroom", "Kitchen", "Balcony", "Bathroom"]),
            lights: labels(&["Full sun", "Partial sun", "Shade"]),
            watering_schedules: labels(&[
                "Every day",
                "Every 2 days",
                "Every 3 days",
                "Once a week",
                "Every 10 days",
                "Every 2 weeks",
            ]),
            water_amounts: labels(&["10-20 ml", "20-50 ml", "50-100 ml", "200-300 ml"]),
        }
    }
}
