use planto_domain::{CareOptions, WateringCadence};
use serde::{Deserialize, Serialize};

pub mod get_care_options {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub options: CareOptions,
        pub watering_cadences: Vec<WateringCadence>,
    }
}
