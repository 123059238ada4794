use crate::dtos::DailyProgressDTO;
use planto_domain::DailyProgress;
use serde::{Deserialize, Serialize};

pub mod get_daily_progress {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub progress: DailyProgressDTO,
    }

    impl APIResponse {
        pub fn new(progress: DailyProgress) -> Self {
            Self {
                progress: DailyProgressDTO::new(progress),
            }
        }
    }
}
