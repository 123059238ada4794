use planto_domain::AuthorizationStatus;
use serde::{Deserialize, Serialize};

pub mod request_notification_permission {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub status: AuthorizationStatus,
    }
}
