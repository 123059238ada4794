use crate::base::{APIResponse, BaseClient};
use planto_api_structs::request_notification_permission;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn request_permission(
        &self,
    ) -> APIResponse<request_notification_permission::APIResponse> {
        self.base
            .post((), "notifications/permission".into(), StatusCode::OK)
            .await
    }
}
