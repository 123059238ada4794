use crate::base::{APIResponse, BaseClient};
use planto_api_structs::*;
use planto_domain::{CareDetails, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub details: CareDetails,
}

pub struct SetReminderWateredInput {
    pub reminder_id: ID,
    pub watered: bool,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CareDetails) -> APIResponse<create_reminder::APIResponse> {
        self.base
            .post(input, "reminders".into(), StatusCode::CREATED)
            .await
    }

    /// Newest reminder first
    pub async fn get_all(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        self.base
            .put(
                input.details,
                format!("reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn delete_at(
        &self,
        positions: Vec<usize>,
    ) -> APIResponse<delete_reminders_at::APIResponse> {
        let body = delete_reminders_at::RequestBody { positions };
        self.base
            .post(body, "reminders/delete".into(), StatusCode::OK)
            .await
    }

    pub async fn clear(&self) -> APIResponse<clear_reminders::APIResponse> {
        self.base.delete("reminders".into(), StatusCode::OK).await
    }

    pub async fn sync_alerts(&self) -> APIResponse<sync_reminder_alerts::APIResponse> {
        self.base
            .post((), "reminders/alerts/sync".into(), StatusCode::OK)
            .await
    }

    pub async fn set_watered(
        &self,
        input: SetReminderWateredInput,
    ) -> APIResponse<set_reminder_watered::APIResponse> {
        let body = set_reminder_watered::RequestBody {
            watered: input.watered,
        };
        self.base
            .put(
                body,
                format!("reminders/{}/watered", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }
}
