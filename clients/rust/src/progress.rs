use crate::base::{APIResponse, BaseClient};
use planto_api_structs::get_daily_progress;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProgressClient {
    base: Arc<BaseClient>,
}

impl ProgressClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_daily_progress::APIResponse> {
        self.base.get("progress".into(), StatusCode::OK).await
    }
}
