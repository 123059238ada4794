use crate::base::{APIResponse, BaseClient};
use planto_api_structs::get_care_options;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct OptionsClient {
    base: Arc<BaseClient>,
}

impl OptionsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_care_options::APIResponse> {
        self.base.get("options".into(), StatusCode::OK).await
    }
}
