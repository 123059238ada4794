use super::daily_progress;
use crate::error::PlantoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::get_daily_progress::*;
use planto_domain::DailyProgress;
use planto_infra::PlantoContext;

pub async fn get_daily_progress_controller(
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = GetDailyProgressUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|progress| HttpResponse::Ok().json(APIResponse::new(progress)))
        .map_err(PlantoError::from)
}

#[derive(Debug)]
pub struct GetDailyProgressUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlantoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDailyProgressUseCase {
    type Response = DailyProgress;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDailyProgress";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        Ok(daily_progress(ctx).await)
    }
}
