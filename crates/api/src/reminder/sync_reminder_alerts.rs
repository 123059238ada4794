use crate::error::PlantoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::sync_reminder_alerts::*;
use planto_domain::ID;
use planto_infra::{NotificationError, PlantoContext};

pub async fn sync_reminder_alerts_controller(
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = SyncReminderAlertsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                scheduled: res.scheduled,
                failed: res
                    .failed
                    .into_iter()
                    .map(|(reminder_id, e)| FailedAlertDTO {
                        reminder_id,
                        reason: e.to_string(),
                    })
                    .collect(),
            })
        })
        .map_err(PlantoError::from)
}

/// Arms the alert of every stored reminder again, replacing whatever is pending.
/// Used at startup and after the user has granted notification permission.
#[derive(Debug)]
pub struct SyncReminderAlertsUseCase {}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub scheduled: usize,
    pub failed: Vec<(ID, NotificationError)>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlantoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SyncReminderAlertsUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "SyncReminderAlerts";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        let receipts = {
            let _guard = ctx.alert_sync.lock().await;
            let reminders = ctx.repos.reminders.find_all().await;
            ctx.notifications.schedule_all(&reminders)
        };
        let issued = receipts.len();
        let failed = receipts.failures().await;

        Ok(UseCaseResponse {
            scheduled: issued - failed.len(),
            failed,
        })
    }
}
