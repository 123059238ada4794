use super::subscribers::CancelAlertsOnRemindersCleared;
use crate::error::PlantoError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::clear_reminders::*;
use planto_domain::PlantReminder;
use planto_infra::PlantoContext;

pub async fn clear_reminders_controller(
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = ClearRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(PlantoError::from)
}

#[derive(Debug)]
pub struct ClearRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlantoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ClearRemindersUseCase {
    type Response = Vec<PlantReminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "ClearReminders";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        let reminders = {
            let _guard = ctx.alert_sync.lock().await;
            ctx.repos.reminders.delete_all().await
        };
        ctx.repos.watering_log.delete_all().await;
        Ok(reminders)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelAlertsOnRemindersCleared)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{care_details, setup_context_with_center};

    #[actix_web::main]
    #[test]
    async fn clears_reminders_and_alerts() {
        let (ctx, center) = setup_context_with_center();
        let pothos = PlantReminder::new(care_details("Pothos", "Every day"), 1);
        let fern = PlantReminder::new(care_details("Fern", "Once a week"), 2);
        ctx.repos.reminders.insert(&pothos).await.unwrap();
        ctx.repos.reminders.insert(&fern).await.unwrap();
        ctx.notifications.schedule_all(&[pothos, fern]);

        let cleared = execute(ClearRemindersUseCase {}, &ctx).await.unwrap();
        ctx.notifications.flush().await;

        assert_eq!(cleared.len(), 2);
        assert!(ctx.repos.reminders.find_all().await.is_empty());
        assert!(center.pending_alerts().is_empty());
    }
}
