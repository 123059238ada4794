use super::subscribers::CancelAlertsOnRemindersDeleted;
use crate::error::PlantoError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::delete_reminders_at::*;
use planto_domain::PlantReminder;
use planto_infra::PlantoContext;

pub async fn delete_reminders_at_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = DeleteRemindersAtUseCase {
        positions: body.0.positions,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(PlantoError::from)
}

/// Deletes the reminders at the given positions of the newest first listing
#[derive(Debug)]
pub struct DeleteRemindersAtUseCase {
    pub positions: Vec<usize>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlantoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteRemindersAtUseCase {
    type Response = Vec<PlantReminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteRemindersAt";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        let deleted = {
            let _guard = ctx.alert_sync.lock().await;
            ctx.repos.reminders.delete_at(&self.positions).await
        };
        if !deleted.is_empty() {
            let ids = deleted.iter().map(|r| r.id).collect::<Vec<_>>();
            ctx.repos.watering_log.delete_many(&ids).await;
        }
        Ok(deleted)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelAlertsOnRemindersDeleted)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{care_details, setup_context_with_center};

    #[actix_web::main]
    #[test]
    async fn deletes_by_position_and_cancels_alerts() {
        let (ctx, center) = setup_context_with_center();
        let mut reminders = Vec::new();
        for (i, name) in ["Pothos", "Fern", "Cactus"].iter().enumerate() {
            let reminder = PlantReminder::new(care_details(name, "Every day"), i as i64);
            ctx.repos.reminders.insert(&reminder).await.unwrap();
            reminders.push(reminder);
        }
        ctx.notifications.schedule_all(&reminders);

        // Listing is Cactus, Fern, Pothos
        let deleted = execute(
            DeleteRemindersAtUseCase {
                positions: vec![2, 0, 7],
            },
            &ctx,
        )
        .await
        .unwrap();
        ctx.notifications.flush().await;

        let names = deleted.iter().map(|r| r.plant_name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Cactus", "Pothos"]);
        let remaining = ctx.repos.reminders.find_all().await;
        assert_eq!(remaining, vec![reminders[1].clone()]);
        let pending = center.pending_alerts();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, reminders[1].id);
    }

    #[actix_web::main]
    #[test]
    async fn no_positions_deletes_nothing() {
        let (ctx, _) = setup_context_with_center();
        let reminder = PlantReminder::new(care_details("Pothos", "Every day"), 1);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let deleted = execute(DeleteRemindersAtUseCase { positions: vec![] }, &ctx)
            .await
            .unwrap();

        assert!(deleted.is_empty());
        assert_eq!(ctx.repos.reminders.find_all().await.len(), 1);
    }
}
