use super::subscribers::CancelAlertOnReminderDeleted;
use crate::error::PlantoError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::delete_reminder::*;
use planto_domain::{PlantReminder, ID};
use planto_infra::PlantoContext;

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(PlantoError::from)
}

/// Deleting a reminder that does not exist is not an error, the response is just empty
#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlantoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Option<PlantReminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        let reminder = {
            let _guard = ctx.alert_sync.lock().await;
            ctx.repos.reminders.delete(&self.reminder_id).await
        };
        if reminder.is_some() {
            ctx.repos.watering_log.delete(&self.reminder_id).await;
        }
        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelAlertOnReminderDeleted)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{care_details, setup_context_with_center};

    #[actix_web::main]
    #[test]
    async fn deletes_reminder_and_cancels_alert() {
        let (ctx, center) = setup_context_with_center();
        let reminder = PlantReminder::new(care_details("Pothos", "Every day"), 100);
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        ctx.notifications.schedule(&reminder);

        let deleted = execute(
            DeleteReminderUseCase {
                reminder_id: reminder.id,
            },
            &ctx,
        )
        .await
        .unwrap();
        ctx.notifications.flush().await;

        assert_eq!(deleted, Some(reminder.clone()));
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
        assert!(center.pending_alert(&reminder.id).is_none());
    }

    #[actix_web::main]
    #[test]
    async fn deleting_unknown_reminder_is_noop() {
        let (ctx, _) = setup_context_with_center();
        let reminder = PlantReminder::new(care_details("Pothos", "Every day"), 100);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let deleted = execute(
            DeleteReminderUseCase {
                reminder_id: ID::new(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(deleted, None);
        assert_eq!(ctx.repos.reminders.find_all().await, vec![reminder]);
    }
}
