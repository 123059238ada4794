use crate::error::PlantoError;
use crate::progress::daily_progress;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::set_reminder_watered::*;
use planto_domain::{DailyProgress, WateringLogEntry, ID};
use planto_infra::PlantoContext;

pub async fn set_reminder_watered_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = SetReminderWateredUseCase {
        reminder_id: path_params.reminder_id,
        watered: body.0.watered,
    };

    execute(usecase, &ctx)
        .await
        .map(|progress| HttpResponse::Ok().json(APIResponse::new(progress)))
        .map_err(PlantoError::from)
}

/// Checks or unchecks the plant of a reminder in the daily watering progress
#[derive(Debug)]
pub struct SetReminderWateredUseCase {
    pub reminder_id: ID,
    pub watered: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for PlantoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetReminderWateredUseCase {
    type Response = DailyProgress;

    type Error = UseCaseError;

    const NAME: &'static str = "SetReminderWatered";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.reminders.find(&self.reminder_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.reminder_id));
        }

        if self.watered {
            let entry = WateringLogEntry {
                reminder_id: self.reminder_id,
                watered_at: ctx.sys.get_timestamp_millis(),
            };
            ctx.repos
                .watering_log
                .insert(&entry)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        } else {
            ctx.repos.watering_log.delete(&self.reminder_id).await;
        }

        Ok(daily_progress(ctx).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{care_details, setup_context_with_center};
    use planto_domain::PlantReminder;

    #[actix_web::main]
    #[test]
    async fn toggles_watered_state() {
        let (ctx, _) = setup_context_with_center();
        let pothos = PlantReminder::new(care_details("Pothos", "Every day"), 1);
        let fern = PlantReminder::new(care_details("Fern", "Every day"), 2);
        ctx.repos.reminders.insert(&pothos).await.unwrap();
        ctx.repos.reminders.insert(&fern).await.unwrap();

        let progress = execute(
            SetReminderWateredUseCase {
                reminder_id: pothos.id,
                watered: true,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(progress, DailyProgress::new(1, 2));

        // Watering twice counts once
        let progress = execute(
            SetReminderWateredUseCase {
                reminder_id: pothos.id,
                watered: true,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(progress, DailyProgress::new(1, 2));

        let progress = execute(
            SetReminderWateredUseCase {
                reminder_id: fern.id,
                watered: true,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert!(progress.is_goal_completed());

        let progress = execute(
            SetReminderWateredUseCase {
                reminder_id: pothos.id,
                watered: false,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(progress, DailyProgress::new(1, 2));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_reminder() {
        let (ctx, _) = setup_context_with_center();
        let unknown_id = ID::new();

        let mut usecase = SetReminderWateredUseCase {
            reminder_id: unknown_id,
            watered: true,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(unknown_id))
        );
        assert!(ctx.repos.watering_log.find_all().await.is_empty());
    }
}
