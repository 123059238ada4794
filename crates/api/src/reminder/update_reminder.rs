use super::subscribers::RescheduleAlertOnReminderUpdated;
use crate::error::PlantoError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::update_reminder::*;
use planto_domain::{CareDetails, PlantReminder, ID};
use planto_infra::PlantoContext;

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id,
        details: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(PlantoError::from)
}

/// Rewrites everything the user can edit on a `PlantReminder`
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub details: CareDetails,
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
impl UseCase for UpdateReminderUseCase {
    type Response = PlantReminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id)),
        };
        reminder.apply(self.details.clone());

        match ctx.repos.reminders.save(&reminder).await {
            Ok(true) => Ok(reminder),
            // Deleted in the meantime
            Ok(false) => Err(UseCaseError::NotFound(self.reminder_id)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(RescheduleAlertOnReminderUpdated)]
    }
}
