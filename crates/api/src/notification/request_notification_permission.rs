use crate::error::PlantoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use planto_api_structs::request_notification_permission::*;
use planto_domain::AuthorizationStatus;
use planto_infra::PlantoContext;
use tracing::warn;

pub async fn request_notification_permission_controller(
    ctx: web::Data<PlantoContext>,
) -> Result<HttpResponse, PlantoError> {
    let usecase = RequestNotificationPermissionUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|status| HttpResponse::Ok().json(APIResponse { status }))
        .map_err(PlantoError::from)
}

/// Asks the user for permission to show watering alerts. The user is only
/// asked once, later requests just return the answer.
#[derive(Debug)]
pub struct RequestNotificationPermissionUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for PlantoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RequestNotificationPermissionUseCase {
    type Response = AuthorizationStatus;

    type Error = UseCaseError;

    const NAME: &'static str = "RequestNotificationPermission";

    async fn execute(&mut self, ctx: &PlantoContext) -> Result<Self::Response, Self::Error> {
        match ctx.notifications.request_permission().outcome().await {
            Ok(status) => Ok(status),
            Err(e) => {
                warn!("Notification permission is still undecided. Err: {}", e);
                Ok(AuthorizationStatus::NotDetermined)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use planto_infra::{Config, InMemoryNotificationCenter};
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn asks_user_only_once() {
        let center = Arc::new(InMemoryNotificationCenter::new(false));
        let ctx = PlantoContext::create(Config::default(), center.clone());

        let status = execute(RequestNotificationPermissionUseCase {}, &ctx)
            .await
            .unwrap();
        assert_eq!(status, AuthorizationStatus::Denied);

        let status = execute(RequestNotificationPermissionUseCase {}, &ctx)
            .await
            .unwrap();
        assert_eq!(status, AuthorizationStatus::Denied);
        assert_eq!(center.authorization_requests(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn grants_permission() {
        let center = Arc::new(InMemoryNotificationCenter::new(true));
        let ctx = PlantoContext::create(Config::default(), center.clone());

        let status = execute(RequestNotificationPermissionUseCase {}, &ctx)
            .await
            .unwrap();

        assert_eq!(status, AuthorizationStatus::Granted);
    }
}
