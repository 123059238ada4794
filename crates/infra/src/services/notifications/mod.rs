mod inmemory;
mod scheduler;

pub use inmemory::InMemoryNotificationCenter;
use planto_domain::{AlertRequest, AuthorizationOptions, AuthorizationStatus, ID};
pub use scheduler::{BatchReceipt, NotificationScheduler, Receipt};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotificationError {
    #[error("The user has not permitted notifications to be shown")]
    PermissionDenied,
    #[error("Unable to request notification permission. Error message: `{0}`")]
    Authorization(String),
    #[error("Unable to register alert. Error message: `{0}`")]
    Registration(String),
    #[error("The notification scheduler is not running")]
    SchedulerStopped,
}

/// The notification service of the operating system.
///
/// The service owns the countdown of every registered alert and the
/// delivery of it. Alerts are keyed by id, registering an alert with an
/// id that is already pending replaces the pending alert.
#[async_trait::async_trait]
pub trait INotificationService: Send + Sync {
    async fn check_authorization_status(&self) -> AuthorizationStatus;
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, NotificationError>;
    async fn register(&self, alert: AlertRequest) -> Result<(), NotificationError>;
    async fn cancel(&self, ids: &[ID]);
}
