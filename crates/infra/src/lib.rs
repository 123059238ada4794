mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IReminderRepo, IWateringLogRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use tokio::sync::Mutex;
use system::RealSys;

#[derive(Clone)]
pub struct PlantoContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifications: NotificationScheduler,
    /// Held while a reminder is removed and while the alert of a stored reminder
    /// is armed, so that an alert is never armed after its reminder was deleted.
    pub alert_sync: Arc<Mutex<()>>,
}

impl PlantoContext {
    /// Needs to be called within a tokio runtime as it starts the `NotificationScheduler`
    pub fn create(config: Config, notification_service: Arc<dyn INotificationService>) -> Self {
        let notifications = NotificationScheduler::start(
            notification_service,
            config.fire_delay_policy(),
            config.alert_title.clone(),
        );
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            notifications,
            alert_sync: Default::default(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> PlantoContext {
    let config = Config::new();
    let notification_center = InMemoryNotificationCenter::new(config.notifications_granted);
    PlantoContext::create(config, Arc::new(notification_center))
}
