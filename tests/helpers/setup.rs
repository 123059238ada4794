use planto_api::Application;
use planto_infra::{Config, InMemoryNotificationCenter, PlantoContext};
use planto_sdk::PlantoSDK;
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
    pub ctx: PlantoContext,
    pub center: Arc<InMemoryNotificationCenter>,
}

impl TestApp {
    /// Waits until the alert operations issued so far have reached the notification center
    pub async fn settle_alerts(&self) {
        self.ctx.notifications.flush().await;
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, PlantoSDK, String) {
    spawn_app_with_center(InMemoryNotificationCenter::new(true)).await
}

pub async fn spawn_app_with_center(
    center: InMemoryNotificationCenter,
) -> (TestApp, PlantoSDK, String) {
    let mut config = Config::new();
    config.port = 0; // Random port
    config.debug_fire_delay_secs = None;

    let center = Arc::new(center);
    let ctx = PlantoContext::create(config.clone(), center.clone());
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        ctx,
        center,
    };
    let sdk = PlantoSDK::new(address.clone());
    (app, sdk, address)
}
