mod error;
mod notification;
mod options;
mod progress;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::PlantoError;
use planto_infra::PlantoContext;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    notification::configure_routes(cfg);
    options::configure_routes(cfg);
    progress::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: PlantoContext) -> Result<Self, std::io::Error> {
        Application::arm_alerts(&context).await;
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Asks for notification permission on launch and arms the alerts of reminders
    /// that already exist. Neither waits for the user to answer.
    async fn arm_alerts(context: &PlantoContext) {
        let permission = context.notifications.request_permission();
        actix_web::rt::spawn(async move {
            let status = permission.outcome().await;
            info!("Notification permission on startup: {:?}", status);
        });

        let _guard = context.alert_sync.lock().await;
        let reminders = context.repos.reminders.find_all().await;
        if !reminders.is_empty() {
            context.notifications.schedule_all(&reminders);
        }
    }

    async fn configure_server(context: PlantoContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    PlantoError::BadClientData(err.to_string()).into()
                }))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
