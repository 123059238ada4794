use actix_web::{web, HttpResponse};
use planto_api_structs::get_service_health::*;
use planto_infra::PlantoContext;

async fn status(ctx: web::Data<PlantoContext>) -> HttpResponse {
    let reminders = ctx.repos.reminders.find_all().await.len();

    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        reminders,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
