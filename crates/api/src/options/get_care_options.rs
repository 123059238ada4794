use actix_web::{web, HttpResponse};
use planto_api_structs::get_care_options::*;
use planto_infra::PlantoContext;

/// The choices offered when editing a reminder
pub async fn get_care_options_controller(ctx: web::Data<PlantoContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        options: ctx.config.care_options.clone(),
        watering_cadences: ctx.config.watering_cadences.cadences().to_vec(),
    })
}
