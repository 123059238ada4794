mod get_daily_progress;

use actix_web::web;
use get_daily_progress::get_daily_progress_controller;
use planto_domain::DailyProgress;
use planto_infra::PlantoContext;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/progress", web::get().to(get_daily_progress_controller));
}

/// Only log entries of reminders that still exist count as completed
pub async fn daily_progress(ctx: &PlantoContext) -> DailyProgress {
    let reminders = ctx.repos.reminders.find_all().await;
    let completed = ctx
        .repos
        .watering_log
        .find_all()
        .await
        .iter()
        .filter(|entry| reminders.iter().any(|r| r.id == entry.reminder_id))
        .count();

    DailyProgress::new(completed, reminders.len())
}
