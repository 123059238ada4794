mod clear_reminders;
mod create_reminder;
mod delete_reminder;
mod delete_reminders_at;
mod get_reminder;
mod get_reminders;
mod set_reminder_watered;
mod subscribers;
mod sync_reminder_alerts;
mod update_reminder;

use actix_web::web;
use clear_reminders::clear_reminders_controller;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use delete_reminders_at::delete_reminders_at_controller;
use get_reminder::get_reminder_controller;
use get_reminders::get_reminders_controller;
use set_reminder_watered::set_reminder_watered_controller;
use sync_reminder_alerts::sync_reminder_alerts_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route("/reminders", web::delete().to(clear_reminders_controller));

    cfg.route(
        "/reminders/delete",
        web::post().to(delete_reminders_at_controller),
    );
    cfg.route(
        "/reminders/alerts/sync",
        web::post().to(sync_reminder_alerts_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );

    cfg.route(
        "/reminders/{reminder_id}/watered",
        web::put().to(set_reminder_watered_controller),
    );
}
