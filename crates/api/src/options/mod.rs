mod get_care_options;

use actix_web::web;
use get_care_options::get_care_options_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/options", web::get().to(get_care_options_controller));
}
