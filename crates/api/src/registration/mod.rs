pub mod create_registration;
mod delete_registration;
mod get_registration_status;
mod subscribers;

use actix_web::web;
use create_registration::create_registration_controller;
use delete_registration::delete_registration_controller;
use get_registration_status::get_registration_status_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/events/{event_id}/register",
        web::post().to(create_registration_controller),
    );
    cfg.route(
        "/events/{event_id}/register",
        web::delete().to(delete_registration_controller),
    );
    cfg.route(
        "/events/{event_id}/register",
        web::get().to(get_registration_status_controller),
    );
}
