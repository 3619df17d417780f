mod create_event;
mod delete_event;
mod get_event;
pub mod schedule_reminders;
mod subscribers;

use actix_web::web;
use create_event::create_event_admin_controller;
use delete_event::delete_event_admin_controller;
use get_event::get_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::post().to(create_event_admin_controller));
    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_admin_controller),
    );
}
