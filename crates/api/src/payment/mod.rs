mod confirm_payment;
mod create_payment_intent;

use actix_web::web;
use confirm_payment::confirm_payment_controller;
use create_payment_intent::create_payment_intent_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/payments/intent",
        web::post().to(create_payment_intent_controller),
    );
    // Provider webhook, carries the intent id instead of a user session
    cfg.route(
        "/payments/confirmed",
        web::post().to(confirm_payment_controller),
    );
}
