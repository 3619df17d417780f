mod control;

pub use control::{SchedulerControl, SchedulerStatus};

use crate::error::StagePassError;
use crate::shared::auth::protect_admin_route;
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::{get_scheduler_status, start_scheduler, stop_scheduler};
use stagepass_infra::StagePassContext;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/scheduler/start",
        web::post().to(start_scheduler_admin_controller),
    );
    cfg.route(
        "/scheduler/stop",
        web::post().to(stop_scheduler_admin_controller),
    );
    cfg.route(
        "/scheduler/status",
        web::get().to(get_scheduler_status_controller),
    );
}

async fn start_scheduler_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<StagePassContext>,
    control: web::Data<SchedulerControl>,
) -> Result<HttpResponse, StagePassError> {
    protect_admin_route(&http_req, &ctx).await?;

    control.start(ctx.get_ref().clone());

    Ok(HttpResponse::Ok().json(start_scheduler::APIResponse {
        message: "Reminder scheduler started".into(),
    }))
}

async fn stop_scheduler_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<StagePassContext>,
    control: web::Data<SchedulerControl>,
) -> Result<HttpResponse, StagePassError> {
    protect_admin_route(&http_req, &ctx).await?;

    control.stop();

    Ok(HttpResponse::Ok().json(stop_scheduler::APIResponse {
        message: "Reminder scheduler stopped".into(),
    }))
}

async fn get_scheduler_status_controller(
    ctx: web::Data<StagePassContext>,
    control: web::Data<SchedulerControl>,
) -> Result<HttpResponse, StagePassError> {
    Ok(HttpResponse::Ok().json(get_scheduler_status::APIResponse {
        status: control.status().as_str().into(),
        timestamp: ctx.sys.get_timestamp_millis(),
    }))
}
