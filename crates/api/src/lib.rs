mod error;
mod event;
mod notification;
mod payment;
mod registration;
mod scheduler;
mod shared;
mod status;

pub use scheduler::{SchedulerControl, SchedulerStatus};

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use stagepass_infra::StagePassContext;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    event::configure_routes(cfg);
    notification::configure_routes(cfg);
    payment::configure_routes(cfg);
    registration::configure_routes(cfg);
    scheduler::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: StagePassContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: StagePassContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        // One control shared by all workers. The dispatch ticker does
        // not run until an admin starts it over the API.
        let scheduler_control = web::Data::from(Arc::new(SchedulerControl::new()));

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(scheduler_control.clone())
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
