mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, IArtistRepo, IEventRepo, ILocationRepo, IParticipationRepo, IReminderRepo,
    IUserRepo, InsertParticipationError, Repos,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct StagePassContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub mailer: Arc<dyn IMailer>,
    pub payments: Arc<dyn IPaymentProvider>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl StagePassContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let mailer = Arc::new(WebhookMailer::new(config.mail_webhook_url.clone()));
        let payments: Arc<dyn IPaymentProvider> = match &config.payment_api_key {
            Some(api_key) => Arc::new(HttpPaymentProvider::new(api_key.clone())),
            None => Arc::new(InMemoryPaymentProvider::new()),
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            mailer,
            payments,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> StagePassContext {
    StagePassContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

/// Context backed entirely by in-process fakes, used by tests
pub fn setup_context_inmemory() -> StagePassContext {
    StagePassContext {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        sys: Arc::new(RealSys {}),
        mailer: Arc::new(InMemoryMailer::new()),
        payments: Arc::new(InMemoryPaymentProvider::new()),
    }
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
