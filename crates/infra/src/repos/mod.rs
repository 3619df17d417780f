mod artist;
mod event;
mod location;
mod participation;
mod reminder;
mod shared;
mod user;

use artist::{InMemoryArtistRepo, PostgresArtistRepo};
use event::{InMemoryEventRepo, PostgresEventRepo};
use location::{InMemoryLocationRepo, PostgresLocationRepo};
use participation::{InMemoryParticipationRepo, PostgresParticipationRepo};
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{InMemoryUserRepo, PostgresUserRepo};

pub use artist::IArtistRepo;
pub use event::IEventRepo;
pub use location::ILocationRepo;
pub use participation::{IParticipationRepo, InsertParticipationError};
pub use reminder::IReminderRepo;
pub use shared::repo::DeleteResult;
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub artists: Arc<dyn IArtistRepo>,
    pub locations: Arc<dyn ILocationRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub participations: Arc<dyn IParticipationRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            artists: Arc::new(PostgresArtistRepo::new(pool.clone())),
            locations: Arc::new(PostgresLocationRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            participations: Arc::new(PostgresParticipationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            events: Arc::new(InMemoryEventRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            artists: Arc::new(InMemoryArtistRepo::new()),
            locations: Arc::new(InMemoryLocationRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
            participations: Arc::new(InMemoryParticipationRepo::new()),
        }
    }
}
