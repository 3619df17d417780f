mod inmemory;
mod postgres;

pub use inmemory::InMemoryLocationRepo;
pub use postgres::PostgresLocationRepo;
use stagepass_domain::{Location, ID};

#[async_trait::async_trait]
pub trait ILocationRepo: Send + Sync {
    async fn insert(&self, location: &Location) -> anyhow::Result<()>;
    async fn find(&self, location_id: &ID) -> Option<Location>;
}
