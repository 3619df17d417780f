mod inmemory;
mod postgres;

pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;
use stagepass_domain::{TicketEvent, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &TicketEvent) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<TicketEvent>;
    async fn delete(&self, event_id: &ID) -> Option<TicketEvent>;
}
