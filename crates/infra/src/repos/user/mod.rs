mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use stagepass_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// All registered users. Recipient resolution for broadcast
    /// reminders reads the full list.
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
}
