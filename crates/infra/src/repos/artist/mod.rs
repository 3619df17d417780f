mod inmemory;
mod postgres;

pub use inmemory::InMemoryArtistRepo;
pub use postgres::PostgresArtistRepo;
use stagepass_domain::{Artist, ID};

#[async_trait::async_trait]
pub trait IArtistRepo: Send + Sync {
    async fn insert(&self, artist: &Artist) -> anyhow::Result<()>;
    async fn find(&self, artist_id: &ID) -> Option<Artist>;
}
