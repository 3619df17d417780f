mod inmemory;
mod postgres;

pub use inmemory::InMemoryParticipationRepo;
pub use postgres::PostgresParticipationRepo;
use stagepass_domain::{Participation, ID};

/// Insert failures the registration engine must tell apart: a unique
/// constraint violation on (user, event) is a business outcome
/// (already registered), everything else is storage trouble.
#[derive(Debug)]
pub enum InsertParticipationError {
    AlreadyExists,
    Storage(anyhow::Error),
}

#[async_trait::async_trait]
pub trait IParticipationRepo: Send + Sync {
    /// Create a participation. The (user, event) uniqueness invariant
    /// is enforced here by the store, not by a caller-side
    /// check-then-insert, so concurrent duplicate requests cannot both
    /// commit.
    async fn insert(&self, participation: &Participation)
        -> Result<(), InsertParticipationError>;
    async fn save(&self, participation: &Participation) -> anyhow::Result<()>;
    async fn find_by_user_and_event(&self, user_id: &ID, event_id: &ID) -> Option<Participation>;
    /// The pending participation waiting on a given provider intent
    async fn find_pending_by_intent(&self, intent_id: &str) -> Option<Participation>;
    async fn delete_by_user_and_event(&self, user_id: &ID, event_id: &ID)
        -> Option<Participation>;
}
