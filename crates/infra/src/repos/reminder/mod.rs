mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use stagepass_domain::{Reminder, ID};

use crate::repos::shared::repo::DeleteResult;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Insert scheduled reminders. Fails if a reminder already exists
    /// for one of the (event, kind) pairs; that uniqueness lives in the
    /// store, not in caller-side checks.
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
    /// All unsent reminders whose fire time has elapsed at `now`
    async fn find_due(&self, now: i64) -> Vec<Reminder>;
    /// Flip an unsent reminder to sent. Returns `false` when the
    /// reminder was already sent (or does not exist), which makes the
    /// dispatch sweep idempotent.
    async fn mark_sent(&self, reminder_id: &ID, sent_at: i64) -> anyhow::Result<bool>;
    async fn find_by_event(&self, event_id: &ID) -> Vec<Reminder>;
    async fn find_all(&self) -> Vec<Reminder>;
    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult>;
}
