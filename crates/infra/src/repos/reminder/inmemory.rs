use super::IReminderRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use stagepass_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        // Check and insert under one lock to mirror the unique
        // (event, kind) index in the postgres store
        let mut collection = self.reminders.lock().unwrap();
        for reminder in reminders {
            if collection
                .iter()
                .any(|r| r.event_id == reminder.event_id && r.kind == reminder.kind)
            {
                return Err(anyhow::anyhow!(
                    "A reminder already exists for event: {} and kind: {}",
                    reminder.event_id,
                    reminder.kind
                ));
            }
            collection.push(reminder.clone());
        }
        Ok(())
    }

    async fn find_due(&self, now: i64) -> Vec<Reminder> {
        find_by(&self.reminders, |r| !r.sent && r.remind_at <= now)
    }

    async fn mark_sent(&self, reminder_id: &ID, sent_at: i64) -> anyhow::Result<bool> {
        let mut collection = self.reminders.lock().unwrap();
        for reminder in collection.iter_mut() {
            if reminder.id == *reminder_id {
                if reminder.sent {
                    return Ok(false);
                }
                reminder.sent = true;
                reminder.sent_at = Some(sent_at);
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn find_by_event(&self, event_id: &ID) -> Vec<Reminder> {
        find_by(&self.reminders, |r| r.event_id == *event_id)
    }

    async fn find_all(&self) -> Vec<Reminder> {
        find_by(&self.reminders, |_| true)
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.event_id == *event_id))
    }
}
