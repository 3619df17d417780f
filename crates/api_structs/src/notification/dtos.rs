use serde::{Deserialize, Serialize};
use stagepass_domain::{Reminder, ReminderKind, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub event_id: ID,
    pub kind: ReminderKind,
    pub title: String,
    pub message: String,
    pub remind_at: i64,
    pub sent: bool,
    pub sent_at: Option<i64>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            event_id: reminder.event_id,
            kind: reminder.kind,
            title: reminder.title,
            message: reminder.message,
            remind_at: reminder.remind_at,
            sent: reminder.sent,
            sent_at: reminder.sent_at,
        }
    }
}
