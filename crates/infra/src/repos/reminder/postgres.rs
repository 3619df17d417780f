use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use sqlx::{types::Uuid, FromRow, PgPool};
use stagepass_domain::{Reminder, ReminderKind, ID};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    event_uid: Uuid,
    kind: String,
    title: String,
    message: String,
    remind_at: i64,
    sent: bool,
    sent_at: Option<i64>,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(r: ReminderRaw) -> anyhow::Result<Self> {
        let kind = ReminderKind::from_str(&r.kind)
            .ok_or_else(|| anyhow::anyhow!("Unknown reminder kind stored: {}", r.kind))?;
        Ok(Self {
            id: r.reminder_uid.into(),
            event_id: r.event_uid.into(),
            kind,
            title: r.title,
            message: r.message,
            remind_at: r.remind_at,
            sent: r.sent,
            sent_at: r.sent_at,
        })
    }
}

fn into_reminders(raw: Vec<ReminderRaw>) -> Vec<Reminder> {
    raw.into_iter()
        .filter_map(|r| match Reminder::try_from(r) {
            Ok(reminder) => Some(reminder),
            Err(e) => {
                error!("Skipping malformed reminder row: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        for reminder in reminders {
            sqlx::query(
                r#"
            INSERT INTO reminders
            (reminder_uid, event_uid, kind, title, message, remind_at, sent, sent_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
            )
            .bind(reminder.id.inner_ref())
            .bind(reminder.event_id.inner_ref())
            .bind(reminder.kind.as_str())
            .bind(&reminder.title)
            .bind(&reminder.message)
            .bind(reminder.remind_at)
            .bind(reminder.sent)
            .bind(reminder.sent_at)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn find_due(&self, now: i64) -> Vec<Reminder> {
        let raw = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.sent = FALSE AND r.remind_at <= $1
            ORDER BY r.remind_at
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();
        into_reminders(raw)
    }

    async fn mark_sent(&self, reminder_id: &ID, sent_at: i64) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reminders AS r
            SET sent = TRUE, sent_at = $2
            WHERE r.reminder_uid = $1 AND r.sent = FALSE
            "#,
        )
        .bind(reminder_id.inner_ref())
        .bind(sent_at)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() == 1)
    }

    async fn find_by_event(&self, event_id: &ID) -> Vec<Reminder> {
        let raw = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.event_uid = $1
            ORDER BY r.remind_at
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();
        into_reminders(raw)
    }

    async fn find_all(&self) -> Vec<Reminder> {
        let raw = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            ORDER BY r.remind_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();
        into_reminders(raw)
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
