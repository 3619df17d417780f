use super::{IParticipationRepo, InsertParticipationError};
use sqlx::{types::Uuid, FromRow, PgPool};
use stagepass_domain::{Participation, PaymentStatus, ID};
use std::convert::TryFrom;
use tracing::error;

const UNIQUE_VIOLATION: &str = "23505";

pub struct PostgresParticipationRepo {
    pool: PgPool,
}

impl PostgresParticipationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ParticipationRaw {
    participation_uid: Uuid,
    user_uid: Uuid,
    event_uid: Uuid,
    payment_status: String,
    amount: i64,
    payment_intent_id: Option<String>,
    created: i64,
}

impl TryFrom<ParticipationRaw> for Participation {
    type Error = anyhow::Error;

    fn try_from(p: ParticipationRaw) -> anyhow::Result<Self> {
        let payment_status = PaymentStatus::from_str(&p.payment_status).ok_or_else(|| {
            anyhow::anyhow!("Unknown payment status stored: {}", p.payment_status)
        })?;
        Ok(Self {
            id: p.participation_uid.into(),
            user_id: p.user_uid.into(),
            event_id: p.event_uid.into(),
            payment_status,
            amount: p.amount,
            payment_intent_id: p.payment_intent_id,
            created: p.created,
        })
    }
}

fn into_participation(raw: Option<ParticipationRaw>) -> Option<Participation> {
    raw.and_then(|p| match Participation::try_from(p) {
        Ok(participation) => Some(participation),
        Err(e) => {
            error!("Skipping malformed participation row: {:?}", e);
            None
        }
    })
}

#[async_trait::async_trait]
impl IParticipationRepo for PostgresParticipationRepo {
    async fn insert(
        &self,
        participation: &Participation,
    ) -> Result<(), InsertParticipationError> {
        let res = sqlx::query(
            r#"
            INSERT INTO participations
            (participation_uid, user_uid, event_uid, payment_status, amount, payment_intent_id, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(participation.id.inner_ref())
        .bind(participation.user_id.inner_ref())
        .bind(participation.event_id.inner_ref())
        .bind(participation.payment_status.as_str())
        .bind(participation.amount)
        .bind(&participation.payment_intent_id)
        .bind(participation.created)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(()),
            Err(e) => {
                let is_unique_violation = e
                    .as_database_error()
                    .and_then(|db_err| db_err.code())
                    .map(|code| code == UNIQUE_VIOLATION)
                    .unwrap_or(false);
                if is_unique_violation {
                    Err(InsertParticipationError::AlreadyExists)
                } else {
                    Err(InsertParticipationError::Storage(e.into()))
                }
            }
        }
    }

    async fn save(&self, participation: &Participation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE participations
            SET payment_status = $2, amount = $3, payment_intent_id = $4
            WHERE participation_uid = $1
            "#,
        )
        .bind(participation.id.inner_ref())
        .bind(participation.payment_status.as_str())
        .bind(participation.amount)
        .bind(&participation.payment_intent_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_user_and_event(&self, user_id: &ID, event_id: &ID) -> Option<Participation> {
        let raw = sqlx::query_as::<_, ParticipationRaw>(
            r#"
            SELECT * FROM participations AS p
            WHERE p.user_uid = $1 AND p.event_uid = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten();
        into_participation(raw)
    }

    async fn find_pending_by_intent(&self, intent_id: &str) -> Option<Participation> {
        let raw = sqlx::query_as::<_, ParticipationRaw>(
            r#"
            SELECT * FROM participations AS p
            WHERE p.payment_intent_id = $1 AND p.payment_status = 'PENDING'
            "#,
        )
        .bind(intent_id)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten();
        into_participation(raw)
    }

    async fn delete_by_user_and_event(
        &self,
        user_id: &ID,
        event_id: &ID,
    ) -> Option<Participation> {
        let raw = sqlx::query_as::<_, ParticipationRaw>(
            r#"
            DELETE FROM participations AS p
            WHERE p.user_uid = $1 AND p.event_uid = $2
            RETURNING *
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten();
        into_participation(raw)
    }
}
