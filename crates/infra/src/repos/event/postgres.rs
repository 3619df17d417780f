use super::IEventRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use stagepass_domain::{TicketEvent, ID};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    title: String,
    start_ts: i64,
    price: i64,
    currency: String,
    artist_uid: Option<Uuid>,
    location_uid: Option<Uuid>,
    created: i64,
    updated: i64,
}

impl From<EventRaw> for TicketEvent {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            title: e.title,
            start_ts: e.start_ts,
            price: e.price,
            currency: e.currency,
            artist_id: e.artist_uid.map(|uid| uid.into()),
            location_id: e.location_uid.map(|uid| uid.into()),
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &TicketEvent) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events
            (event_uid, title, start_ts, price, currency, artist_uid, location_uid, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(&e.title)
        .bind(e.start_ts)
        .bind(e.price)
        .bind(&e.currency)
        .bind(e.artist_id.as_ref().map(|id| *id.inner_ref()))
        .bind(e.location_id.as_ref().map(|id| *id.inner_ref()))
        .bind(e.created)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<TicketEvent> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|e| e.into())
    }

    async fn delete(&self, event_id: &ID) -> Option<TicketEvent> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            DELETE FROM events AS e
            WHERE e.event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|e| e.into())
    }
}
