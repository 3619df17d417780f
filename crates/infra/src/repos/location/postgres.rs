use super::ILocationRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use stagepass_domain::{Location, ID};

pub struct PostgresLocationRepo {
    pool: PgPool,
}

impl PostgresLocationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LocationRaw {
    location_uid: Uuid,
    name: String,
}

impl From<LocationRaw> for Location {
    fn from(l: LocationRaw) -> Self {
        Self {
            id: l.location_uid.into(),
            name: l.name,
        }
    }
}

#[async_trait::async_trait]
impl ILocationRepo for PostgresLocationRepo {
    async fn insert(&self, location: &Location) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO locations
            (location_uid, name)
            VALUES($1, $2)
            "#,
        )
        .bind(location.id.inner_ref())
        .bind(&location.name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, location_id: &ID) -> Option<Location> {
        sqlx::query_as::<_, LocationRaw>(
            r#"
            SELECT * FROM locations AS l
            WHERE l.location_uid = $1
            "#,
        )
        .bind(location_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|l| l.into())
    }
}
