use super::IArtistRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use stagepass_domain::{Artist, ID};

pub struct PostgresArtistRepo {
    pool: PgPool,
}

impl PostgresArtistRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArtistRaw {
    artist_uid: Uuid,
    name: String,
}

impl From<ArtistRaw> for Artist {
    fn from(a: ArtistRaw) -> Self {
        Self {
            id: a.artist_uid.into(),
            name: a.name,
        }
    }
}

#[async_trait::async_trait]
impl IArtistRepo for PostgresArtistRepo {
    async fn insert(&self, artist: &Artist) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO artists
            (artist_uid, name)
            VALUES($1, $2)
            "#,
        )
        .bind(artist.id.inner_ref())
        .bind(&artist.name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, artist_id: &ID) -> Option<Artist> {
        sqlx::query_as::<_, ArtistRaw>(
            r#"
            SELECT * FROM artists AS a
            WHERE a.artist_uid = $1
            "#,
        )
        .bind(artist_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|a| a.into())
    }
}
