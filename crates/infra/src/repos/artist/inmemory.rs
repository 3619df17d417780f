use super::IArtistRepo;
use crate::repos::shared::inmemory_repo::*;
use stagepass_domain::{Artist, ID};

pub struct InMemoryArtistRepo {
    artists: std::sync::Mutex<Vec<Artist>>,
}

impl InMemoryArtistRepo {
    pub fn new() -> Self {
        Self {
            artists: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IArtistRepo for InMemoryArtistRepo {
    async fn insert(&self, artist: &Artist) -> anyhow::Result<()> {
        insert(artist, &self.artists);
        Ok(())
    }

    async fn find(&self, artist_id: &ID) -> Option<Artist> {
        find(artist_id, &self.artists)
    }
}
