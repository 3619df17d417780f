use super::ILocationRepo;
use crate::repos::shared::inmemory_repo::*;
use stagepass_domain::{Location, ID};

pub struct InMemoryLocationRepo {
    locations: std::sync::Mutex<Vec<Location>>,
}

impl InMemoryLocationRepo {
    pub fn new() -> Self {
        Self {
            locations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ILocationRepo for InMemoryLocationRepo {
    async fn insert(&self, location: &Location) -> anyhow::Result<()> {
        insert(location, &self.locations);
        Ok(())
    }

    async fn find(&self, location_id: &ID) -> Option<Location> {
        find(location_id, &self.locations)
    }
}
