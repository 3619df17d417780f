use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use stagepass_domain::{TicketEvent, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<TicketEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &TicketEvent) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<TicketEvent> {
        find(event_id, &self.events)
    }

    async fn delete(&self, event_id: &ID) -> Option<TicketEvent> {
        delete(event_id, &self.events)
    }
}
