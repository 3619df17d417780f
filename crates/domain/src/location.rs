use crate::shared::entity::{Entity, ID};

/// A venue at which `TicketEvent`s take place. Managed by the back
/// office; read-only within this core.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: ID,
    pub name: String,
}

impl Entity for Location {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
