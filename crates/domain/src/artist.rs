use crate::shared::entity::{Entity, ID};

/// An artist performing at a `TicketEvent`. Managed by the back office;
/// read-only within this core.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: ID,
    pub name: String,
}

impl Entity for Artist {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
