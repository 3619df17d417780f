use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub full_name: String,
    /// Admins may manage events and control the reminder scheduler
    pub admin: bool,
}

impl User {
    pub fn new(email: &str, full_name: &str) -> Self {
        Self {
            id: Default::default(),
            email: email.into(),
            full_name: full_name.into(),
            admin: false,
        }
    }
}

impl Entity for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
