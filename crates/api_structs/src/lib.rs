mod event;
mod notification;
mod payment;
mod registration;
mod scheduler;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::registration::dtos::*;
}

pub use crate::event::api::*;
pub use crate::notification::api::*;
pub use crate::payment::api::*;
pub use crate::registration::api::*;
pub use crate::scheduler::api::*;
pub use crate::status::api::*;
