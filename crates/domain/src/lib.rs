mod artist;
mod event;
mod location;
mod participation;
mod payment;
mod reminder;
mod shared;
mod user;

pub use artist::Artist;
pub use event::TicketEvent;
pub use location::Location;
pub use participation::{Participation, PaymentStatus};
pub use payment::{PaymentIntent, PaymentIntentStatus};
pub use reminder::{Reminder, ReminderKind};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;
