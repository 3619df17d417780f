use crate::shared::entity::{Entity, ID};

/// A single-occurrence ticketed event. The start timestamp is fixed at
/// creation; rescheduling is not supported, so `Reminder`s computed from
/// `start_ts` never need to be recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketEvent {
    pub id: ID,
    pub title: String,
    /// Timestamp in millis at which the event starts
    pub start_ts: i64,
    /// Ticket price in the minor unit of `currency`. `0` means the event
    /// is free and registrations are paid immediately.
    pub price: i64,
    pub currency: String,
    pub artist_id: Option<ID>,
    pub location_id: Option<ID>,
    pub created: i64,
    pub updated: i64,
}

impl TicketEvent {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Whether the event has already started at `now` (millis). Starting
    /// exactly at `now` counts as started.
    pub fn has_started(&self, now: i64) -> bool {
        self.start_ts <= now
    }
}

impl Entity for TicketEvent {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
