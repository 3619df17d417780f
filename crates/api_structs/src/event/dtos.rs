use serde::{Deserialize, Serialize};
use stagepass_domain::{TicketEvent, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TicketEventDTO {
    pub id: ID,
    pub title: String,
    pub start_ts: i64,
    pub price: i64,
    pub currency: String,
    pub artist_id: Option<ID>,
    pub location_id: Option<ID>,
    pub created: i64,
    pub updated: i64,
}

impl TicketEventDTO {
    pub fn new(event: TicketEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            start_ts: event.start_ts,
            price: event.price,
            currency: event.currency,
            artist_id: event.artist_id,
            location_id: event.location_id,
            created: event.created,
            updated: event.updated,
        }
    }
}
