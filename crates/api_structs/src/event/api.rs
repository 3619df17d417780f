use crate::dtos::TicketEventDTO;
use serde::{Deserialize, Serialize};
use stagepass_domain::{TicketEvent, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketEventResponse {
    pub event: TicketEventDTO,
}

impl TicketEventResponse {
    pub fn new(event: TicketEvent) -> Self {
        Self {
            event: TicketEventDTO::new(event),
        }
    }
}

pub mod create_event {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        pub start_ts: i64,
        pub price: i64,
        pub currency: String,
        pub artist_id: Option<ID>,
        pub location_id: Option<ID>,
    }

    pub type APIResponse = TicketEventResponse;
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = TicketEventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = TicketEventResponse;
}
