use crate::dtos::ParticipationDTO;
use serde::{Deserialize, Serialize};
use stagepass_domain::{Participation, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationResponse {
    pub participation: ParticipationDTO,
}

impl ParticipationResponse {
    pub fn new(participation: Participation) -> Self {
        Self {
            participation: ParticipationDTO::new(participation),
        }
    }
}

pub mod create_registration {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = ParticipationResponse;
}

pub mod delete_registration {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = ParticipationResponse;
}

pub mod get_registration_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub is_registered: bool,
        pub requires_auth: bool,
    }
}
