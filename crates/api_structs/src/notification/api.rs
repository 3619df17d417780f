use crate::dtos::ReminderDTO;
use serde::{Deserialize, Serialize};
use stagepass_domain::ID;

pub mod get_notifications {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub user_id: Option<ID>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<ReminderDTO>,
    }
}
