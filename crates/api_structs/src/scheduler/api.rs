use serde::{Deserialize, Serialize};

pub mod start_scheduler {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }
}

pub mod stop_scheduler {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }
}

pub mod get_scheduler_status {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// "running" or "stopped"
        pub status: String,
        pub timestamp: i64,
    }
}
