use serde::{Deserialize, Serialize};
use stagepass_domain::{Participation, PaymentStatus, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationDTO {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
    pub payment_status: PaymentStatus,
    pub amount: i64,
    pub created: i64,
}

impl ParticipationDTO {
    pub fn new(participation: Participation) -> Self {
        Self {
            id: participation.id,
            user_id: participation.user_id,
            event_id: participation.event_id,
            payment_status: participation.payment_status,
            amount: participation.amount,
            created: participation.created,
        }
    }
}
