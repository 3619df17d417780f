use crate::{
    shared::entity::{Entity, ID},
    TicketEvent,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Awaiting a provider-confirmed payment
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(PaymentStatus::Pending),
            "PAID" => Some(PaymentStatus::Paid),
            _ => None,
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The record of a `User`'s registration for one `TicketEvent`, and the
/// state of its payment. At most one participation exists per
/// (user, event) pair, enforced by the participation store.
#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
    pub payment_status: PaymentStatus,
    /// Amount owed/paid in the minor unit of the event currency
    pub amount: i64,
    /// Provider intent this participation is waiting on, if checkout
    /// has been started
    pub payment_intent_id: Option<String>,
    pub created: i64,
}

impl Participation {
    /// Create the participation for a registration request. Free events
    /// are paid immediately; priced events start out pending until the
    /// payment provider confirms.
    pub fn for_registration(user_id: ID, event: &TicketEvent, now: i64) -> Self {
        let payment_status = if event.is_free() {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        };
        Self {
            id: Default::default(),
            user_id,
            event_id: event.id.clone(),
            payment_status,
            amount: event.price,
            payment_intent_id: None,
            created: now,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

impl Entity for Participation {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn event(price: i64) -> TicketEvent {
        TicketEvent {
            id: Default::default(),
            title: "Main Stage Show".into(),
            start_ts: 1_000_000,
            price,
            currency: "EUR".into(),
            artist_id: None,
            location_id: None,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn free_event_is_paid_immediately() {
        let p = Participation::for_registration(ID::new(), &event(0), 42);
        assert_eq!(p.payment_status, PaymentStatus::Paid);
        assert_eq!(p.amount, 0);
        assert!(p.is_paid());
    }

    #[test]
    fn priced_event_is_pending_with_full_amount() {
        let p = Participation::for_registration(ID::new(), &event(2500), 42);
        assert_eq!(p.payment_status, PaymentStatus::Pending);
        assert_eq!(p.amount, 2500);
        assert!(!p.is_paid());
        assert!(p.payment_intent_id.is_none());
    }

    #[test]
    fn status_labels_round_trip() {
        for status in [PaymentStatus::Pending, PaymentStatus::Paid] {
            assert_eq!(PaymentStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(PaymentStatus::from_str("REFUNDED"), None);
    }
}
