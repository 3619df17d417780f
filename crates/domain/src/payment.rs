use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresConfirmation,
    Succeeded,
    Failed,
}

/// A provider-side payment intent. Ephemeral and external: the durable
/// record of the purchase is the `Participation`, which references the
/// intent by id while it is pending.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    /// Provider-assigned id, e.g. `pi_...`
    pub id: String,
    pub amount: i64,
    pub currency: String,
    /// Secret handed to the client to confirm the intent out-of-band
    pub client_secret: String,
    pub status: PaymentIntentStatus,
}
