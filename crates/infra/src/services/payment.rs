use serde::Deserialize;
use stagepass_domain::{PaymentIntent, PaymentIntentStatus};
use stagepass_utils::create_random_secret;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

const PROVIDER_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Outbound payment capture. This core only ever creates intents sized
/// to an event price; confirmation happens out-of-band between the
/// client and the provider and comes back through the confirmation
/// endpoint.
#[async_trait::async_trait]
pub trait IPaymentProvider: Send + Sync {
    async fn create_intent(&self, amount: i64, currency: &str) -> anyhow::Result<PaymentIntent>;
}

#[derive(Debug, Deserialize)]
struct ProviderIntentResponse {
    id: String,
    client_secret: String,
}

/// Stripe-style provider adapter
pub struct HttpPaymentProvider {
    api_key: String,
    client: reqwest::Client,
}

impl HttpPaymentProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl IPaymentProvider for HttpPaymentProvider {
    async fn create_intent(&self, amount: i64, currency: &str) -> anyhow::Result<PaymentIntent> {
        let params = [
            ("amount", amount.to_string()),
            ("currency", currency.to_lowercase()),
        ];
        let res = self
            .client
            .post(PROVIDER_INTENTS_URL)
            .bearer_auth(&self.api_key)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderIntentResponse>()
            .await?;

        Ok(PaymentIntent {
            id: res.id,
            amount,
            currency: currency.to_string(),
            client_secret: res.client_secret,
            status: PaymentIntentStatus::RequiresConfirmation,
        })
    }
}

/// Fake provider for tests and keyless local development. Hands out
/// well-formed intents and records them for assertions.
pub struct InMemoryPaymentProvider {
    created: Mutex<Vec<PaymentIntent>>,
    failing: AtomicBool,
}

impl InMemoryPaymentProvider {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every future `create_intent` call fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn created_intents(&self) -> Vec<PaymentIntent> {
        self.created.lock().unwrap().clone()
    }
}

impl Default for InMemoryPaymentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IPaymentProvider for InMemoryPaymentProvider {
    async fn create_intent(&self, amount: i64, currency: &str) -> anyhow::Result<PaymentIntent> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("Payment provider unavailable"));
        }
        let id = format!("pi_{}", create_random_secret(24));
        let intent = PaymentIntent {
            client_secret: format!("{}_secret_{}", id, create_random_secret(24)),
            id,
            amount,
            currency: currency.to_string(),
            status: PaymentIntentStatus::RequiresConfirmation,
        };
        self.created.lock().unwrap().push(intent.clone());
        Ok(intent)
    }
}
