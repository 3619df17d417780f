use serde::Serialize;
use std::sync::Mutex;
use tracing::info;

/// Outbound mail transport. The real implementation relays through an
/// HTTP webhook; tests use the recording in-memory variant. Senders
/// treat every failure as non-fatal and keep going.
#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send_reminder(&self, recipient: &str, subject: &str, body: &str)
        -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
struct MailPayload<'a> {
    recipient: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Relays mail through the configured webhook endpoint. When no
/// endpoint is configured the mail is logged and dropped, which keeps
/// local development working without credentials.
pub struct WebhookMailer {
    url: Option<String>,
    client: reqwest::Client,
}

impl WebhookMailer {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl IMailer for WebhookMailer {
    async fn send_reminder(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> anyhow::Result<()> {
        let url = match &self.url {
            Some(url) => url,
            None => {
                info!(
                    "No mail webhook configured, dropping mail to {}: {}",
                    recipient, subject
                );
                return Ok(());
            }
        };

        self.client
            .post(url)
            .json(&MailPayload {
                recipient,
                subject,
                body,
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Recording mailer for tests. Individual recipients can be made to
/// fail to exercise the swallow-and-continue policy of the dispatcher.
pub struct InMemoryMailer {
    sent: Mutex<Vec<SentMail>>,
    rejected_recipients: Mutex<Vec<String>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            rejected_recipients: Mutex::new(Vec::new()),
        }
    }

    /// Make every future send to `recipient` fail
    pub fn reject_recipient(&self, recipient: &str) {
        self.rejected_recipients
            .lock()
            .unwrap()
            .push(recipient.to_string());
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send_reminder(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> anyhow::Result<()> {
        if self
            .rejected_recipients
            .lock()
            .unwrap()
            .iter()
            .any(|r| r == recipient)
        {
            return Err(anyhow::anyhow!("Mail to {} was rejected", recipient));
        }
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
