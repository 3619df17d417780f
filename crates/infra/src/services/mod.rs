mod mailer;
mod payment;

pub use mailer::{IMailer, InMemoryMailer, SentMail, WebhookMailer};
pub use payment::{HttpPaymentProvider, IPaymentProvider, InMemoryPaymentProvider};
