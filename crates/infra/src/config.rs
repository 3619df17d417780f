use tracing::warn;

pub const DEFAULT_TICK_INTERVAL_MILLIS: i64 = 60 * 1000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Interval in millis between reminder dispatch sweeps
    pub tick_interval_millis: i64,
    /// Endpoint of the outbound mail relay. When unset, reminder
    /// delivery is logged but skipped (useful for local development).
    pub mail_webhook_url: Option<String>,
    /// API key for the payment provider. When unset, intents are served
    /// by the in-process fake provider.
    pub payment_api_key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let tick_interval_millis = match std::env::var("RMD_TICK_INTERVAL_MILLIS") {
            Ok(val) => match val.parse::<i64>() {
                Ok(interval) if interval > 0 => interval,
                _ => {
                    warn!(
                        "The given RMD_TICK_INTERVAL_MILLIS: {} is not valid, falling back to the default: {}.",
                        val, DEFAULT_TICK_INTERVAL_MILLIS
                    );
                    DEFAULT_TICK_INTERVAL_MILLIS
                }
            },
            Err(_) => DEFAULT_TICK_INTERVAL_MILLIS,
        };

        Self {
            port,
            tick_interval_millis,
            mail_webhook_url: std::env::var("MAIL_WEBHOOK_URL").ok(),
            payment_api_key: std::env::var("PAYMENT_API_KEY").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
