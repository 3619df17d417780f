use chrono::Utc;

/// Clock behind the reminder scheduler and registration cutoffs. Kept
/// as a trait so tests can pin "now" to a fixed instant.
pub trait ISys: Send + Sync {
    /// Current unix timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// Wall-clock implementation used outside of tests
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
