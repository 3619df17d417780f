use crate::{
    shared::entity::{Entity, ID},
    Artist, Location, TicketEvent,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const ONE_HOUR_MILLIS: i64 = 60 * 60 * 1000;
const TEN_MINUTES_MILLIS: i64 = 10 * 60 * 1000;

/// Label used in rendered reminder messages when the event has no
/// artist or location assigned yet.
pub const UNANNOUNCED_LABEL: &str = "TBA";

/// The time-offset variants a `Reminder` can be scheduled at, relative
/// to the start of its `TicketEvent`. At most one `Reminder` exists per
/// (event, kind) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderKind {
    OneHourBefore,
    TenMinutesBefore,
}

impl ReminderKind {
    /// All kinds scheduled for a newly created event
    pub fn all() -> [ReminderKind; 2] {
        [ReminderKind::OneHourBefore, ReminderKind::TenMinutesBefore]
    }

    /// How long before the event start this kind fires, in millis
    pub fn offset_millis(&self) -> i64 {
        match self {
            ReminderKind::OneHourBefore => ONE_HOUR_MILLIS,
            ReminderKind::TenMinutesBefore => TEN_MINUTES_MILLIS,
        }
    }

    fn lead_time_label(&self) -> &'static str {
        match self {
            ReminderKind::OneHourBefore => "in one hour",
            ReminderKind::TenMinutesBefore => "in ten minutes",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::OneHourBefore => "ONE_HOUR_BEFORE",
            ReminderKind::TenMinutesBefore => "TEN_MINUTES_BEFORE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ONE_HOUR_BEFORE" => Some(ReminderKind::OneHourBefore),
            "TEN_MINUTES_BEFORE" => Some(ReminderKind::TenMinutesBefore),
            _ => None,
        }
    }
}

impl Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled, single-fire notification tied to one `TicketEvent` and
/// one offset kind. Title and message are snapshotted when the reminder
/// is scheduled and are not recomputed at send time.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub event_id: ID,
    pub kind: ReminderKind,
    pub title: String,
    pub message: String,
    /// The timestamp in millis at which this reminder becomes due:
    /// `event.start_ts - kind.offset_millis()`
    pub remind_at: i64,
    pub sent: bool,
    pub sent_at: Option<i64>,
}

impl Reminder {
    /// Render a reminder for `event` at schedule time. Artist and
    /// location fall back to a placeholder label when missing.
    pub fn schedule(
        event: &TicketEvent,
        artist: Option<&Artist>,
        location: Option<&Location>,
        kind: ReminderKind,
    ) -> Self {
        let artist_name = artist
            .map(|a| a.name.as_str())
            .unwrap_or(UNANNOUNCED_LABEL);
        let location_name = location
            .map(|l| l.name.as_str())
            .unwrap_or(UNANNOUNCED_LABEL);

        Self {
            id: Default::default(),
            event_id: event.id.clone(),
            kind,
            title: format!("{} starts {}", event.title, kind.lead_time_label()),
            message: format!(
                "{} with {} starts {} at {}",
                event.title,
                artist_name,
                kind.lead_time_label(),
                location_name
            ),
            remind_at: event.start_ts - kind.offset_millis(),
            sent: false,
            sent_at: None,
        }
    }

    /// Whether this reminder should fire in a sweep at `now`
    pub fn is_due(&self, now: i64) -> bool {
        !self.sent && self.remind_at <= now
    }
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn event() -> TicketEvent {
        TicketEvent {
            id: Default::default(),
            title: "Main Stage Show".into(),
            start_ts: 1_000_000_000,
            price: 0,
            currency: "EUR".into(),
            artist_id: None,
            location_id: None,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn computes_fire_times_from_event_start() {
        let e = event();
        let one_hour = Reminder::schedule(&e, None, None, ReminderKind::OneHourBefore);
        let ten_min = Reminder::schedule(&e, None, None, ReminderKind::TenMinutesBefore);

        assert_eq!(one_hour.remind_at, e.start_ts - 60 * 60 * 1000);
        assert_eq!(ten_min.remind_at, e.start_ts - 10 * 60 * 1000);
        assert!(!one_hour.sent);
        assert!(one_hour.sent_at.is_none());
    }

    #[test]
    fn renders_placeholder_labels_when_artist_and_location_missing() {
        let r = Reminder::schedule(&event(), None, None, ReminderKind::OneHourBefore);
        assert_eq!(
            r.message,
            "Main Stage Show with TBA starts in one hour at TBA"
        );
    }

    #[test]
    fn renders_artist_and_location_names() {
        let artist = Artist {
            id: Default::default(),
            name: "The Headliners".into(),
        };
        let location = Location {
            id: Default::default(),
            name: "Riverside Arena".into(),
        };
        let r = Reminder::schedule(
            &event(),
            Some(&artist),
            Some(&location),
            ReminderKind::TenMinutesBefore,
        );
        assert_eq!(
            r.message,
            "Main Stage Show with The Headliners starts in ten minutes at Riverside Arena"
        );
    }

    #[test]
    fn due_only_when_unsent_and_elapsed() {
        let mut r = Reminder::schedule(&event(), None, None, ReminderKind::OneHourBefore);
        assert!(!r.is_due(r.remind_at - 1));
        assert!(r.is_due(r.remind_at));
        assert!(r.is_due(r.remind_at + 500));

        r.sent = true;
        assert!(!r.is_due(r.remind_at + 500));
    }

    #[test]
    fn kind_labels_round_trip() {
        for kind in ReminderKind::all() {
            assert_eq!(ReminderKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ReminderKind::from_str("NEVER"), None);
    }
}
