use crate::shared::usecase::UseCase;
use stagepass_domain::{Reminder, ReminderKind, ID};
use stagepass_infra::StagePassContext;

/// Writes the due-reminder rows for a freshly created `TicketEvent`:
/// one per `ReminderKind`, with title/message rendered now and never
/// recomputed. Runs as a side effect of event creation; failures are
/// logged by the executor and must never abort the event write.
#[derive(Debug)]
pub struct ScheduleRemindersUseCase {
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleReminders";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        let event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            // The event vanished between creation and scheduling,
            // nothing to do
            None => return Ok(Vec::new()),
        };

        let artist = match &event.artist_id {
            Some(artist_id) => ctx.repos.artists.find(artist_id).await,
            None => None,
        };
        let location = match &event.location_id {
            Some(location_id) => ctx.repos.locations.find(location_id).await,
            None => None,
        };

        // A fire time already in the past is written as-is: the
        // dispatcher treats due as `remind_at <= now`, so it fires on
        // the next sweep instead of being dropped.
        let reminders = ReminderKind::all()
            .iter()
            .map(|kind| Reminder::schedule(&event, artist.as_ref(), location.as_ref(), *kind))
            .collect::<Vec<_>>();

        ctx.repos
            .reminders
            .bulk_insert(&reminders)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use stagepass_domain::{Artist, Location, TicketEvent};
    use stagepass_infra::setup_context_inmemory;

    async fn insert_event(
        ctx: &StagePassContext,
        artist_id: Option<ID>,
        location_id: Option<ID>,
    ) -> TicketEvent {
        let event = TicketEvent {
            id: Default::default(),
            title: "Main Stage Show".into(),
            start_ts: ctx.sys.get_timestamp_millis() + 1000 * 60 * 60 * 24,
            price: 0,
            currency: "EUR".into(),
            artist_id,
            location_id,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    #[actix_web::main]
    #[test]
    async fn schedules_one_reminder_per_kind() {
        let ctx = setup_context_inmemory();
        let event = insert_event(&ctx, None, None).await;

        let usecase = ScheduleRemindersUseCase {
            event_id: event.id.clone(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());

        let reminders = ctx.repos.reminders.find_by_event(&event.id).await;
        assert_eq!(reminders.len(), 2);

        let one_hour = reminders
            .iter()
            .find(|r| r.kind == ReminderKind::OneHourBefore)
            .unwrap();
        let ten_min = reminders
            .iter()
            .find(|r| r.kind == ReminderKind::TenMinutesBefore)
            .unwrap();
        assert_eq!(one_hour.remind_at, event.start_ts - 1000 * 60 * 60);
        assert_eq!(ten_min.remind_at, event.start_ts - 1000 * 60 * 10);
        assert!(!one_hour.sent);
        assert!(!ten_min.sent);
    }

    #[actix_web::main]
    #[test]
    async fn renders_message_with_artist_and_location() {
        let ctx = setup_context_inmemory();
        let artist = Artist {
            id: Default::default(),
            name: "The Headliners".into(),
        };
        let location = Location {
            id: Default::default(),
            name: "Riverside Arena".into(),
        };
        ctx.repos.artists.insert(&artist).await.unwrap();
        ctx.repos.locations.insert(&location).await.unwrap();
        let event = insert_event(&ctx, Some(artist.id.clone()), Some(location.id.clone())).await;

        let usecase = ScheduleRemindersUseCase {
            event_id: event.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        let reminders = ctx.repos.reminders.find_by_event(&event.id).await;
        for reminder in reminders {
            assert!(reminder.message.contains("The Headliners"));
            assert!(reminder.message.contains("Riverside Arena"));
        }
    }

    #[actix_web::main]
    #[test]
    async fn renders_placeholders_when_artist_reference_is_dangling() {
        let ctx = setup_context_inmemory();
        // References an artist that does not exist in the store
        let event = insert_event(&ctx, Some(ID::new()), None).await;

        let usecase = ScheduleRemindersUseCase {
            event_id: event.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        let reminders = ctx.repos.reminders.find_by_event(&event.id).await;
        assert_eq!(reminders.len(), 2);
        for reminder in reminders {
            assert!(reminder.message.contains("TBA"));
        }
    }

    #[actix_web::main]
    #[test]
    async fn silently_ignores_missing_event() {
        let ctx = setup_context_inmemory();

        let usecase = ScheduleRemindersUseCase {
            event_id: ID::new(),
        };
        let res = execute(usecase, &ctx).await;

        assert!(res.is_ok());
        assert!(res.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_duplicate_scheduling_for_same_event() {
        let ctx = setup_context_inmemory();
        let event = insert_event(&ctx, None, None).await;

        let usecase = ScheduleRemindersUseCase {
            event_id: event.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        // Second run hits the (event, kind) uniqueness constraint
        let usecase = ScheduleRemindersUseCase {
            event_id: event.id.clone(),
        };
        let res = execute(usecase, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::StorageError);
        assert_eq!(ctx.repos.reminders.find_by_event(&event.id).await.len(), 2);
    }
}
