use crate::shared::usecase::UseCase;
use stagepass_domain::{Reminder, User};
use stagepass_infra::StagePassContext;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Decides who receives a given reminder. Reminders currently go out to
/// every registered user; keeping the policy behind this trait means a
/// participant-only policy is a new impl, not a rewrite of the sweep.
#[async_trait::async_trait(?Send)]
pub trait RecipientResolver {
    async fn resolve(&self, reminder: &Reminder, ctx: &StagePassContext) -> Vec<User>;
}

pub struct BroadcastRecipients;

#[async_trait::async_trait(?Send)]
impl RecipientResolver for BroadcastRecipients {
    async fn resolve(&self, _reminder: &Reminder, ctx: &StagePassContext) -> Vec<User> {
        match ctx.repos.users.find_all().await {
            Ok(users) => users,
            Err(e) => {
                error!("Unable to resolve reminder recipients: {:?}", e);
                Vec::new()
            }
        }
    }
}

/// One dispatch sweep: every unsent reminder whose fire time has
/// elapsed is mailed to its recipients and then flipped to sent. A
/// reminder that was flipped by a competing sweep is skipped, so
/// re-running the sweep never re-notifies.
pub struct DispatchDueRemindersUseCase {
    pub recipients: Arc<dyn RecipientResolver>,
}

impl Default for DispatchDueRemindersUseCase {
    fn default() -> Self {
        Self {
            recipients: Arc::new(BroadcastRecipients),
        }
    }
}

impl fmt::Debug for DispatchDueRemindersUseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DispatchDueRemindersUseCase")
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchDueRemindersUseCase {
    /// The number of reminders dispatched in this sweep
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchDueReminders";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let due = ctx.repos.reminders.find_due(now).await;
        if due.is_empty() {
            return Ok(0);
        }
        info!("Found {} due reminder(s) at {}", due.len(), now);

        let mut dispatched = 0;
        for reminder in due {
            let recipients = self.recipients.resolve(&reminder, ctx).await;
            for recipient in &recipients {
                if let Err(e) = ctx
                    .mailer
                    .send_reminder(&recipient.email, &reminder.title, &reminder.message)
                    .await
                {
                    // One bad mailbox must not hold up the rest of the sweep
                    warn!(
                        "Unable to deliver reminder {} to {}: {:?}",
                        reminder.id, recipient.email, e
                    );
                }
            }

            // A failure here must not abandon the rest of the due set;
            // the unmarked reminder is retried on the next sweep
            match ctx.repos.reminders.mark_sent(&reminder.id, now).await {
                Ok(true) => dispatched += 1,
                Ok(false) => {
                    warn!(
                        "Reminder {} was already marked sent by a competing sweep",
                        reminder.id
                    );
                }
                Err(e) => {
                    error!("Unable to mark reminder {} as sent: {:?}", reminder.id, e);
                }
            }
        }

        Ok(dispatched)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use stagepass_domain::{ReminderKind, TicketEvent, ID};
    use stagepass_infra::{setup_context_inmemory, DeleteResult, IReminderRepo, InMemoryMailer, ISys};

    struct FixedSys(i64);
    impl ISys for FixedSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    fn reminder(event_id: &ID, remind_at: i64, kind: ReminderKind) -> Reminder {
        Reminder {
            id: Default::default(),
            event_id: event_id.clone(),
            kind,
            title: "Main Stage Show".into(),
            message: "Main Stage Show with The Headliners starts in 1 hour at Riverside Arena"
                .into(),
            remind_at,
            sent: false,
            sent_at: None,
        }
    }

    fn user(email: &str) -> User {
        User {
            id: Default::default(),
            email: email.into(),
            full_name: "Concert Goer".into(),
            admin: false,
        }
    }

    async fn insert_event(ctx: &StagePassContext, start_ts: i64) -> TicketEvent {
        let event = TicketEvent {
            id: Default::default(),
            title: "Main Stage Show".into(),
            start_ts,
            price: 0,
            currency: "EUR".into(),
            artist_id: None,
            location_id: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    #[actix_web::main]
    #[test]
    async fn dispatches_only_elapsed_reminders() {
        let mut ctx = setup_context_inmemory();
        let now = 1_753_077_600_000; // 2025-07-21 06:00:00 UTC
        ctx.sys = Arc::new(FixedSys(now));
        let mailer = Arc::new(InMemoryMailer::new());
        ctx.mailer = mailer.clone();

        ctx.repos.users.insert(&user("fan@example.com")).await.unwrap();
        let event = insert_event(&ctx, now + 1000 * 60 * 60 * 2).await;
        ctx.repos
            .reminders
            .bulk_insert(&[
                reminder(&event.id, now - 1000, ReminderKind::OneHourBefore),
                reminder(&event.id, now + 1000 * 60 * 50, ReminderKind::TenMinutesBefore),
            ])
            .await
            .unwrap();

        let res = execute(DispatchDueRemindersUseCase::default(), &ctx).await;
        assert_eq!(res.unwrap(), 1);
        assert_eq!(mailer.sent().len(), 1);

        let stored = ctx.repos.reminders.find_by_event(&event.id).await;
        assert!(stored
            .iter()
            .any(|r| r.kind == ReminderKind::OneHourBefore && r.sent));
        assert!(stored
            .iter()
            .any(|r| r.kind == ReminderKind::TenMinutesBefore && !r.sent));
    }

    #[actix_web::main]
    #[test]
    async fn reminder_due_exactly_now_fires() {
        let mut ctx = setup_context_inmemory();
        let now = 1_753_077_600_000;
        ctx.sys = Arc::new(FixedSys(now));

        ctx.repos.users.insert(&user("fan@example.com")).await.unwrap();
        let event = insert_event(&ctx, now + 1000 * 60 * 60).await;
        ctx.repos
            .reminders
            .bulk_insert(&[reminder(&event.id, now, ReminderKind::OneHourBefore)])
            .await
            .unwrap();

        let res = execute(DispatchDueRemindersUseCase::default(), &ctx).await;
        assert_eq!(res.unwrap(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn second_sweep_is_a_noop() {
        let mut ctx = setup_context_inmemory();
        let now = 1_753_077_600_000;
        ctx.sys = Arc::new(FixedSys(now));
        let mailer = Arc::new(InMemoryMailer::new());
        ctx.mailer = mailer.clone();

        ctx.repos.users.insert(&user("fan@example.com")).await.unwrap();
        let event = insert_event(&ctx, now + 1000).await;
        ctx.repos
            .reminders
            .bulk_insert(&[reminder(&event.id, now - 1000, ReminderKind::OneHourBefore)])
            .await
            .unwrap();

        let res = execute(DispatchDueRemindersUseCase::default(), &ctx).await;
        assert_eq!(res.unwrap(), 1);
        let res = execute(DispatchDueRemindersUseCase::default(), &ctx).await;
        assert_eq!(res.unwrap(), 0);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn every_registered_user_receives_the_reminder() {
        let mut ctx = setup_context_inmemory();
        let now = 1_753_077_600_000;
        ctx.sys = Arc::new(FixedSys(now));
        let mailer = Arc::new(InMemoryMailer::new());
        ctx.mailer = mailer.clone();

        for i in 0..3 {
            ctx.repos
                .users
                .insert(&user(&format!("fan{}@example.com", i)))
                .await
                .unwrap();
        }
        let event = insert_event(&ctx, now + 1000).await;
        ctx.repos
            .reminders
            .bulk_insert(&[reminder(&event.id, now - 1, ReminderKind::OneHourBefore)])
            .await
            .unwrap();

        execute(DispatchDueRemindersUseCase::default(), &ctx)
            .await
            .unwrap();
        assert_eq!(mailer.sent().len(), 3);
    }

    struct FlakyMarkSentRepo {
        inner: Arc<dyn IReminderRepo>,
        fail_for: ID,
    }

    #[async_trait::async_trait]
    impl IReminderRepo for FlakyMarkSentRepo {
        async fn bulk_insert(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
            self.inner.bulk_insert(reminders).await
        }

        async fn find_due(&self, now: i64) -> Vec<Reminder> {
            self.inner.find_due(now).await
        }

        async fn mark_sent(&self, reminder_id: &ID, sent_at: i64) -> anyhow::Result<bool> {
            if *reminder_id == self.fail_for {
                return Err(anyhow::anyhow!("connection reset"));
            }
            self.inner.mark_sent(reminder_id, sent_at).await
        }

        async fn find_by_event(&self, event_id: &ID) -> Vec<Reminder> {
            self.inner.find_by_event(event_id).await
        }

        async fn find_all(&self) -> Vec<Reminder> {
            self.inner.find_all().await
        }

        async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
            self.inner.delete_by_event(event_id).await
        }
    }

    #[actix_web::main]
    #[test]
    async fn mark_sent_failure_does_not_abandon_the_rest_of_the_sweep() {
        let mut ctx = setup_context_inmemory();
        let now = 1_753_077_600_000;
        ctx.sys = Arc::new(FixedSys(now));
        let mailer = Arc::new(InMemoryMailer::new());
        ctx.mailer = mailer.clone();

        ctx.repos.users.insert(&user("fan@example.com")).await.unwrap();
        let event1 = insert_event(&ctx, now + 1000).await;
        let event2 = insert_event(&ctx, now + 2000).await;
        let flaky = reminder(&event1.id, now - 2, ReminderKind::OneHourBefore);
        let healthy = reminder(&event2.id, now - 1, ReminderKind::OneHourBefore);
        ctx.repos
            .reminders
            .bulk_insert(&[flaky.clone(), healthy.clone()])
            .await
            .unwrap();
        ctx.repos.reminders = Arc::new(FlakyMarkSentRepo {
            inner: ctx.repos.reminders.clone(),
            fail_for: flaky.id.clone(),
        });

        let res = execute(DispatchDueRemindersUseCase::default(), &ctx).await;
        assert_eq!(res.unwrap(), 1);
        // Both reminders were delivered even though one mark failed
        assert_eq!(mailer.sent().len(), 2);

        // The unmarked reminder stays due for the next sweep
        let due = ctx.repos.reminders.find_due(now).await;
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, flaky.id);
    }

    #[actix_web::main]
    #[test]
    async fn failed_delivery_still_marks_reminder_sent() {
        let mut ctx = setup_context_inmemory();
        let now = 1_753_077_600_000;
        ctx.sys = Arc::new(FixedSys(now));
        let mailer = Arc::new(InMemoryMailer::new());
        mailer.reject_recipient("bouncing@example.com");
        ctx.mailer = mailer.clone();

        ctx.repos
            .users
            .insert(&user("bouncing@example.com"))
            .await
            .unwrap();
        ctx.repos.users.insert(&user("fan@example.com")).await.unwrap();
        let event = insert_event(&ctx, now + 1000).await;
        ctx.repos
            .reminders
            .bulk_insert(&[reminder(&event.id, now - 1, ReminderKind::OneHourBefore)])
            .await
            .unwrap();

        let res = execute(DispatchDueRemindersUseCase::default(), &ctx).await;
        assert_eq!(res.unwrap(), 1);
        assert_eq!(mailer.sent().len(), 1);

        let stored = ctx.repos.reminders.find_by_event(&event.id).await;
        assert!(stored[0].sent);
        assert_eq!(stored[0].sent_at, Some(now));
    }
}
