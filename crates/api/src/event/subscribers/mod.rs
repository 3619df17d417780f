use super::{
    create_event::CreateEventUseCase, delete_event::DeleteEventUseCase,
    schedule_reminders::ScheduleRemindersUseCase,
};
use crate::shared::usecase::{execute, Subscriber};
use stagepass_domain::TicketEvent;
use tracing::error;

pub struct CreateRemindersOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for CreateRemindersOnEventCreated {
    async fn notify(&self, e: &TicketEvent, ctx: &stagepass_infra::StagePassContext) {
        let schedule_reminders = ScheduleRemindersUseCase {
            event_id: e.id.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(schedule_reminders, ctx).await;
    }
}

pub struct DeleteRemindersOnEventDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteEventUseCase> for DeleteRemindersOnEventDeleted {
    async fn notify(&self, e: &TicketEvent, ctx: &stagepass_infra::StagePassContext) {
        if let Err(err) = ctx.repos.reminders.delete_by_event(&e.id).await {
            error!("Unable to delete reminders for deleted event {}: {:?}", e.id, err);
        }
    }
}
