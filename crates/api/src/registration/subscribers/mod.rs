use super::create_registration::CreateRegistrationUseCase;
use super::delete_registration::DeleteRegistrationUseCase;
use crate::shared::usecase::Subscriber;
use stagepass_domain::Participation;
use stagepass_infra::StagePassContext;
use tracing::warn;

pub struct SendConfirmationOnRegistration;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateRegistrationUseCase> for SendConfirmationOnRegistration {
    async fn notify(&self, participation: &Participation, ctx: &StagePassContext) {
        let user = match ctx.repos.users.find(&participation.user_id).await {
            Some(user) => user,
            None => return,
        };
        let event_title = match ctx.repos.events.find(&participation.event_id).await {
            Some(event) => event.title,
            None => return,
        };

        let body = if participation.is_paid() {
            format!("You are registered for {}. See you there!", event_title)
        } else {
            format!(
                "You are registered for {}. Complete your payment to secure your spot.",
                event_title
            )
        };

        if let Err(e) = ctx
            .mailer
            .send_reminder(&user.email, "Registration received", &body)
            .await
        {
            warn!(
                "Unable to send registration confirmation to {}: {:?}",
                user.email, e
            );
        }
    }
}

pub struct SendConfirmationOnUnregistration;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteRegistrationUseCase> for SendConfirmationOnUnregistration {
    async fn notify(&self, participation: &Participation, ctx: &StagePassContext) {
        let user = match ctx.repos.users.find(&participation.user_id).await {
            Some(user) => user,
            None => return,
        };
        let event_title = match ctx.repos.events.find(&participation.event_id).await {
            Some(event) => event.title,
            None => return,
        };

        let body = format!(
            "Your registration for {} has been cancelled.",
            event_title
        );
        if let Err(e) = ctx
            .mailer
            .send_reminder(&user.email, "Registration cancelled", &body)
            .await
        {
            warn!(
                "Unable to send cancellation confirmation to {}: {:?}",
                user.email, e
            );
        }
    }
}
