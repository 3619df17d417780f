use crate::error::StagePassError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use stagepass_api_structs::confirm_payment::*;
use stagepass_domain::PaymentStatus;
use stagepass_infra::StagePassContext;
use tracing::{info, warn};

pub async fn confirm_payment_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    let usecase = ConfirmPaymentUseCase {
        intent_id: body.0.intent_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            HttpResponse::Ok().json(APIResponse {
                message: "Payment confirmation processed".into(),
            })
        })
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct ConfirmPaymentUseCase {
    pub intent_id: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for StagePassError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ConfirmPaymentUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "ConfirmPayment";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        let mut participation = match ctx
            .repos
            .participations
            .find_pending_by_intent(&self.intent_id)
            .await
        {
            Some(participation) => participation,
            None => {
                // Unknown or already-settled intent. The provider
                // retries webhooks, so this is expected traffic.
                warn!(
                    "No pending participation for intent {}, ignoring confirmation",
                    self.intent_id
                );
                return Ok(());
            }
        };

        participation.payment_status = PaymentStatus::Paid;
        ctx.repos
            .participations
            .save(&participation)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(
            "Participation {} marked paid by intent {}",
            participation.id, self.intent_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::payment::create_payment_intent::CreatePaymentIntentUseCase;
    use crate::registration::create_registration::CreateRegistrationUseCase;
    use stagepass_domain::{TicketEvent, User};
    use stagepass_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn register_pay_confirm_flow_marks_participation_paid() {
        let ctx = setup_context_inmemory();
        let user = User::new("fan@example.com", "Concert Goer");
        ctx.repos.users.insert(&user).await.unwrap();
        let event = TicketEvent {
            id: Default::default(),
            title: "Main Stage Show".into(),
            start_ts: ctx.sys.get_timestamp_millis() + 1000 * 60 * 60,
            price: 2500,
            currency: "EUR".into(),
            artist_id: None,
            location_id: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();

        let usecase = CreateRegistrationUseCase {
            user: user.clone(),
            event_id: event.id.clone(),
        };
        let participation = execute(usecase, &ctx).await.unwrap();
        assert_eq!(participation.payment_status, PaymentStatus::Pending);

        let usecase = CreatePaymentIntentUseCase {
            user: user.clone(),
            event_id: event.id.clone(),
        };
        let intent = execute(usecase, &ctx).await.unwrap();

        let usecase = ConfirmPaymentUseCase {
            intent_id: intent.id,
        };
        execute(usecase, &ctx).await.unwrap();

        let participation = ctx
            .repos
            .participations
            .find_by_user_and_event(&user.id, &event.id)
            .await
            .unwrap();
        assert_eq!(participation.payment_status, PaymentStatus::Paid);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_intent_is_ignored() {
        let ctx = setup_context_inmemory();
        let usecase = ConfirmPaymentUseCase {
            intent_id: "pi_does_not_exist".into(),
        };
        assert!(execute(usecase, &ctx).await.is_ok());
    }

    #[actix_web::main]
    #[test]
    async fn repeated_confirmation_is_a_noop() {
        let ctx = setup_context_inmemory();
        let user = User::new("fan@example.com", "Concert Goer");
        ctx.repos.users.insert(&user).await.unwrap();
        let event = TicketEvent {
            id: Default::default(),
            title: "Main Stage Show".into(),
            start_ts: ctx.sys.get_timestamp_millis() + 1000 * 60 * 60,
            price: 2500,
            currency: "EUR".into(),
            artist_id: None,
            location_id: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();

        let usecase = CreateRegistrationUseCase {
            user: user.clone(),
            event_id: event.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();
        let usecase = CreatePaymentIntentUseCase {
            user,
            event_id: event.id.clone(),
        };
        let intent = execute(usecase, &ctx).await.unwrap();

        for _ in 0..2 {
            let usecase = ConfirmPaymentUseCase {
                intent_id: intent.id.clone(),
            };
            assert!(execute(usecase, &ctx).await.is_ok());
        }
    }
}
