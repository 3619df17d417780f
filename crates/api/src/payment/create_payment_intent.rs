use crate::error::StagePassError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::create_payment_intent::*;
use stagepass_domain::{PaymentIntent, User, ID};
use stagepass_infra::StagePassContext;
use tracing::warn;

pub async fn create_payment_intent_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreatePaymentIntentUseCase {
        user,
        event_id: body.0.event_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|intent| {
            HttpResponse::Created().json(APIResponse {
                intent_id: intent.id,
                client_secret: intent.client_secret,
            })
        })
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct CreatePaymentIntentUseCase {
    pub user: User,
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    FreeEvent,
    ProviderError,
}

impl From<UseCaseError> for StagePassError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::FreeEvent => {
                Self::BadClientData("This event is free, there is nothing to pay".into())
            }
            UseCaseError::ProviderError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePaymentIntentUseCase {
    type Response = PaymentIntent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreatePaymentIntent";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        if event.is_free() {
            return Err(UseCaseError::FreeEvent);
        }

        let intent = ctx
            .payments
            .create_intent(event.price, &event.currency)
            .await
            .map_err(|e| {
                warn!("Payment provider rejected intent creation: {:?}", e);
                UseCaseError::ProviderError
            })?;

        // Best effort: tie the intent to the caller's pending
        // participation so the confirmation webhook can find it. A
        // caller who has not registered yet still gets an intent.
        match ctx
            .repos
            .participations
            .find_by_user_and_event(&self.user.id, &self.event_id)
            .await
        {
            Some(mut participation) if !participation.is_paid() => {
                participation.payment_intent_id = Some(intent.id.clone());
                if let Err(e) = ctx.repos.participations.save(&participation).await {
                    warn!(
                        "Unable to associate intent {} with participation {}: {:?}",
                        intent.id, participation.id, e
                    );
                }
            }
            _ => {
                warn!(
                    "No pending participation for user {} and event {}, intent {} left unassociated",
                    self.user.id, self.event_id, intent.id
                );
            }
        }

        Ok(intent)
    }
}
