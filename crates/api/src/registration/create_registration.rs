use super::subscribers::SendConfirmationOnRegistration;
use crate::error::StagePassError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::create_registration::*;
use stagepass_domain::{Participation, User, ID};
use stagepass_infra::{InsertParticipationError, StagePassContext};

pub async fn create_registration_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateRegistrationUseCase {
        user,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|participation| HttpResponse::Created().json(APIResponse::new(participation)))
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct CreateRegistrationUseCase {
    pub user: User,
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EventAlreadyStarted,
    AlreadyRegistered,
    StorageError,
}

impl From<UseCaseError> for StagePassError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::EventAlreadyStarted => {
                Self::BadClientData("The event has already started".into())
            }
            UseCaseError::AlreadyRegistered => {
                Self::BadClientData("You are already registered for this event".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateRegistrationUseCase {
    type Response = Participation;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateRegistration";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        let now = ctx.sys.get_timestamp_millis();
        if event.has_started(now) {
            return Err(UseCaseError::EventAlreadyStarted);
        }

        let participation = Participation::for_registration(self.user.id.clone(), &event, now);

        // The store decides whether this user already holds a
        // participation for the event; no read-then-write here.
        match ctx.repos.participations.insert(&participation).await {
            Ok(()) => Ok(participation),
            Err(InsertParticipationError::AlreadyExists) => Err(UseCaseError::AlreadyRegistered),
            Err(InsertParticipationError::Storage(_)) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendConfirmationOnRegistration)]
    }
}
