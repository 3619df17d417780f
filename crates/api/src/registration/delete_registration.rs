use super::subscribers::SendConfirmationOnUnregistration;
use crate::error::StagePassError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::delete_registration::*;
use stagepass_domain::{Participation, User, ID};
use stagepass_infra::StagePassContext;

pub async fn delete_registration_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteRegistrationUseCase {
        user,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|participation| HttpResponse::Ok().json(APIResponse::new(participation)))
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct DeleteRegistrationUseCase {
    pub user: User,
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EventNotFound(ID),
    NotRegistered,
    EventAlreadyStarted,
}

impl From<UseCaseError> for StagePassError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EventNotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::NotRegistered => {
                Self::NotFound("You are not registered for this event".into())
            }
            UseCaseError::EventAlreadyStarted => {
                Self::BadClientData("The event has already started".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteRegistrationUseCase {
    type Response = Participation;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteRegistration";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::EventNotFound(self.event_id.clone()))?;

        let now = ctx.sys.get_timestamp_millis();
        if event.has_started(now) {
            return Err(UseCaseError::EventAlreadyStarted);
        }

        ctx.repos
            .participations
            .delete_by_user_and_event(&self.user.id, &self.event_id)
            .await
            .ok_or(UseCaseError::NotRegistered)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendConfirmationOnUnregistration)]
    }
}
