use crate::error::StagePassError;
use crate::shared::{
    auth::current_user,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::get_registration_status::*;
use stagepass_domain::ID;
use stagepass_infra::StagePassContext;

pub async fn get_registration_status_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    // An anonymous caller is not an error here: the page asking simply
    // renders a sign-in prompt.
    let user = match current_user(&http_req, &ctx).await {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Ok().json(APIResponse {
                is_registered: false,
                requires_auth: true,
            }))
        }
    };

    let usecase = GetRegistrationStatusUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|is_registered| {
            HttpResponse::Ok().json(APIResponse {
                is_registered,
                requires_auth: false,
            })
        })
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct GetRegistrationStatusUseCase {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for StagePassError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRegistrationStatusUseCase {
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "GetRegistrationStatus";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.events.find(&self.event_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.event_id.clone()));
        }

        Ok(ctx
            .repos
            .participations
            .find_by_user_and_event(&self.user_id, &self.event_id)
            .await
            .is_some())
    }
}
