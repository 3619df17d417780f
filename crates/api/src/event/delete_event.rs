use super::subscribers::DeleteRemindersOnEventDeleted;
use crate::error::StagePassError;
use crate::shared::{
    auth::protect_admin_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::delete_event::*;
use stagepass_domain::{TicketEvent, ID};
use stagepass_infra::StagePassContext;

pub async fn delete_event_admin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    protect_admin_route(&http_req, &ctx).await?;

    let usecase = DeleteEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
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
impl UseCase for DeleteEventUseCase {
    type Response = TicketEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .delete(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(DeleteRemindersOnEventDeleted)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::schedule_reminders::ScheduleRemindersUseCase;
    use stagepass_infra::setup_context_inmemory;

    #[actix_web::main]
    #[test]
    async fn deleting_event_cascades_its_reminders() {
        let ctx = setup_context_inmemory();
        let event = TicketEvent {
            id: Default::default(),
            title: "Main Stage Show".into(),
            start_ts: ctx.sys.get_timestamp_millis() + 1000 * 60 * 60 * 24,
            price: 0,
            currency: "EUR".into(),
            artist_id: None,
            location_id: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        let usecase = ScheduleRemindersUseCase {
            event_id: event.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();
        assert_eq!(ctx.repos.reminders.find_by_event(&event.id).await.len(), 2);

        let usecase = DeleteEventUseCase {
            event_id: event.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        assert!(ctx.repos.events.find(&event.id).await.is_none());
        assert!(ctx.repos.reminders.find_by_event(&event.id).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_event() {
        let ctx = setup_context_inmemory();
        let usecase = DeleteEventUseCase {
            event_id: ID::new(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_err());
    }
}
