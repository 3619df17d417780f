use super::subscribers::CreateRemindersOnEventCreated;
use crate::error::StagePassError;
use crate::shared::{
    auth::protect_admin_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::create_event::*;
use stagepass_domain::{TicketEvent, ID};
use stagepass_infra::StagePassContext;

pub async fn create_event_admin_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    protect_admin_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateEventUseCase {
        title: body.title,
        start_ts: body.start_ts,
        price: body.price,
        currency: body.currency,
        artist_id: body.artist_id,
        location_id: body.location_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub title: String,
    pub start_ts: i64,
    pub price: i64,
    pub currency: String,
    pub artist_id: Option<ID>,
    pub location_id: Option<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidPrice(i64),
    StartTimeInPast,
    StorageError,
}

impl From<UseCaseError> for StagePassError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidPrice(price) => Self::BadClientData(format!(
                "The price: {}, is not valid, it needs to be zero or greater.",
                price
            )),
            UseCaseError::StartTimeInPast => {
                Self::BadClientData("The event start time cannot be in the past".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = TicketEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        if self.price < 0 {
            return Err(UseCaseError::InvalidPrice(self.price));
        }
        let now = ctx.sys.get_timestamp_millis();
        if self.start_ts <= now {
            return Err(UseCaseError::StartTimeInPast);
        }

        let e = TicketEvent {
            id: Default::default(),
            title: self.title.clone(),
            start_ts: self.start_ts,
            price: self.price,
            currency: self.currency.clone(),
            artist_id: self.artist_id.clone(),
            location_id: self.location_id.clone(),
            created: now,
            updated: now,
        };

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateRemindersOnEventCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use stagepass_infra::setup_context_inmemory;

    fn usecase(start_ts: i64, price: i64) -> CreateEventUseCase {
        CreateEventUseCase {
            title: "Main Stage Show".into(),
            start_ts,
            price,
            currency: "EUR".into(),
            artist_id: None,
            location_id: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_event() {
        let ctx = setup_context_inmemory();
        let now = ctx.sys.get_timestamp_millis();

        let mut usecase = usecase(now + 1000 * 60 * 60, 0);
        let res = usecase.execute(&ctx).await;

        assert!(res.is_ok());
        let event = res.unwrap();
        assert!(ctx.repos.events.find(&event.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_negative_price() {
        let ctx = setup_context_inmemory();
        let now = ctx.sys.get_timestamp_millis();

        let mut usecase = usecase(now + 1000 * 60 * 60, -100);
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap_err(), UseCaseError::InvalidPrice(-100));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_start_time_in_past() {
        let ctx = setup_context_inmemory();
        let now = ctx.sys.get_timestamp_millis();

        let mut usecase = usecase(now - 1, 0);
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap_err(), UseCaseError::StartTimeInPast);
    }
}
