use crate::error::StagePassError;
use crate::shared::{
    auth::current_user,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use stagepass_api_structs::dtos::ReminderDTO;
use stagepass_api_structs::get_notifications::*;
use stagepass_domain::Reminder;
use stagepass_infra::StagePassContext;

pub async fn get_notifications_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<StagePassContext>,
) -> Result<HttpResponse, StagePassError> {
    // Admins also see reminders that have not fired yet. An admin
    // passing `user_id` asks for that user's view instead, and
    // reminders are broadcast, so that is the sent-only listing.
    let include_unsent = current_user(&http_req, &ctx)
        .await
        .map(|u| u.admin)
        .unwrap_or(false)
        && query_params.user_id.is_none();

    let usecase = GetNotificationsUseCase { include_unsent };

    execute(usecase, &ctx)
        .await
        .map(|reminders| {
            HttpResponse::Ok().json(APIResponse {
                notifications: reminders.into_iter().map(ReminderDTO::new).collect(),
            })
        })
        .map_err(StagePassError::from)
}

#[derive(Debug)]
pub struct GetNotificationsUseCase {
    pub include_unsent: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {}

impl From<UseCaseError> for StagePassError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationsUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNotifications";

    async fn execute(&mut self, ctx: &StagePassContext) -> Result<Self::Response, Self::Error> {
        let mut reminders = ctx.repos.reminders.find_all().await;
        if !self.include_unsent {
            reminders.retain(|r| r.sent);
        }
        // Most recently fired first
        reminders.sort_by_key(|r| std::cmp::Reverse(r.sent_at.unwrap_or(r.remind_at)));
        Ok(reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use stagepass_domain::{ReminderKind, ID};
    use stagepass_infra::setup_context_inmemory;

    fn reminder(remind_at: i64, sent: bool, kind: ReminderKind) -> Reminder {
        Reminder {
            id: Default::default(),
            event_id: ID::new(),
            kind,
            title: "Main Stage Show".into(),
            message: "Main Stage Show starts soon".into(),
            remind_at,
            sent,
            sent_at: if sent { Some(remind_at) } else { None },
        }
    }

    #[actix_web::main]
    #[test]
    async fn hides_unsent_reminders_from_regular_listing() {
        let ctx = setup_context_inmemory();
        ctx.repos
            .reminders
            .bulk_insert(&[
                reminder(1000, true, ReminderKind::OneHourBefore),
                reminder(2000, false, ReminderKind::TenMinutesBefore),
            ])
            .await
            .unwrap();

        let usecase = GetNotificationsUseCase {
            include_unsent: false,
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.len(), 1);
        assert!(res[0].sent);
    }

    #[actix_web::main]
    #[test]
    async fn admin_listing_includes_pending_reminders() {
        let ctx = setup_context_inmemory();
        ctx.repos
            .reminders
            .bulk_insert(&[
                reminder(1000, true, ReminderKind::OneHourBefore),
                reminder(2000, false, ReminderKind::TenMinutesBefore),
            ])
            .await
            .unwrap();

        let usecase = GetNotificationsUseCase {
            include_unsent: true,
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.len(), 2);
    }
}
