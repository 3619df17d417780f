use crate::error::StagePassError;
use actix_web::HttpRequest;
use stagepass_domain::User;
use stagepass_infra::StagePassContext;

// Identity/session issuance lives outside this core: the gateway hands
// us an opaque bearer user id which we resolve against the user store.

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .replace("Bearer", "")
        .replace("bearer", "")
        .trim()
        .to_string()
}

/// The authenticated `User` for this request, if any
pub async fn current_user(req: &HttpRequest, ctx: &StagePassContext) -> Option<User> {
    let token = req.headers().get("authorization")?;
    let token = match token.to_str() {
        Ok(token) => parse_authtoken_header(token),
        Err(_) => return None,
    };
    let user_id = token.parse().ok()?;
    ctx.repos.users.find(&user_id).await
}

/// Reject the request unless it carries a valid user
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &StagePassContext,
) -> Result<User, StagePassError> {
    current_user(req, ctx).await.ok_or_else(|| {
        StagePassError::Unauthorized(
            "Missing or invalid `Authorization` header with user credentials".into(),
        )
    })
}

/// Reject the request unless it carries a valid admin user
pub async fn protect_admin_route(
    req: &HttpRequest,
    ctx: &StagePassContext,
) -> Result<User, StagePassError> {
    let user = protect_route(req, ctx).await?;
    if !user.admin {
        return Err(StagePassError::Unauthorized(
            "This action requires admin privileges".into(),
        ));
    }
    Ok(user)
}
