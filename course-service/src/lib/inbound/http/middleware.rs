use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Request-scoped identity bound by the authentication gate.
///
/// Derived per request from a valid token plus the current credential-store
/// snapshot of the subject, never cached from the token itself.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub enabled: bool,
    pub role: String,
}

/// Authentication gate, applied to every route.
///
/// Fail-open: a missing, invalid, or unresolvable token leaves the request
/// anonymous and lets it through; route-level authorization decides whether
/// anonymous is acceptable. The gate itself never rejects.
pub async fn authenticate<US, CS>(
    State(state): State<AppState<US, CS>>,
    mut req: Request,
    next: Next,
) -> Response
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    if let Some(identity) = resolve_identity(&state, req.headers()).await {
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}

/// Authorization check for protected routes.
///
/// Fail-closed counterpart of [`authenticate`]: without a bound identity the
/// request terminates here with the rejection payload and no further handler
/// runs.
pub async fn require_authentication(req: Request, next: Next) -> Response {
    if req.extensions().get::<AuthenticatedUser>().is_none() {
        return unauthorized_rejection();
    }

    next.run(req).await
}

async fn resolve_identity<US, CS>(
    state: &AppState<US, CS>,
    headers: &header::HeaderMap,
) -> Option<AuthenticatedUser>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let token = bearer_token(headers)?;

    let claims = match state.authenticator.decode_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, "Access token rejected");
            return None;
        }
    };

    // Resolve against the current store snapshot; a subject that no longer
    // exists stays anonymous
    let username = Username::new(claims.sub).ok()?;
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .ok()?;

    Some(AuthenticatedUser {
        username: user.username.to_string(),
        enabled: user.enabled,
        role: user.role.to_string(),
    })
}

fn bearer_token(headers: &header::HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Rejection payload for unauthenticated access to a protected route.
fn unauthorized_rejection() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Unauthorized",
            "message": "Missing or invalid access token",
            "status": 401
        })),
    )
        .into_response()
}
