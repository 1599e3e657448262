use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::refresh_token::refresh_token;
use super::handlers::auth::register::register;
use super::handlers::courses::create_course::create_course;
use super::handlers::courses::delete_course::delete_course;
use super::handlers::courses::get_course::get_course;
use super::handlers::courses::list_courses::list_courses;
use super::handlers::courses::update_course::update_course;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::get_user::get_user;
use super::handlers::users::list_users::list_users;
use super::handlers::users::update_user::update_user;
use super::middleware::authenticate;
use super::middleware::require_authentication;
use crate::domain::course::ports::CourseServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared application state: the domain services and the credential
/// verifier, all read-only after construction.
pub struct AppState<US, CS>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    pub user_service: Arc<US>,
    pub course_service: Arc<CS>,
    pub authenticator: Arc<Authenticator>,
}

// Manual impl: #[derive(Clone)] would require US: Clone and CS: Clone
impl<US, CS> Clone for AppState<US, CS>
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            course_service: Arc::clone(&self.course_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

/// Build the application router.
///
/// Login, registration, and token refresh are public; everything else sits
/// behind the authentication gate plus the fail-closed authorization check.
pub fn create_router<US, CS>(
    user_service: Arc<US>,
    course_service: Arc<CS>,
    authenticator: Arc<Authenticator>,
) -> Router
where
    US: UserServicePort,
    CS: CourseServicePort,
{
    let state = AppState {
        user_service,
        course_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login::<US, CS>))
        .route("/api/auth/refresh-token", post(refresh_token::<US, CS>))
        .route("/api/auth/register", post(register::<US, CS>));

    let protected_routes = Router::new()
        .route("/api/auth/users", get(list_users::<US, CS>))
        .route(
            "/api/auth/users/:user_id",
            get(get_user::<US, CS>)
                .put(update_user::<US, CS>)
                .delete(delete_user::<US, CS>),
        )
        .route(
            "/api/courses",
            get(list_courses::<US, CS>).post(create_course::<US, CS>),
        )
        .route(
            "/api/courses/:course_id",
            get(get_course::<US, CS>)
                .put(update_course::<US, CS>)
                .delete(delete_course::<US, CS>),
        )
        .route_layer(middleware::from_fn(require_authentication));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        // The gate runs outermost so the authorization check sees its result
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate::<US, CS>,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
