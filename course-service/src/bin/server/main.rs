use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use course_service::config::Config;
use course_service::domain::course::service::CourseService;
use course_service::domain::user::service::UserService;
use course_service::inbound::http::router::create_router;
use course_service::outbound::repositories::course::PostgresCourseRepository;
use course_service::outbound::repositories::user::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "course-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        access_expiration_secs = config.jwt.access_expiration_secs,
        refresh_expiration_secs = config.jwt.refresh_expiration_secs,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        Duration::seconds(config.jwt.access_expiration_secs),
        Duration::seconds(config.jwt.refresh_expiration_secs),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let course_repository = Arc::new(PostgresCourseRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let course_service = Arc::new(CourseService::new(course_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, course_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
