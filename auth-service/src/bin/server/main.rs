use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth_service::config::Config;
use auth_service::domain::session::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::identity::GoogleIdentityVerifier;
use auth_service::outbound::repositories::PostgresUserRepository;
use auth_service::outbound::tokens::JwtSessionTokens;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_issuer = %config.jwt.issuer,
        session_ttl_hours = config.jwt.expiration_hours,
        tokeninfo_url = %config.google.tokeninfo_url,
        refresh_policy = ?config.session.refresh_policy,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Authenticator::new(config.jwt.secret.as_bytes(), config.session_ttl())
        .with_issuer(&config.jwt.issuer);
    let session_tokens = Arc::new(JwtSessionTokens::new(authenticator));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let identity_verifier = Arc::new(GoogleIdentityVerifier::new(
        &config.google.client_id,
        &config.google.tokeninfo_url,
        Duration::from_secs(config.google.timeout_secs),
    )?);

    let auth_service = Arc::new(
        AuthService::new(user_repository, session_tokens, identity_verifier)
            .with_refresh_policy(config.session.refresh_policy),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, config.session_ttl());
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
