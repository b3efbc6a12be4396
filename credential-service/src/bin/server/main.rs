use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use credential_service::config::Config;
use credential_service::domain::credential::service::CredentialIssuer;
use credential_service::inbound::http::router::create_router;
use credential_service::outbound::repositories::SqliteCredentialRepository;
use jsonwebtoken::Algorithm;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credential_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "credential-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        jwt_ttl_minutes = config.jwt.ttl_minutes,
        "Configuration loaded"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database ready");

    // Fails here, before serving traffic, on an unset secret or a
    // non-HMAC algorithm.
    let algorithm: Algorithm = config.jwt.algorithm.parse()?;
    let token_codec = Arc::new(TokenCodec::new(config.jwt.secret.as_bytes(), algorithm)?);

    let repository = Arc::new(SqliteCredentialRepository::new(pool));
    let credential_service = Arc::new(CredentialIssuer::new(
        repository,
        PasswordHasher::new(),
        token_codec,
        Duration::minutes(config.jwt.ttl_minutes),
    ));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    axum::serve(listener, create_router(credential_service)).await?;

    Ok(())
}
