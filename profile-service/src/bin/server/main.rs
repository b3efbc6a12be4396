use std::sync::Arc;

use auth::TokenCodec;
use auth::TokenVerifier;
use jsonwebtoken::Algorithm;
use profile_service::config::Config;
use profile_service::domain::profile::service::ProfileService;
use profile_service::inbound::http::router::create_router;
use profile_service::outbound::repositories::SqliteProfileRepository;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "profile_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "profile-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
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
    let token_codec = TokenCodec::new(config.jwt.secret.as_bytes(), algorithm)?;
    let verifier = Arc::new(TokenVerifier::new(token_codec));

    let repository = Arc::new(SqliteProfileRepository::new(pool));
    let profile_service = Arc::new(ProfileService::new(repository));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    axum::serve(listener, create_router(profile_service, verifier)).await?;

    Ok(())
}
