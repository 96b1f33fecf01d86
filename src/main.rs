//! Service entry point: configuration, database pool, HTTP server.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ikm_survey::adapters::auth::{JwtAdminTokens, Sha256PinVerifier};
use ikm_survey::adapters::http::{api_router, ApiState};
use ikm_survey::adapters::postgres::PostgresResponseStore;
use ikm_survey::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ikm_survey=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let scheme = Arc::new(config.survey.load_scheme()?);
    info!(
        environment = %config.server.environment,
        counters = scheme.counter_count(),
        "starting ikm-survey"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_secs))
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!().run(&pool).await?;

    let state = ApiState {
        store: Arc::new(PostgresResponseStore::new(pool)),
        scheme,
        verifier: Arc::new(Sha256PinVerifier::new(&config.auth.admin_pin)),
        tokens: Arc::new(JwtAdminTokens::new(&config.auth.token_secret)),
        session_timeout_secs: config.auth.session_timeout_secs,
    };

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, api_router(state)).await?;

    Ok(())
}
