use aquashop::{api, config, errors::Result};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect to the database (DATABASE_URL, or the default local file)
    let conn = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    // 4. Ensure the schema exists; idempotent, so restarts are safe
    config::database::create_tables(&conn)
        .await
        .inspect(|_| info!("Database schema ensured."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Serve the API
    let app = api::app_router(conn);
    let listener = TcpListener::bind(config::LISTEN_ADDR).await?;
    info!("Listening on {}", config::LISTEN_ADDR);
    axum::serve(listener, app).await?;

    Ok(())
}
