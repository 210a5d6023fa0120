//! Binary entrypoint: load env, init tracing, serve.

use campus_api::{serve, AppConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("campus_api=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    serve(config).await?;
    Ok(())
}
