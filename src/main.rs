//! Recommendation service entry point.
//!
//! Port: 5001 (override with RECS_PORT or PORT)

use actix_web::{web, App, HttpServer};
use content_recs::config::ServiceConfig;
use content_recs::server::{self, AppState};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    let bind_addr = format!("{}:{}", config.host, config.port);

    info!("Starting recommendation service on {}", bind_addr);

    let state = web::Data::new(AppState { config });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(server::configure_routes)
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
