use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use trypod_remote::handlers::{self, AppState};
use trypod_remote::{Settings, TrypodClient};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Settings::from_env().context("Failed to load settings")?;
    let client =
        TrypodClient::new(settings.opts.clone()).context("Failed to create Trypod client")?;
    info!("Using Trypod backend at {}", client.base_url());

    let app_state = web::Data::new(AppState {
        remote: Arc::new(client),
    });

    let bind_addr = settings.bind_addr();
    info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
