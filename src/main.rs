use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;

use restaurant_api::{config::Config, routes, seed::Seed, state::AppState, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    telemetry::init();

    let config = Config::from_env();

    let seed = match &config.seed_file {
        Some(path) => {
            let seed = Seed::load(path).map_err(std::io::Error::other)?;
            tracing::info!(
                path = %path.display(),
                dishes = seed.dishes.len(),
                orders = seed.orders.len(),
                "loaded seed data"
            );
            seed
        }
        None => Seed::default(),
    };
    let (dishes, orders) = seed.into_repositories().map_err(std::io::Error::other)?;
    let state = AppState::new(dishes, orders);

    tracing::info!(addr = %config.server_addr, "starting restaurant api");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(config.server_addr.as_str())?
    .run()
    .await
}
