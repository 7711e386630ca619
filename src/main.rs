use actix_web::{web, App, HttpServer};
use item_api::config::EnvConfig;
use item_api::routes::configure_routes;
use item_api::store;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store = store::from_config(&config.store);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
