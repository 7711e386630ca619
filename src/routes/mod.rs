use actix_web::web;

pub mod health;
pub mod items;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/api/items")
            .service(items::list)
            .service(items::create)
            .service(items::update)
            .service(items::delete),
    );
}
