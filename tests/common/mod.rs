use std::sync::Arc;

use actix_web::{web, App};
use item_api::routes::configure_routes;
use item_api::store::ItemStore;

pub fn create_app(
    store: Arc<dyn ItemStore>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(store))
        .configure(configure_routes)
}
