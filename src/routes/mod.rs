use crate::handlers::{self, fallback};
use actix_web::web::{self, ServiceConfig};

pub fn config(cfg: &mut ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(fallback::json_error))
        .service(web::scope("/health").route("", web::get().to(handlers::health::health)))
        .service(
            web::resource("/dishes")
                .route(web::get().to(handlers::dishes::list_dishes))
                .route(web::post().to(handlers::dishes::create_dish))
                .default_service(web::to(fallback::method_not_allowed)),
        )
        .service(
            web::resource("/dishes/{dishId}")
                .route(web::get().to(handlers::dishes::get_dish))
                .route(web::put().to(handlers::dishes::update_dish))
                .default_service(web::to(fallback::method_not_allowed)),
        )
        .service(
            web::resource("/orders")
                .route(web::get().to(handlers::orders::list_orders))
                .route(web::post().to(handlers::orders::create_order))
                .default_service(web::to(fallback::method_not_allowed)),
        )
        .service(
            web::resource("/orders/{orderId}")
                .route(web::get().to(handlers::orders::get_order))
                .route(web::put().to(handlers::orders::update_order))
                .route(web::delete().to(handlers::orders::delete_order))
                .default_service(web::to(fallback::method_not_allowed)),
        )
        .default_service(web::to(fallback::path_not_found));
}
