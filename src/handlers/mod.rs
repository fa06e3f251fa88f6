//! HTTP request handlers, one module per resource.

pub mod contact;
pub mod gallery;
pub mod health;
pub mod menu;
pub mod orders;
pub mod search;
pub mod settings;
pub mod statistics;

use actix_web::{web, HttpResponse};

/// Register the full `/api` routing table. Shared by `main` and the
/// integration tests so both run the same routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // malformed JSON bodies get the same envelope as every other error
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        crate::error::AppError::BadRequest(err.to_string()).into()
    }));
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health))
            .service(
                web::resource("/settings")
                    .route(web::get().to(settings::get_settings))
                    .route(web::put().to(settings::update_settings)),
            )
            .service(
                web::scope("/menu")
                    .service(
                        web::resource("")
                            .route(web::get().to(menu::list_menu))
                            .route(web::post().to(menu::create_menu_item)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(menu::get_menu_item))
                            .route(web::put().to(menu::update_menu_item))
                            .route(web::delete().to(menu::delete_menu_item)),
                    ),
            )
            .service(
                web::scope("/orders")
                    .service(
                        web::resource("")
                            .route(web::get().to(orders::list_orders))
                            .route(web::post().to(orders::create_order)),
                    )
                    .route("/{id}/status", web::put().to(orders::update_order_status))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(orders::get_order))
                            .route(web::put().to(orders::update_order))
                            .route(web::delete().to(orders::delete_order)),
                    ),
            )
            .service(
                web::scope("/gallery")
                    .service(
                        web::resource("")
                            .route(web::get().to(gallery::list_gallery))
                            .route(web::post().to(gallery::create_gallery_item)),
                    )
                    .route("/{id}", web::delete().to(gallery::delete_gallery_item)),
            )
            .service(
                web::resource("/contact")
                    .route(web::get().to(contact::list_contact_messages))
                    .route(web::post().to(contact::create_contact_message)),
            )
            .route("/statistics", web::get().to(statistics::get_statistics))
            .route("/search", web::get().to(search::search))
            .default_service(web::route().to(endpoint_not_found)),
    );
}

/// Catch-all for unmatched routes.
pub async fn endpoint_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "error": "Endpoint not found",
    }))
}
