use actix_web::HttpResponse;
use chrono::Utc;

/// Liveness probe. Does not touch the store.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "Warkop KM9 API is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
