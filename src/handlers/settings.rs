//! Singleton settings row, addressed by fixed id 1.

use actix_web::{web, HttpResponse};

use crate::error::{AppError, Result};
use crate::models::Setting;
use crate::response;
use crate::store::StoreClient;

pub async fn get_settings(store: web::Data<StoreClient>) -> Result<HttpResponse> {
    let setting: Option<Setting> = store
        .table("settings")
        .select()
        .eq("id", "1")
        .fetch_optional()
        .await?;

    match setting {
        Some(setting) => Ok(response::ok(setting)),
        None => Err(AppError::not_found("Settings")),
    }
}

/// The admin UI owns the settings schema, so the body is forwarded to the
/// store verbatim rather than validated field by field.
pub async fn update_settings(
    store: web::Data<StoreClient>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse> {
    let updated: Vec<Setting> = store
        .table("settings")
        .update()
        .eq("id", "1")
        .send(&body.into_inner())
        .await?;

    match updated.into_iter().next() {
        Some(setting) => Ok(response::ok_with_message(
            setting,
            "Settings updated successfully",
        )),
        None => Err(AppError::not_found("Settings")),
    }
}
