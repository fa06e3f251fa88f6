//! Gallery items: append, list, delete. No update route.

use actix_web::{web, HttpResponse};

use crate::error::{AppError, Result};
use crate::models::{CreateGalleryItem, GalleryItem};
use crate::response;
use crate::store::{Direction, StoreClient};

pub async fn list_gallery(store: web::Data<StoreClient>) -> Result<HttpResponse> {
    let items: Vec<GalleryItem> = store
        .table("gallery")
        .select()
        .order("created_at", Direction::Desc)
        .fetch()
        .await?;
    Ok(response::ok_list(items))
}

pub async fn create_gallery_item(
    store: web::Data<StoreClient>,
    body: web::Json<CreateGalleryItem>,
) -> Result<HttpResponse> {
    let item: GalleryItem = store.table("gallery").insert(&body.into_inner()).await?;
    Ok(response::created(item, "Gallery item added successfully"))
}

pub async fn delete_gallery_item(
    store: web::Data<StoreClient>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let deleted = store
        .table("gallery")
        .delete()
        .eq("id", &id.to_string())
        .exec()
        .await?;

    if deleted == 0 {
        return Err(AppError::not_found("Gallery item"));
    }
    Ok(response::ack("Gallery item deleted successfully"))
}
