//! Menu CRUD with category filtering and name/description search.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{CreateMenuItem, MenuItem, UpdateMenuItem};
use crate::response;
use crate::store::{Direction, StoreClient};

#[derive(Debug, Deserialize)]
pub struct MenuListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

pub async fn list_menu(
    store: web::Data<StoreClient>,
    query: web::Query<MenuListQuery>,
) -> Result<HttpResponse> {
    let mut select = store.table("menu").select().order("name", Direction::Asc);

    // `all` (and absence) means no category filter
    if let Some(category) = query.category.as_deref() {
        if !category.is_empty() && category != "all" {
            select = select.eq("category", category);
        }
    }

    if let Some(search) = query.search.as_deref() {
        if !search.is_empty() {
            select = select.or_ilike(&["name", "description"], search);
        }
    }

    let items: Vec<MenuItem> = select.fetch().await?;
    Ok(response::ok_list(items))
}

pub async fn get_menu_item(
    store: web::Data<StoreClient>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let item: Option<MenuItem> = store
        .table("menu")
        .select()
        .eq("id", &id.to_string())
        .fetch_optional()
        .await?;

    match item {
        Some(item) => Ok(response::ok(item)),
        None => Err(AppError::not_found("Menu item")),
    }
}

pub async fn create_menu_item(
    store: web::Data<StoreClient>,
    body: web::Json<CreateMenuItem>,
) -> Result<HttpResponse> {
    let item: MenuItem = store.table("menu").insert(&body.into_inner()).await?;
    Ok(response::created(item, "Menu item created successfully"))
}

pub async fn update_menu_item(
    store: web::Data<StoreClient>,
    id: web::Path<i64>,
    body: web::Json<UpdateMenuItem>,
) -> Result<HttpResponse> {
    let updated: Vec<MenuItem> = store
        .table("menu")
        .update()
        .eq("id", &id.to_string())
        .send(&body.into_inner())
        .await?;

    match updated.into_iter().next() {
        Some(item) => Ok(response::ok_with_message(
            item,
            "Menu item updated successfully",
        )),
        None => Err(AppError::not_found("Menu item")),
    }
}

pub async fn delete_menu_item(
    store: web::Data<StoreClient>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let deleted = store
        .table("menu")
        .delete()
        .eq("id", &id.to_string())
        .exec()
        .await?;

    if deleted == 0 {
        return Err(AppError::not_found("Menu item"));
    }
    Ok(response::ack("Menu item deleted successfully"))
}
