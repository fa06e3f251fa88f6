//! Cross-entity substring search over menu items and orders.
//!
//! Two independent queries; the result sets are presented side by side,
//! not merged or ranked.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{MenuItem, Order};
use crate::store::StoreClient;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
struct SearchData {
    menu_items: Vec<MenuItem>,
    orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
struct SearchCounts {
    menu_items: usize,
    orders: usize,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    data: SearchData,
    counts: SearchCounts,
}

pub async fn search(
    store: web::Data<StoreClient>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    // validated before any store access
    let needle = match query.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(AppError::BadRequest("Search query is required".to_string())),
    };

    // the two searches are independent, so they run concurrently
    let (menu_items, orders): (Vec<MenuItem>, Vec<Order>) = tokio::try_join!(
        store
            .table("menu")
            .select()
            .or_ilike(&["name", "description"], needle)
            .fetch(),
        store
            .table("orders")
            .select()
            .or_ilike(&["customer_name", "customer_phone", "menu_item_name"], needle)
            .fetch(),
    )?;

    let counts = SearchCounts {
        menu_items: menu_items.len(),
        orders: orders.len(),
    };

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        data: SearchData { menu_items, orders },
        counts,
    }))
}
