//! Order CRUD plus the dedicated status transition route.

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CreateOrder, Order, UpdateOrder, UpdateOrderStatus};
use crate::response;
use crate::store::{Direction, StoreClient};

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub customer_phone: Option<String>,
}

pub async fn list_orders(
    store: web::Data<StoreClient>,
    query: web::Query<OrderListQuery>,
) -> Result<HttpResponse> {
    let mut select = store
        .table("orders")
        .select()
        .order("created_at", Direction::Desc);

    if let Some(status) = query.status.as_deref() {
        if !status.is_empty() {
            select = select.eq("status", status);
        }
    }

    if let Some(phone) = query.customer_phone.as_deref() {
        if !phone.is_empty() {
            select = select.eq("customer_phone", phone);
        }
    }

    let orders: Vec<Order> = select.fetch().await?;
    Ok(response::ok_list(orders))
}

pub async fn get_order(store: web::Data<StoreClient>, id: web::Path<i64>) -> Result<HttpResponse> {
    let order: Option<Order> = store
        .table("orders")
        .select()
        .eq("id", &id.to_string())
        .fetch_optional()
        .await?;

    match order {
        Some(order) => Ok(response::ok(order)),
        None => Err(AppError::not_found("Order")),
    }
}

pub async fn create_order(
    store: web::Data<StoreClient>,
    body: web::Json<CreateOrder>,
) -> Result<HttpResponse> {
    let order: Order = store.table("orders").insert(&body.into_inner()).await?;
    Ok(response::created(order, "Order created successfully"))
}

pub async fn update_order(
    store: web::Data<StoreClient>,
    id: web::Path<i64>,
    body: web::Json<UpdateOrder>,
) -> Result<HttpResponse> {
    let updated: Vec<Order> = store
        .table("orders")
        .update()
        .eq("id", &id.to_string())
        .send(&body.into_inner())
        .await?;

    match updated.into_iter().next() {
        Some(order) => Ok(response::ok_with_message(
            order,
            "Order updated successfully",
        )),
        None => Err(AppError::not_found("Order")),
    }
}

/// Patch sent by the status route: the new status plus a touch of
/// `updated_at`, in one statement.
#[derive(Debug, Serialize)]
struct StatusPatch {
    status: String,
    updated_at: DateTime<Utc>,
}

pub async fn update_order_status(
    store: web::Data<StoreClient>,
    id: web::Path<i64>,
    body: web::Json<UpdateOrderStatus>,
) -> Result<HttpResponse> {
    let patch = StatusPatch {
        status: body.into_inner().status,
        updated_at: Utc::now(),
    };

    let updated: Vec<Order> = store
        .table("orders")
        .update()
        .eq("id", &id.to_string())
        .send(&patch)
        .await?;

    match updated.into_iter().next() {
        Some(order) => Ok(response::ok_with_message(
            order,
            "Order status updated successfully",
        )),
        None => Err(AppError::not_found("Order")),
    }
}

pub async fn delete_order(
    store: web::Data<StoreClient>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    let deleted = store
        .table("orders")
        .delete()
        .eq("id", &id.to_string())
        .exec()
        .await?;

    if deleted == 0 {
        return Err(AppError::not_found("Order"));
    }
    Ok(response::ack("Order deleted successfully"))
}
