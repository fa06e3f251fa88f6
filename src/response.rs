//! Success envelope helpers.
//!
//! Every successful response carries `{"success": true, ...}` with the
//! payload under `data`, list responses adding `count`, and mutations
//! adding a human-readable `message`.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 200 with a single payload
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope {
        success: true,
        data: Some(data),
        count: None,
        message: None,
    })
}

/// 200 with a list payload and its length
pub fn ok_list<T: Serialize>(items: Vec<T>) -> HttpResponse {
    let count = items.len();
    HttpResponse::Ok().json(Envelope {
        success: true,
        data: Some(items),
        count: Some(count),
        message: None,
    })
}

/// 200 with a payload and a message (mutations)
pub fn ok_with_message<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Ok().json(Envelope {
        success: true,
        data: Some(data),
        count: None,
        message: Some(message.to_string()),
    })
}

/// 201 with the inserted row and a message
pub fn created<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Created().json(Envelope {
        success: true,
        data: Some(data),
        count: None,
        message: Some(message.to_string()),
    })
}

/// 200 acknowledgement with no payload (deletes)
pub fn ack(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::<()> {
        success: true,
        data: None,
        count: None,
        message: Some(message.to_string()),
    })
}
