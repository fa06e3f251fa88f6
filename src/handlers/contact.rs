//! Contact form intake and listing.

use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::models::{ContactMessage, CreateContactMessage};
use crate::response;
use crate::store::{Direction, StoreClient};

pub async fn list_contact_messages(store: web::Data<StoreClient>) -> Result<HttpResponse> {
    let messages: Vec<ContactMessage> = store
        .table("contacts")
        .select()
        .order("created_at", Direction::Desc)
        .fetch()
        .await?;
    Ok(response::ok_list(messages))
}

pub async fn create_contact_message(
    store: web::Data<StoreClient>,
    body: web::Json<CreateContactMessage>,
) -> Result<HttpResponse> {
    let message: ContactMessage = store.table("contacts").insert(&body.into_inner()).await?;
    Ok(response::created(
        message,
        "Contact message submitted successfully",
    ))
}
