//! In-process stand-in for the hosted data store.
//!
//! Speaks the subset of the data API the service's store client emits:
//! `eq.` / `gte.` filters, `or=(col.ilike.*needle*,…)` search,
//! `order=col.dir`, `limit`, exact counts via the `content-range`
//! header, and `Prefer: return=representation` on writes. Rows live in
//! a shared in-memory map so tests can seed state directly.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::{DateTime, Utc};
use serde_json::Value;

#[derive(Default)]
pub struct Table {
    pub rows: Vec<Value>,
    pub next_id: i64,
}

pub type Db = Arc<Mutex<HashMap<String, Table>>>;

/// Insert a row directly, bypassing the HTTP surface. Assigns an id the
/// same way the POST handler does. Not every test binary seeds, so the
/// helper is exempt from the dead-code lint.
#[allow(dead_code)]
pub fn seed_row(db: &Db, table: &str, mut row: Value) -> i64 {
    let mut guard = db.lock().unwrap();
    let table = guard.entry(table.to_string()).or_default();
    table.next_id += 1;
    let id = table.next_id;
    row["id"] = Value::from(id);
    table.rows.push(row);
    id
}

enum Filter {
    Eq(String, String),
    Gte(String, String),
    OrIlike(Vec<(String, String)>),
}

struct ParsedQuery {
    filters: Vec<Filter>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

fn decode_pair(pair: &str) -> Option<(String, String)> {
    let (key, value) = pair.split_once('=')?;
    let decode = |s: &str| {
        urlencoding::decode(&s.replace('+', " "))
            .map(|c| c.into_owned())
            .ok()
    };
    Some((decode(key)?, decode(value)?))
}

fn parse_query(raw: &str) -> ParsedQuery {
    let mut parsed = ParsedQuery {
        filters: Vec::new(),
        order: None,
        limit: None,
    };

    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let Some((key, value)) = decode_pair(pair) else {
            continue;
        };
        match key.as_str() {
            "select" => {}
            "limit" => parsed.limit = value.parse().ok(),
            "order" => {
                if let Some((column, dir)) = value.rsplit_once('.') {
                    parsed.order = Some((column.to_string(), dir == "asc"));
                }
            }
            "or" => {
                let inner = value.trim_start_matches('(').trim_end_matches(')');
                let terms = inner
                    .split(',')
                    .filter_map(|term| {
                        let mut parts = term.splitn(3, '.');
                        let column = parts.next()?.to_string();
                        let op = parts.next()?;
                        let pattern = parts.next()?;
                        if op != "ilike" {
                            return None;
                        }
                        let needle = pattern.trim_matches('"').trim_matches('*').to_lowercase();
                        Some((column, needle))
                    })
                    .collect();
                parsed.filters.push(Filter::OrIlike(terms));
            }
            _ => {
                if let Some(value) = value.strip_prefix("eq.") {
                    parsed.filters.push(Filter::Eq(key, value.to_string()));
                } else if let Some(value) = value.strip_prefix("gte.") {
                    parsed.filters.push(Filter::Gte(key, value.to_string()));
                }
            }
        }
    }

    parsed
}

fn field_as_string(row: &Value, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn compare_scalar(a: &str, b: &str) -> Ordering {
    if let (Ok(x), Ok(y)) = (
        DateTime::parse_from_rfc3339(a),
        DateTime::parse_from_rfc3339(b),
    ) {
        return x.cmp(&y);
    }
    a.cmp(b)
}

fn matches(row: &Value, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| match filter {
        Filter::Eq(column, value) => field_as_string(row, column) == *value,
        Filter::Gte(column, value) => {
            compare_scalar(&field_as_string(row, column), value) != Ordering::Less
        }
        Filter::OrIlike(terms) => terms.iter().any(|(column, needle)| {
            field_as_string(row, column).to_lowercase().contains(needle)
        }),
    })
}

async fn get_rows(req: HttpRequest, db: web::Data<Db>, path: web::Path<String>) -> HttpResponse {
    let query = parse_query(req.query_string());
    let guard = db.lock().unwrap();
    let mut rows: Vec<Value> = guard
        .get(path.as_str())
        .map(|t| t.rows.clone())
        .unwrap_or_default()
        .into_iter()
        .filter(|row| matches(row, &query.filters))
        .collect();

    if let Some((column, asc)) = &query.order {
        rows.sort_by(|a, b| {
            let ord = compare_scalar(&field_as_string(a, column), &field_as_string(b, column));
            if *asc {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    let total = rows.len();
    if let Some(limit) = query.limit {
        rows.truncate(limit);
    }

    HttpResponse::Ok()
        .insert_header(("content-range", format!("0-0/{}", total)))
        .json(rows)
}

async fn insert_row(
    db: web::Data<Db>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let mut row = body.into_inner();
    if !row.is_object() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "expected a JSON object"
        }));
    }

    let table_name = path.into_inner();
    let mut guard = db.lock().unwrap();
    let table = guard.entry(table_name.clone()).or_default();
    table.next_id += 1;
    row["id"] = Value::from(table.next_id);
    if row.get("created_at").is_none() {
        row["created_at"] = Value::from(Utc::now().to_rfc3339());
    }
    if table_name == "orders" && row.get("status").is_none() {
        row["status"] = Value::from("pending");
    }
    table.rows.push(row.clone());

    HttpResponse::Created().json(vec![row])
}

async fn update_rows(
    req: HttpRequest,
    db: web::Data<Db>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    let query = parse_query(req.query_string());
    let patch = match body.into_inner() {
        Value::Object(map) => map,
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "expected a JSON object"
            }))
        }
    };

    let mut guard = db.lock().unwrap();
    let mut updated = Vec::new();
    if let Some(table) = guard.get_mut(path.as_str()) {
        for row in table.rows.iter_mut() {
            if matches(row, &query.filters) {
                if let Some(object) = row.as_object_mut() {
                    for (key, value) in &patch {
                        object.insert(key.clone(), value.clone());
                    }
                }
                updated.push(row.clone());
            }
        }
    }

    HttpResponse::Ok().json(updated)
}

async fn delete_rows(req: HttpRequest, db: web::Data<Db>, path: web::Path<String>) -> HttpResponse {
    let query = parse_query(req.query_string());
    let mut guard = db.lock().unwrap();
    let mut removed = Vec::new();
    if let Some(table) = guard.get_mut(path.as_str()) {
        table.rows.retain(|row| {
            if matches(row, &query.filters) {
                removed.push(row.clone());
                false
            } else {
                true
            }
        });
    }

    HttpResponse::Ok().json(removed)
}

/// Start the fake store on an ephemeral local port. Returns its base URL
/// and a handle to the row storage for direct seeding and inspection.
pub fn spawn_store() -> (String, Db) {
    let db: Db = Arc::new(Mutex::new(HashMap::new()));
    let db_data = web::Data::new(db.clone());

    let server = HttpServer::new(move || {
        App::new().app_data(db_data.clone()).service(
            web::resource("/rest/v1/{table}")
                .route(web::get().to(get_rows))
                .route(web::post().to(insert_row))
                .route(web::patch().to(update_rows))
                .route(web::delete().to(delete_rows)),
        )
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("failed to bind fake store");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    (format!("http://{}", addr), db)
}
