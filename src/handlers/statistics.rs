//! Order statistics: total count, today's count, and a frequency table
//! keyed by status.
//!
//! The three store calls run sequentially and are not coordinated; the
//! numbers may reflect slightly different points in time, which is fine
//! for a dashboard widget.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Local, LocalResult, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::response;
use crate::store::StoreClient;

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub total_orders: u64,
    pub today_orders: u64,
    pub orders_by_status: HashMap<String, u64>,
}

#[derive(Debug, Deserialize)]
struct StatusRow {
    status: String,
}

pub async fn get_statistics(store: web::Data<StoreClient>) -> Result<HttpResponse> {
    let total_orders = store.table("orders").count().exec().await?;

    let since = start_of_day_utc(Local::now());
    let today_orders = store
        .table("orders")
        .count()
        .gte("created_at", &since.to_rfc3339())
        .exec()
        .await?;

    let rows: Vec<StatusRow> = store
        .table("orders")
        .select()
        .columns("status")
        .fetch()
        .await?;

    Ok(response::ok(Statistics {
        total_orders,
        today_orders,
        orders_by_status: count_by_status(rows),
    }))
}

fn count_by_status(rows: Vec<StatusRow>) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for row in rows {
        *counts.entry(row.status).or_insert(0) += 1;
    }
    counts
}

/// Midnight of the given instant's calendar day in server-local time,
/// expressed in UTC for the store predicate. A midnight skipped or
/// doubled by a DST transition resolves to the earliest valid instant.
fn start_of_day_utc(now: DateTime<Local>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&midnight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn frequency_table_counts_every_status_value() {
        let rows = vec![
            StatusRow {
                status: "pending".into(),
            },
            StatusRow {
                status: "pending".into(),
            },
            StatusRow {
                status: "done".into(),
            },
        ];
        let counts = count_by_status(rows);
        assert_eq!(counts.get("pending"), Some(&2));
        assert_eq!(counts.get("done"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn empty_order_list_gives_empty_table() {
        assert!(count_by_status(Vec::new()).is_empty());
    }

    #[test]
    fn start_of_day_is_local_midnight() {
        let now = Local::now();
        let start = start_of_day_utc(now).with_timezone(&Local);
        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.second(), 0);
        assert_eq!(start.date_naive(), now.date_naive());
    }

    #[test]
    fn start_of_day_is_not_after_now() {
        let now = Local::now();
        assert!(start_of_day_utc(now) <= now.with_timezone(&Utc));
    }
}
