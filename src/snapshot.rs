use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::error::{AppError, Result};
use crate::types::Order;

pub fn orders_path(dir: &Path, event_id: &str) -> PathBuf {
    dir.join(format!("{event_id}.json"))
}

pub fn items_path(dir: &Path, event_id: &str) -> PathBuf {
    dir.join(format!("{event_id}_items.json"))
}

/// Persist the aggregated order list, overwriting any previous snapshot.
/// Called only once the full pagination walk has succeeded; a failed fetch
/// leaves the previous snapshot untouched (all-or-nothing policy).
pub fn write_orders(dir: &Path, event_id: &str, orders: &[Value]) -> Result<PathBuf> {
    let path = orders_path(dir, event_id);
    fs::write(&path, serde_json::to_string(orders)?)?;
    info!("Wrote {} orders to {}", orders.len(), path.display());
    Ok(path)
}

/// Persist the raw item payload next to the order snapshot.
pub fn write_items(dir: &Path, event_id: &str, payload: &Value) -> Result<PathBuf> {
    let path = items_path(dir, event_id);
    fs::write(&path, serde_json::to_string(payload)?)?;
    info!("Wrote item payload to {}", path.display());
    Ok(path)
}

/// Load the typed order list for analysis. Never fetches inline: a missing
/// snapshot is an instruction to run the fetch step, not a trigger for one.
pub fn load_orders(dir: &Path, event_id: &str) -> Result<Vec<Order>> {
    let path = orders_path(dir, event_id);
    if !path.exists() {
        return Err(AppError::MissingSnapshot(path.display().to_string()));
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Untyped counterpart of [`load_orders`], preserving the full payload.
pub fn load_raw_orders(dir: &Path, event_id: &str) -> Result<Vec<Value>> {
    let path = orders_path(dir, event_id);
    if !path.exists() {
        return Err(AppError::MissingSnapshot(path.display().to_string()));
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_orders() -> Vec<Value> {
        vec![
            json!({
                "code": "ABC12",
                "status": "p",
                "invoice_address": {"country": "IT"},
                "positions": [{"item": 10, "answers": []}],
                "total": "250.00",
            }),
            json!({"code": "DEF34", "status": "n", "positions": []}),
        ]
    }

    #[test]
    fn round_trip_preserves_the_raw_payload() {
        let dir = tempfile::tempdir().unwrap();
        let orders = sample_orders();

        write_orders(dir.path(), "sampleconf", &orders).unwrap();
        let loaded = load_raw_orders(dir.path(), "sampleconf").unwrap();

        assert_eq!(loaded, orders);
    }

    #[test]
    fn rewriting_the_same_data_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let orders = sample_orders();

        let path = write_orders(dir.path(), "sampleconf", &orders).unwrap();
        let first = fs::read(&path).unwrap();
        write_orders(dir.path(), "sampleconf", &orders).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn loading_typed_orders_tolerates_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        write_orders(dir.path(), "sampleconf", &sample_orders()).unwrap();

        let orders = load_orders(dir.path(), "sampleconf").unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].code, "ABC12");
        assert!(orders[0].is_paid());
        assert_eq!(orders[0].invoice_address.country, "IT");
        assert_eq!(orders[1].invoice_address.country, "");
    }

    #[test]
    fn missing_snapshot_directs_to_the_fetch_step() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_orders(dir.path(), "sampleconf").unwrap_err();

        assert!(matches!(err, AppError::MissingSnapshot(_)));
        assert!(err.to_string().contains("run the fetch step first"));
    }

    #[test]
    fn item_payload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let payload = json!({"count": 1, "next": null, "results": [{"id": 10}]});

        write_items(dir.path(), "sampleconf", &payload).unwrap();
        let text = fs::read_to_string(items_path(dir.path(), "sampleconf")).unwrap();

        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), payload);
    }
}
