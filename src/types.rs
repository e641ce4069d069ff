use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Upstream order payload
// ---------------------------------------------------------------------------

/// Status code pretix assigns to fully paid orders (the n/p/e/c lifecycle).
pub const ORDER_STATUS_PAID: &str = "p";

/// One purchase transaction. Unknown upstream fields are ignored on
/// deserialization; the snapshot file keeps the full raw payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub code: String,
    pub status: String,
    #[serde(default)]
    pub invoice_address: InvoiceAddress,
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.status == ORDER_STATUS_PAID
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceAddress {
    /// ISO 3166-1 alpha-2 code; empty when the buyer gave no address.
    #[serde(default)]
    pub country: String,
}

/// One line item (ticket) within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub item: u64,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question: u64,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// Derived attendee record
// ---------------------------------------------------------------------------

/// One row per position of a paid order, flattened for analysis. Recomputed
/// in memory on every analysis run; never persisted upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub order_code: String,
    pub status: String,
    pub country: String,
    pub item: u64,
    pub gender: String,
    pub continent: String,
}
