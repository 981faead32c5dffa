//! Append-only ledger records
//!
//! Transactions and conversion records are immutable once appended: the
//! logs only grow for the lifetime of a ledger, so every derived figure
//! (balance, sums) can be recomputed from them at any time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money in
    Credit,
    /// Money out; gated by the current balance
    Debit,
}

/// One transaction in a ledger's log
///
/// Ids are UUID v4, unique within a ledger's log (and, for practical
/// purposes, globally).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction id
    pub id: Uuid,
    /// Non-negative amount in the ledger's own currency
    pub amount: f64,
    /// Credit or debit
    pub kind: TransactionKind,
    /// When the transaction was appended
    pub timestamp: DateTime<Utc>,
}

/// One entry in a ledger's conversion history
///
/// Conversions are pure calculations plus this audit record; they never
/// touch the transaction log or the balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// ISO code of the converting ledger
    pub from_iso: String,
    /// ISO code of the target ledger
    pub to_iso: String,
    /// Amount in the converting ledger's currency
    pub amount: f64,
    /// Result in the target ledger's currency, rounded to 2 decimals
    pub converted_amount: f64,
}
