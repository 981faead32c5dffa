//! Ledger: named currency with an append-only transaction log
//!
//! ## Design
//!
//! A `Ledger` carries immutable identity fields (name, ISO code, symbol,
//! exchange rate) plus two append-only logs: transactions and conversion
//! history. Nothing in a log is ever edited or removed.
//!
//! The balance is always derived — `credit_sum - debit_sum` recomputed
//! over the log on every call — so it cannot diverge from the record.
//! The only gated transition is appending a debit: a debit that would
//! drive the balance negative is refused before anything is appended.
//!
//! ## Exchange rates
//!
//! A rate expresses the value of one unit of this ledger's currency in a
//! base unit shared by all ledgers that will ever convert with each other.
//! Converting `amount` from ledger A to ledger B computes
//! `amount * (1 / B.rate) * A.rate`, rounded to 2 decimals.
//!
//! ## Concurrency
//!
//! All operations are synchronous. The read-balance-then-append sequence
//! in [`Ledger::add_transaction`] is a critical section: concurrent debits
//! against a shared ledger must be serialized externally, or two debits can
//! both observe a sufficient balance and overdraw.

use crate::error::{LedgerError, Result};
use crate::transaction::{ConversionRecord, Transaction, TransactionKind};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Identity fields of a ledger, as a plain record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerMeta {
    /// Human-readable currency name
    pub name: String,
    /// ISO currency code
    pub iso_code: String,
    /// Currency symbol
    pub symbol: String,
    /// Value of one unit in the shared base unit
    pub exchange_rate: f64,
}

/// Named currency with transaction and conversion logs
///
/// # Example
///
/// ```
/// use tabula_ledger::{Ledger, TransactionKind};
///
/// let mut taka = Ledger::new("Bangladeshi Taka", "BDT", "৳", 0.008)?;
/// taka.add_transaction(100.0, TransactionKind::Credit)?
///     .add_transaction(40.0, TransactionKind::Debit)?;
/// assert_eq!(taka.balance(), 60.0);
/// # Ok::<(), tabula_ledger::LedgerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    name: String,
    iso_code: String,
    symbol: String,
    exchange_rate: f64,
    transactions: Vec<Transaction>,
    conversions: Vec<ConversionRecord>,
}

/// Round half away from zero to 2 decimal places
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl Ledger {
    /// Create a ledger with immutable identity fields
    ///
    /// The exchange rate is set once here; no mutator exists. A rate that
    /// is not positive and finite is rejected.
    pub fn new(
        name: impl Into<String>,
        iso_code: impl Into<String>,
        symbol: impl Into<String>,
        exchange_rate: f64,
    ) -> Result<Self> {
        if !exchange_rate.is_finite() || exchange_rate <= 0.0 {
            return Err(LedgerError::InvalidExchangeRate(exchange_rate));
        }
        Ok(Self {
            name: name.into(),
            iso_code: iso_code.into(),
            symbol: symbol.into(),
            exchange_rate,
            transactions: Vec::new(),
            conversions: Vec::new(),
        })
    }

    // ========== Identity ==========

    /// Human-readable currency name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO currency code
    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    /// Currency symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Value of one unit in the shared base unit
    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    /// Identity fields as a plain record
    pub fn meta(&self) -> LedgerMeta {
        LedgerMeta {
            name: self.name.clone(),
            iso_code: self.iso_code.clone(),
            symbol: self.symbol.clone(),
            exchange_rate: self.exchange_rate,
        }
    }

    // ========== Transactions ==========

    /// Append a transaction; chainable
    ///
    /// A debit exceeding the current balance fails with
    /// [`LedgerError::InsufficientBalance`] and leaves the ledger unchanged.
    /// Negative or non-finite amounts fail with
    /// [`LedgerError::InvalidAmount`].
    pub fn add_transaction(&mut self, amount: f64, kind: TransactionKind) -> Result<&mut Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if kind == TransactionKind::Debit {
            let available = self.balance();
            if amount > available {
                debug!(
                    iso = %self.iso_code,
                    requested = amount,
                    available,
                    "debit refused"
                );
                return Err(LedgerError::InsufficientBalance {
                    requested: amount,
                    available,
                    iso_code: self.iso_code.clone(),
                });
            }
        }
        let transaction = Transaction {
            id: Uuid::new_v4(),
            amount,
            kind,
            timestamp: Utc::now(),
        };
        debug!(iso = %self.iso_code, id = %transaction.id, amount, ?kind, "transaction appended");
        self.transactions.push(transaction);
        Ok(self)
    }

    /// Append a credit; chainable
    pub fn credit(&mut self, amount: f64) -> Result<&mut Self> {
        self.add_transaction(amount, TransactionKind::Credit)
    }

    /// Append a debit; chainable
    pub fn debit(&mut self, amount: f64) -> Result<&mut Self> {
        self.add_transaction(amount, TransactionKind::Debit)
    }

    /// The transaction log in append order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Lookup one transaction by id; linear scan, `None` on miss
    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    // ========== Derived figures ==========

    /// Sum of credit amounts, folded over the log
    pub fn credit_sum(&self) -> f64 {
        self.kind_sum(TransactionKind::Credit)
    }

    /// Sum of debit amounts, folded over the log
    pub fn debit_sum(&self) -> f64 {
        self.kind_sum(TransactionKind::Debit)
    }

    /// Current balance: `credit_sum - debit_sum`
    ///
    /// Always recomputed from the log, never cached.
    pub fn balance(&self) -> f64 {
        self.credit_sum() - self.debit_sum()
    }

    fn kind_sum(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    // ========== Conversion ==========

    /// Convert an amount into another ledger's currency
    ///
    /// Computes `amount * (1 / target.exchange_rate) * self.exchange_rate`,
    /// rounded to 2 decimal places, and appends one [`ConversionRecord`] to
    /// this ledger's history. The target ledger is never mutated, and no
    /// transaction or balance effect occurs on either side.
    pub fn convert_to(&mut self, target: &Ledger, amount: f64) -> f64 {
        let converted = round2(amount * (1.0 / target.exchange_rate) * self.exchange_rate);
        debug!(
            from = %self.iso_code,
            to = %target.iso_code,
            amount,
            converted,
            "conversion recorded"
        );
        self.conversions.push(ConversionRecord {
            from_iso: self.iso_code.clone(),
            to_iso: target.iso_code.clone(),
            amount,
            converted_amount: converted,
        });
        converted
    }

    /// The conversion history in append order
    pub fn conversions(&self) -> &[ConversionRecord] {
        &self.conversions
    }
}
