//! Tabula - ordered container and currency ledger utilities
//!
//! Tabula bundles two independent in-memory abstractions:
//!
//! - [`OrderedMap`]: an ordered, key-addressable container with
//!   array-and-map-like operations, statistical reductions, sorting,
//!   partitioning, and synthetic population.
//! - [`Ledger`]: a named currency with an append-only transaction log,
//!   a derived balance, and cross-rate conversion.
//!
//! # Quick Start
//!
//! ```
//! use tabula::{Ledger, OrderedMap, SortRule, TransactionKind, Value};
//!
//! let mut scores = OrderedMap::from(vec![Value::Int(3), Value::Int(1)]);
//! scores.sort(SortRule::ValueAscending);
//! assert_eq!(scores.median(), 2.0);
//!
//! let mut wallet = Ledger::new("Euro", "EUR", "€", 1.1)?;
//! wallet.add_transaction(25.0, TransactionKind::Credit)?;
//! assert_eq!(wallet.balance(), 25.0);
//! # Ok::<(), tabula::LedgerError>(())
//! ```

// Re-export the public API of both member crates
pub use tabula_collection::{
    Entry, Key, Mode, OrderedMap, PopulatePattern, Separator, SortRule, Value,
};
pub use tabula_ledger::{
    ConversionRecord, Ledger, LedgerError, LedgerMeta, Transaction, TransactionKind,
};
