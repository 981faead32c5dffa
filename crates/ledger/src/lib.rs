//! Append-only currency ledger with derived balances
//!
//! This crate provides [`Ledger`], a named currency that:
//! - tracks credits and debits in an append-only transaction log,
//! - derives its balance from the log on every read (never cached),
//! - refuses any debit that would drive the balance negative,
//! - converts amounts into other ledgers' currencies through relative
//!   exchange rates, recording each conversion in an audit history.
//!
//! # Quick start
//!
//! ```
//! use tabula_ledger::{Ledger, LedgerError, TransactionKind};
//!
//! let mut usd = Ledger::new("US Dollar", "USD", "$", 1.0)?;
//! usd.credit(100.0)?;
//! assert!(matches!(
//!     usd.debit(150.0),
//!     Err(LedgerError::InsufficientBalance { .. })
//! ));
//! assert_eq!(usd.balance(), 100.0);
//! # Ok::<(), LedgerError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ledger;
pub mod transaction;

pub use error::{LedgerError, Result};
pub use ledger::{Ledger, LedgerMeta};
pub use transaction::{ConversionRecord, Transaction, TransactionKind};
