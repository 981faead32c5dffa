//! Error types for the ledger
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. `InsufficientBalance` is the one semantic failure; the
//! other variants guard construction-time and append-time invariants.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error types for ledger operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A debit would drive the balance negative; nothing was appended
    #[error(
        "insufficient balance to debit {requested} {iso_code}: available {available}"
    )]
    InsufficientBalance {
        /// Debit amount that was refused
        requested: f64,
        /// Balance at the time of the refusal
        available: f64,
        /// ISO code of the ledger's currency
        iso_code: String,
    },

    /// Exchange rate must be a positive, finite number
    #[error("invalid exchange rate {0}: must be positive and finite")]
    InvalidExchangeRate(f64),

    /// Transaction amounts must be non-negative, finite numbers
    #[error("invalid transaction amount {0}: must be non-negative and finite")]
    InvalidAmount(f64),
}
