// ⚠️ Error Types - What can go wrong with a receipt request
// Every variant is terminal for its request; none of them take the process down

use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// First field that failed its format check.
///
/// The display text is sent back to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("purchaseDate must be a valid calendar date in YYYY-MM-DD format")]
    PurchaseDate,

    #[error("purchaseTime must be a 24-hour time in HH:MM format")]
    PurchaseTime,

    #[error("total must be a dollar amount with cents, like 120.40")]
    Total,

    #[error("items[{index}].price must be a dollar amount with cents, like 120.40")]
    ItemPrice { index: usize },
}

// ============================================================================
// RECEIPT ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Body could not be decoded as a receipt
    #[error("Invalid JSON")]
    MalformedInput(#[source] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Receipt not found")]
    NotFound(String),

    #[error("Invalid request method")]
    MethodNotAllowed,
}

pub type ReceiptResult<T> = Result<T, ReceiptError>;

impl From<serde_json::Error> for ReceiptError {
    fn from(err: serde_json::Error) -> Self {
        ReceiptError::MalformedInput(err)
    }
}
