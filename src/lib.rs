// Receipt Points - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod config;
pub mod error;
pub mod points;
pub mod processor;
pub mod receipt;
pub mod store;
pub mod validation;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use error::{ReceiptError, ReceiptResult, ValidationError};
pub use points::{breakdown, score, PointsBreakdown};
pub use processor::ReceiptProcessor;
pub use receipt::{Item, Receipt};
pub use store::{ReceiptStore, StoredReceipt};
pub use validation::{validate_receipt, ValidationResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
