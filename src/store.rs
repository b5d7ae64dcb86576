// 🗄️ Receipt Store - Processed receipts keyed by generated id
//
// "The id is IDENTITY, the receipt and its points are VALUES"
//
// - Every insert gets a fresh UUID, even for byte-identical receipts
// - Entries are never updated or removed
// - Lives for the process lifetime only

use crate::receipt::Receipt;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

// ============================================================================
// STORED RECEIPT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StoredReceipt {
    /// Stable identity (UUID v4) - NEVER reused
    pub id: String,

    pub receipt: Receipt,

    /// Computed once at insert time
    pub points: u64,

    pub processed_at: DateTime<Utc>,
}

// ============================================================================
// RECEIPT STORE
// ============================================================================

/// Shared, append-only registry of processed receipts.
///
/// Cloning is cheap and every clone sees the same entries, so one store can
/// be handed to any number of concurrent request handlers.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    entries: Arc<RwLock<HashMap<String, StoredReceipt>>>,
}

impl ReceiptStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated receipt with its points and return the new id
    pub fn insert(&self, receipt: Receipt, points: u64) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let stored = StoredReceipt {
            id: id.clone(),
            receipt,
            points,
            processed_at: Utc::now(),
        };

        // Entries are immutable once inserted, so a poisoned lock never
        // guards a half-written value and can be used as-is.
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), stored);

        id
    }

    /// Points stored for `id`, or `None` if it was never inserted
    pub fn lookup(&self, id: &str) -> Option<u64> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .map(|stored| stored.points)
    }

    /// When the most recent receipt was stored, `None` while empty
    pub fn last_processed_at(&self) -> Option<DateTime<Utc>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|stored| stored.processed_at)
            .max()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
