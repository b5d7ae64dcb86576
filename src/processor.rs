// ⚙️ Receipt Processor - validate → score → store, and points lookup
// The calling contract of the HTTP handlers, usable without a server

use crate::error::{ReceiptError, ReceiptResult};
use crate::points;
use crate::receipt::Receipt;
use crate::store::ReceiptStore;
use crate::validation::validate_receipt;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ReceiptProcessor {
    store: ReceiptStore,
}

impl ReceiptProcessor {
    pub fn new(store: ReceiptStore) -> Self {
        ReceiptProcessor { store }
    }

    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }

    /// Validate, score, and store a receipt. Returns the generated id.
    ///
    /// Nothing is stored when validation fails.
    pub fn process(&self, receipt: Receipt) -> ReceiptResult<String> {
        validate_receipt(&receipt)?;

        let points = points::score(&receipt);
        let id = self.store.insert(receipt, points);
        debug!(%id, points, "receipt stored");

        Ok(id)
    }

    /// Decode a JSON body and process it
    pub fn process_json(&self, body: &[u8]) -> ReceiptResult<String> {
        let receipt = Receipt::from_json_slice(body)?;
        self.process(receipt)
    }

    /// Points awarded to a previously processed receipt
    pub fn points(&self, id: &str) -> ReceiptResult<u64> {
        self.store
            .lookup(id)
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }
}
