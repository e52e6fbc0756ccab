use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client-assigned transfer order.
///
/// Immutable once created; `txn_id` is the idempotency token every
/// participant keys its prepared entry on. The timestamp is carried for
/// diagnostics and is not used for ordering or deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub txn_id: String,
    pub from_bank: String,
    pub from_account: String,
    pub to_bank: String,
    pub to_account: String,
    pub amount_minor: u64,
    pub timestamp: DateTime<Utc>,
    pub session_key: String,
}

impl TransferRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        txn_id: impl Into<String>,
        from_bank: impl Into<String>,
        from_account: impl Into<String>,
        to_bank: impl Into<String>,
        to_account: impl Into<String>,
        amount_minor: u64,
        session_key: impl Into<String>,
    ) -> Self {
        Self {
            txn_id: txn_id.into(),
            from_bank: from_bank.into(),
            from_account: from_account.into(),
            to_bank: to_bank.into(),
            to_account: to_account.into(),
            amount_minor,
            timestamp: Utc::now(),
            session_key: session_key.into(),
        }
    }

    /// True when sender and recipient live at the same bank.
    pub fn is_intra_bank(&self) -> bool {
        self.from_bank == self.to_bank
    }
}
