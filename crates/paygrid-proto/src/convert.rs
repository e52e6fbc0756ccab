//! Conversions between wire messages and `paygrid-core` domain types.

use crate::pb::paygrid::v1::Transaction;
use chrono::{TimeZone, Utc};
use paygrid_core::TransferRequest;

impl From<Transaction> for TransferRequest {
    fn from(message: Transaction) -> Self {
        TransferRequest {
            txn_id: message.id,
            from_bank: message.from_bank,
            from_account: message.from_account,
            to_bank: message.to_bank,
            to_account: message.to_account,
            amount_minor: message.amount_minor,
            timestamp: Utc
                .timestamp_millis_opt(message.timestamp_unix_ms)
                .single()
                .unwrap_or_else(Utc::now),
            session_key: message.key,
        }
    }
}

impl From<TransferRequest> for Transaction {
    fn from(request: TransferRequest) -> Self {
        Transaction {
            id: request.txn_id,
            from_account: request.from_account,
            from_bank: request.from_bank,
            to_account: request.to_account,
            to_bank: request.to_bank,
            amount_minor: request.amount_minor,
            timestamp_unix_ms: request.timestamp.timestamp_millis(),
            key: request.session_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_roundtrips_through_domain_type() {
        let request = TransferRequest::new("t1", "bank_a", "acc-1", "bank_b", "acc-2", 300_00, "k");
        let wire = Transaction::from(request.clone());
        assert_eq!(wire.amount_minor, 300_00);

        let back = TransferRequest::from(wire);
        assert_eq!(back.txn_id, request.txn_id);
        assert_eq!(back.from_account, request.from_account);
        assert_eq!(back.to_bank, request.to_bank);
        assert_eq!(
            back.timestamp.timestamp_millis(),
            request.timestamp.timestamp_millis()
        );
    }
}
