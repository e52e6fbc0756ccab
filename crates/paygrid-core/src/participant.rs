use crate::account::AccountStore;
use crate::transfer::TransferRequest;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Which side(s) of a transfer this bank holds for a prepared transaction.
///
/// An intra-bank transfer prepares a single composite entry rather than a
/// sender entry overwritten by a recipient entry, so Abort restores the
/// sender and Commit credits the recipient from the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Sender,
    Recipient,
    SenderAndRecipient,
}

impl Role {
    pub fn includes_sender(self) -> bool {
        matches!(self, Role::Sender | Role::SenderAndRecipient)
    }

    pub fn includes_recipient(self) -> bool {
        matches!(self, Role::Recipient | Role::SenderAndRecipient)
    }
}

/// Per-transaction reservation held between Prepare and Commit/Abort.
///
/// At most one entry exists per (bank, txn_id); a second Prepare for the
/// same id is refused without touching state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedEntry {
    pub role: Role,
    pub amount_minor: u64,
}

/// One bank's authoritative shard: accounts plus in-flight reservations.
///
/// The owning service guards the whole struct with a single mutex for the
/// duration of each handler, making every bank operation a serial point.
/// Nothing here performs I/O, so the lock is never held across an await of
/// an outbound call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankState {
    bank_name: String,
    pub accounts: AccountStore,
    prepared: HashMap<String, PreparedEntry>,
    committed: HashSet<String>,
}

impl BankState {
    pub fn new(bank_name: impl Into<String>) -> Self {
        Self {
            bank_name: bank_name.into(),
            accounts: AccountStore::new(),
            prepared: HashMap::new(),
            committed: HashSet::new(),
        }
    }

    pub fn bank_name(&self) -> &str {
        &self.bank_name
    }

    /// First 2PC phase: vote on the transfer and reserve sender funds.
    ///
    /// Debiting the sender here turns the vote into a guaranteed
    /// reservation; Commit then needs no further check on the sender side,
    /// and an aborted transfer is invisible to the recipient because credit
    /// only happens in [`BankState::commit`].
    pub fn prepare(&mut self, request: &TransferRequest) -> bool {
        // Duplicate ids are refused whether the transaction is still in
        // flight or already committed. Aborted ids stay usable so a client
        // retry of the same transaction can succeed later.
        if self.prepared.contains_key(&request.txn_id) || self.committed.contains(&request.txn_id)
        {
            debug!(bank = %self.bank_name, txn = %request.txn_id, "duplicate prepare refused");
            return false;
        }

        let is_sender =
            request.from_bank == self.bank_name && self.accounts.contains(&request.from_account);
        let is_recipient =
            request.to_bank == self.bank_name && self.accounts.contains(&request.to_account);

        let role = match (is_sender, is_recipient) {
            (true, true) => Role::SenderAndRecipient,
            (true, false) => Role::Sender,
            (false, true) => Role::Recipient,
            (false, false) => return false,
        };

        if role.includes_sender() && !self.accounts.debit(&request.from_account, request.amount_minor)
        {
            debug!(bank = %self.bank_name, txn = %request.txn_id, "insufficient funds");
            return false;
        }

        self.prepared.insert(
            request.txn_id.clone(),
            PreparedEntry {
                role,
                amount_minor: request.amount_minor,
            },
        );
        true
    }

    /// Second phase, commit decision: credit the recipient side and drop
    /// the reservation. Sender funds were already removed in Prepare.
    ///
    /// Returns false when no entry exists, which the coordinator sees when
    /// it retries past completion or has lost its own state.
    pub fn commit(&mut self, txn_id: &str, to_account: &str) -> bool {
        let Some(entry) = self.prepared.remove(txn_id) else {
            debug!(bank = %self.bank_name, txn = %txn_id, "commit without prepared entry");
            return false;
        };
        if entry.role.includes_recipient() {
            self.accounts.credit(to_account, entry.amount_minor);
        }
        self.committed.insert(txn_id.to_string());
        true
    }

    /// Second phase, abort decision: restore reserved sender funds and drop
    /// the reservation. Recipient-only entries never credited, so there is
    /// nothing to undo for them.
    pub fn abort(&mut self, txn_id: &str, from_account: &str) -> bool {
        let Some(entry) = self.prepared.remove(txn_id) else {
            debug!(bank = %self.bank_name, txn = %txn_id, "abort without prepared entry");
            return false;
        };
        if entry.role.includes_sender() {
            self.accounts.credit(from_account, entry.amount_minor);
        }
        true
    }

    /// Number of reservations currently held.
    pub fn prepared_len(&self) -> usize {
        self.prepared.len()
    }

    /// Balance plus everything currently reserved out of this shard, for
    /// conservation checks across in-flight transfers.
    pub fn total_with_reservations(&self) -> u64 {
        let reserved: u64 = self
            .prepared
            .values()
            .filter(|entry| entry.role.includes_sender())
            .map(|entry| entry.amount_minor)
            .sum();
        self.accounts.total_minor() + reserved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::derive_session_key;

    // Session keys are deterministic, so tests can re-derive the stored key
    // instead of threading it out of registration.
    fn key(username: &str) -> String {
        derive_session_key(username, "pw")
    }

    fn bank_with(accounts: &[(&str, u64)]) -> (BankState, Vec<String>) {
        let mut state = BankState::new("bank_a");
        let ids = accounts
            .iter()
            .map(|(username, balance)| {
                state
                    .accounts
                    .register(username, "pw", *balance)
                    .unwrap()
                    .account_id
            })
            .collect();
        (state, ids)
    }

    fn transfer(
        txn_id: &str,
        from: (&str, &str),
        to: (&str, &str),
        amount_minor: u64,
    ) -> TransferRequest {
        TransferRequest::new(txn_id, from.0, from.1, to.0, to.1, amount_minor, "key")
    }

    #[test]
    fn sender_prepare_reserves_funds() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_b", "remote"), 300_00);

        assert!(state.prepare(&request));
        assert_eq!(state.accounts.balance(&ids[0], &key("alice")), Ok(700_00));
        assert_eq!(state.prepared_len(), 1);
    }

    #[test]
    fn insufficient_funds_votes_no_without_mutation() {
        let (mut state, ids) = bank_with(&[("alice", 100_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_b", "remote"), 100_01);

        assert!(!state.prepare(&request));
        assert_eq!(state.prepared_len(), 0);
        assert_eq!(state.accounts.total_minor(), 100_00);
    }

    #[test]
    fn duplicate_txn_id_is_refused_without_second_debit() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_b", "remote"), 200_00);

        assert!(state.prepare(&request));
        assert!(!state.prepare(&request));
        assert_eq!(state.accounts.total_minor(), 800_00);
        assert_eq!(state.prepared_len(), 1);
    }

    #[test]
    fn unrelated_transfer_votes_no() {
        let (mut state, _ids) = bank_with(&[("alice", 1_000_00)]);
        let request = transfer("t1", ("bank_b", "x"), ("bank_c", "y"), 10);

        assert!(!state.prepare(&request));
    }

    #[test]
    fn recipient_prepare_changes_no_balance() {
        let (mut state, ids) = bank_with(&[("bob", 500_00)]);
        let request = transfer("t1", ("bank_b", "remote"), ("bank_a", &ids[0]), 200_00);

        assert!(state.prepare(&request));
        assert_eq!(state.accounts.total_minor(), 500_00);
    }

    #[test]
    fn commit_credits_recipient_and_clears_entry() {
        let (mut state, ids) = bank_with(&[("bob", 500_00)]);
        let request = transfer("t1", ("bank_b", "remote"), ("bank_a", &ids[0]), 200_00);

        assert!(state.prepare(&request));
        assert!(state.commit("t1", &ids[0]));
        assert_eq!(state.accounts.total_minor(), 700_00);
        assert_eq!(state.prepared_len(), 0);
        // Retry past completion finds no entry.
        assert!(!state.commit("t1", &ids[0]));
    }

    #[test]
    fn abort_restores_sender_funds() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_b", "remote"), 400_00);

        assert!(state.prepare(&request));
        assert!(state.abort("t1", &ids[0]));
        assert_eq!(state.accounts.total_minor(), 1_000_00);
        assert!(!state.abort("t1", &ids[0]));
    }

    #[test]
    fn commit_before_prepare_fails() {
        let (mut state, ids) = bank_with(&[("alice", 100)]);
        assert!(!state.commit("never-prepared", &ids[0]));
        assert!(!state.abort("never-prepared", &ids[0]));
    }

    #[test]
    fn intra_bank_prepare_takes_composite_role() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00), ("bob", 500_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_a", &ids[1]), 200_00);

        assert!(state.prepare(&request));
        // Sender debited, recipient not yet credited.
        assert_eq!(state.accounts.total_minor(), 1_300_00);

        assert!(state.commit("t1", &ids[1]));
        assert_eq!(state.accounts.total_minor(), 1_500_00);
        assert_eq!(state.accounts.balance(&ids[1], &key("bob")), Ok(700_00));
    }

    #[test]
    fn intra_bank_abort_restores_the_sender() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00), ("bob", 500_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_a", &ids[1]), 200_00);

        assert!(state.prepare(&request));
        assert!(state.abort("t1", &ids[0]));
        assert_eq!(state.accounts.balance(&ids[0], &key("alice")), Ok(1_000_00));
        assert_eq!(state.accounts.balance(&ids[1], &key("bob")), Ok(500_00));
    }

    #[test]
    fn committed_txn_id_cannot_be_prepared_again() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00), ("bob", 0)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_a", &ids[1]), 100_00);

        assert!(state.prepare(&request));
        assert!(state.commit("t1", &ids[1]));
        assert!(!state.prepare(&request));
        assert_eq!(state.accounts.total_minor(), 1_000_00);
    }

    #[test]
    fn aborted_txn_id_may_be_retried() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_b", "remote"), 100_00);

        assert!(state.prepare(&request));
        assert!(state.abort("t1", &ids[0]));
        assert!(state.prepare(&request));
        assert_eq!(state.accounts.total_minor(), 900_00);
    }

    #[test]
    fn reservations_are_counted_in_conservation_total() {
        let (mut state, ids) = bank_with(&[("alice", 1_000_00)]);
        let request = transfer("t1", ("bank_a", &ids[0]), ("bank_b", "remote"), 250_00);

        assert!(state.prepare(&request));
        assert_eq!(state.accounts.total_minor(), 750_00);
        assert_eq!(state.total_with_reservations(), 1_000_00);
    }

}
