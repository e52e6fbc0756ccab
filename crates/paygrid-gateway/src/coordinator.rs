use crate::link::BankLink;
use paygrid_proto::pb::paygrid::v1::Transaction;
use std::sync::Arc;
use tracing::{info, warn};

/// One participant in a coordinated transfer.
#[derive(Clone)]
pub struct Participant {
    pub bank: String,
    pub link: Arc<dyn BankLink>,
}

/// Outcome of one coordinated transfer, as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Committed,
    Aborted { reason: String },
    /// A participant failed after the commit decision. Participants that
    /// already committed stay committed; there is no compensation pass.
    CommitFailed { reason: String },
}

impl TransferOutcome {
    pub fn success(&self) -> bool {
        matches!(self, TransferOutcome::Committed)
    }

    pub fn message(&self) -> String {
        match self {
            TransferOutcome::Committed => "Payment successful".to_string(),
            TransferOutcome::Aborted { reason } => reason.clone(),
            TransferOutcome::CommitFailed { reason } => reason.clone(),
        }
    }
}

/// Runs two-phase commit across the participants of one transfer.
///
/// Prepares are issued sequentially in a stable order (sender's bank
/// first); the first refusal or transport failure stops the phase and turns
/// into Abort for every participant that already voted yes. Keeping the
/// coordinator stateless across calls means a crash between phases leaves
/// orphan reservations; that recovery gap is deliberate.
pub struct TwoPhaseCoordinator {
    participants: Vec<Participant>,
}

impl TwoPhaseCoordinator {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub async fn run(&self, transaction: &Transaction) -> TransferOutcome {
        let mut voted_yes: Vec<&Participant> = Vec::new();
        let mut refusal: Option<String> = None;

        for participant in &self.participants {
            match participant.link.prepare(transaction.clone()).await {
                Ok(true) => voted_yes.push(participant),
                Ok(false) => {
                    refusal = Some(format!(
                        "invalid account, or insufficient funds, or duplicate transaction \
                         (bank '{}' refused to prepare)",
                        participant.bank
                    ));
                    break;
                }
                Err(err) => {
                    refusal = Some(err.to_string());
                    break;
                }
            }
        }

        if let Some(reason) = refusal {
            // Only holders of a prepared entry need the release; results are
            // logged, not escalated past the single outcome message.
            for participant in &voted_yes {
                match participant.link.abort(transaction.clone()).await {
                    Ok(true) => {}
                    Ok(false) => {
                        warn!(bank = %participant.bank, txn = %transaction.id, "abort found no entry")
                    }
                    Err(err) => {
                        warn!(bank = %participant.bank, txn = %transaction.id, error = %err, "abort failed")
                    }
                }
            }
            info!(txn = %transaction.id, reason = %reason, "transfer aborted");
            return TransferOutcome::Aborted { reason };
        }

        // Commit point crossed: failures below are reported but never
        // reverted.
        for participant in &voted_yes {
            match participant.link.commit(transaction.clone()).await {
                Ok(true) => {}
                Ok(false) => {
                    return TransferOutcome::CommitFailed {
                        reason: format!("bank '{}' failed to commit", participant.bank),
                    }
                }
                Err(err) => {
                    return TransferOutcome::CommitFailed {
                        reason: err.to_string(),
                    }
                }
            }
        }

        info!(txn = %transaction.id, participants = self.participants.len(), "transfer committed");
        TransferOutcome::Committed
    }
}
