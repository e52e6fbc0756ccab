//! Client library for the paygrid platform.
//!
//! Holds per-account session keys obtained at login, submits payments
//! through the gateway, and rides out gateway outages with an offline queue
//! that retries in submission order.

#![deny(unsafe_code)]

pub mod queue;
pub mod transport;

use chrono::Utc;
use paygrid_proto::pb::paygrid::v1::{Account, LoginRequest, RegisterRequest, Transaction};
use queue::OfflineQueue;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};
use transport::{PaymentTransport, TransportError};

pub use queue::{QueueState, QueuedPayment, DEFAULT_COOLDOWN, DEFAULT_MAX_ATTEMPTS};
pub use transport::GrpcGatewayTransport;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no session key held for {bank}/{account}; log in first")]
    NoSession { bank: String, account: String },

    #[error("registration failed: {0}")]
    Registration(String),

    #[error("login failed: {0}")]
    Login(String),

    #[error("balance query failed: {0}")]
    Balance(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Session keys held by this client, keyed by (bank, account).
#[derive(Debug, Default)]
pub struct SessionStore {
    keys: HashMap<(String, String), String>,
}

impl SessionStore {
    pub fn insert(&mut self, bank: &str, account: &str, key: String) {
        self.keys
            .insert((bank.to_string(), account.to_string()), key);
    }

    pub fn get(&self, bank: &str, account: &str) -> Option<&str> {
        self.keys
            .get(&(bank.to_string(), account.to_string()))
            .map(String::as_str)
    }
}

/// How a payment submission was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Reached the gateway on first try; the gateway's verdict is inside.
    Delivered { success: bool, message: String },
    /// Transport failed or the queue was already non-empty: the payment is
    /// queued, along with whatever a piggybacked drain pass flushed.
    Queued { flushed: Vec<FlushedPayment> },
}

/// Terminal report for one queued payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushedPayment {
    pub txn_id: String,
    pub outcome: FlushOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlushOutcome {
    /// Submitted; the gateway's verdict is inside. Submission is not a
    /// commit guarantee.
    Delivered { success: bool, message: String },
    /// Retry budget exhausted; dropped without submission.
    Dropped { attempts: u32 },
}

/// A paygrid client bound to one gateway transport.
pub struct Client<T: PaymentTransport> {
    transport: T,
    sessions: SessionStore,
    queue: OfflineQueue,
}

impl<T: PaymentTransport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            sessions: SessionStore::default(),
            queue: OfflineQueue::default(),
        }
    }

    pub fn with_queue(transport: T, queue: OfflineQueue) -> Self {
        Self {
            transport,
            sessions: SessionStore::default(),
            queue,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn queue_state(&self) -> QueueState {
        self.queue.state()
    }

    /// Registers an account and returns its number. Registration does not
    /// log in; call [`Client::login`] to obtain the session key.
    pub async fn register(
        &mut self,
        username: &str,
        password: &str,
        bank_name: &str,
        initial_amount_minor: u64,
    ) -> Result<String, ClientError> {
        let response = self
            .transport
            .register(RegisterRequest {
                username: username.to_string(),
                password: password.to_string(),
                bank_name: bank_name.to_string(),
                initial_amount_minor,
            })
            .await?;
        if !response.success {
            return Err(ClientError::Registration(response.message));
        }
        Ok(response.account_number)
    }

    /// Logs in and stores the session key for the (bank, account) pair.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        bank_name: &str,
    ) -> Result<String, ClientError> {
        let response = self
            .transport
            .login(LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
                bank_name: bank_name.to_string(),
            })
            .await?;
        if response.key.is_empty() {
            return Err(ClientError::Login(response.message));
        }
        self.sessions
            .insert(bank_name, &response.account_number, response.key);
        info!(bank = %bank_name, account = %response.account_number, "logged in");
        Ok(response.account_number)
    }

    /// Balance query for an account this client has logged in to.
    pub async fn balance(&self, bank_name: &str, account: &str) -> Result<u64, ClientError> {
        let key = self
            .sessions
            .get(bank_name, account)
            .ok_or_else(|| ClientError::NoSession {
                bank: bank_name.to_string(),
                account: account.to_string(),
            })?;
        let response = self
            .transport
            .balance(Account {
                number: account.to_string(),
                bank_name: bank_name.to_string(),
                key: key.to_string(),
            })
            .await?;
        if response.error {
            return Err(ClientError::Balance(response.message));
        }
        Ok(response.balance_minor)
    }

    /// Submits a payment from an account this client has logged in to.
    ///
    /// While the offline queue is non-empty, new payments are appended
    /// behind it so the gateway sees this client's payments in submission
    /// order; a drain pass piggybacks when the cooldown allows.
    pub async fn pay(
        &mut self,
        txn_id: &str,
        from: (&str, &str),
        to: (&str, &str),
        amount_minor: u64,
    ) -> Result<PaymentStatus, ClientError> {
        let (from_bank, from_account) = from;
        let (to_bank, to_account) = to;
        let key = self
            .sessions
            .get(from_bank, from_account)
            .ok_or_else(|| ClientError::NoSession {
                bank: from_bank.to_string(),
                account: from_account.to_string(),
            })?;

        let transaction = Transaction {
            id: txn_id.to_string(),
            from_account: from_account.to_string(),
            from_bank: from_bank.to_string(),
            to_account: to_account.to_string(),
            to_bank: to_bank.to_string(),
            amount_minor,
            timestamp_unix_ms: Utc::now().timestamp_millis(),
            key: key.to_string(),
        };

        if !self.queue.is_empty() {
            self.queue.push(transaction);
            let flushed = self.flush().await;
            return Ok(PaymentStatus::Queued { flushed });
        }

        match self.transport.process_payment(transaction.clone()).await {
            Ok(response) => {
                // Opportunistic drain after any successful send.
                let _ = self.flush().await;
                Ok(PaymentStatus::Delivered {
                    success: response.success,
                    message: response.message,
                })
            }
            Err(err) => {
                warn!(txn = %txn_id, error = %err, "gateway unreachable, queueing payment");
                self.queue.push(transaction);
                self.queue.note_failure();
                Ok(PaymentStatus::Queued { flushed: Vec::new() })
            }
        }
    }

    /// One drain pass: retries the head, then keeps sending in order until
    /// the queue empties or a transport failure starts a new cooldown. A
    /// head that exhausts its retry budget is dropped and reported.
    pub async fn flush(&mut self) -> Vec<FlushedPayment> {
        let mut flushed = Vec::new();
        if !self.queue.ready() {
            return flushed;
        }

        while let Some(head) = self.queue.head().cloned() {
            match self
                .transport
                .process_payment(head.transaction.clone())
                .await
            {
                Ok(response) => {
                    self.queue.pop_head();
                    self.queue.note_success();
                    flushed.push(FlushedPayment {
                        txn_id: head.transaction.id,
                        outcome: FlushOutcome::Delivered {
                            success: response.success,
                            message: response.message,
                        },
                    });
                }
                Err(err) => {
                    let attempts = self.queue.bump_head_attempts();
                    if attempts >= self.queue.max_attempts() {
                        if let Some(dropped) = self.queue.pop_head() {
                            warn!(
                                txn = %dropped.transaction.id,
                                attempts,
                                "retry budget exhausted, dropping payment"
                            );
                            flushed.push(FlushedPayment {
                                txn_id: dropped.transaction.id,
                                outcome: FlushOutcome::Dropped { attempts },
                            });
                        }
                    } else {
                        warn!(error = %err, attempts, "queued retry failed, cooling down");
                    }
                    self.queue.note_failure();
                    break;
                }
            }
        }
        flushed
    }

    /// Drives drain passes, sleeping out cooldowns, until the queue is
    /// empty. Every queued payment ends up either delivered or dropped.
    pub async fn run_until_drained(&mut self) -> Vec<FlushedPayment> {
        let mut all = Vec::new();
        while !self.queue.is_empty() {
            let wait = self.queue.remaining_cooldown();
            if !wait.is_zero() {
                tokio::time::sleep(wait).await;
            }
            all.extend(self.flush().await);
        }
        all
    }

    /// Probes the gateway's health endpoint.
    pub async fn gateway_up(&self) -> bool {
        self.transport.health().await.unwrap_or(false)
    }
}
