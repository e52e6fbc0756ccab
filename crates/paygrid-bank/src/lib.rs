//! Bank participant node.
//!
//! Each node authoritatively owns one account shard and exposes two
//! services: `AuthService` (register, login) and `BankService` (balance
//! plus the Prepare/Commit/Abort verbs of two-phase commit). Both serialize
//! on the same mutex over [`BankState`], so every bank operation is a
//! serial point; banks never make outbound calls, so the lock is never held
//! across the network.

#![deny(unsafe_code)]

pub mod auth;
pub mod bank;

use paygrid_core::BankState;
use std::sync::Arc;
use tokio::sync::Mutex;

pub use auth::AuthApi;
pub use bank::BankApi;

/// Shared handle to one bank's shard.
#[derive(Clone)]
pub struct BankNode {
    name: String,
    state: Arc<Mutex<BankState>>,
}

impl BankNode {
    pub fn new(bank_name: impl Into<String>) -> Self {
        let name = bank_name.into();
        Self {
            state: Arc::new(Mutex::new(BankState::new(name.clone()))),
            name,
        }
    }

    pub fn bank_name(&self) -> &str {
        &self.name
    }

    /// The shard itself, for tests and conservation checks.
    pub fn state(&self) -> &Arc<Mutex<BankState>> {
        &self.state
    }

    pub fn auth_api(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    pub fn bank_api(&self) -> BankApi {
        BankApi::new(self.clone())
    }
}
