use crate::error::AccountError;
use crate::session::derive_session_key;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// One account as stored at its owning bank.
///
/// Amounts are integer minor units (cents), so arithmetic is exact and
/// conservation checks never chase rounding error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub username: String,
    pub password: String,
    pub balance_minor: u64,
    pub session_key: String,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredAccount {
    pub account_id: String,
    pub session_key: String,
}

/// In-memory account shard owned by exactly one bank.
///
/// Usernames are unique within the shard; they may collide across banks.
/// A durable variant replaces this module and nothing else needs to know.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
    usernames: HashSet<String>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an account with a fresh opaque id and a derived session key.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        initial_minor: u64,
    ) -> Result<RegisteredAccount, AccountError> {
        if self.usernames.contains(username) {
            return Err(AccountError::UsernameTaken {
                username: username.to_string(),
            });
        }

        let account_id = Uuid::new_v4().to_string();
        let session_key = derive_session_key(username, password);
        self.accounts.insert(
            account_id.clone(),
            Account {
                account_id: account_id.clone(),
                username: username.to_string(),
                password: password.to_string(),
                balance_minor: initial_minor,
                session_key: session_key.clone(),
            },
        );
        self.usernames.insert(username.to_string());

        Ok(RegisteredAccount {
            account_id,
            session_key,
        })
    }

    /// Returns the account matching the credentials, or `InvalidCredentials`.
    pub fn login(&self, username: &str, password: &str) -> Result<&Account, AccountError> {
        self.accounts
            .values()
            .find(|account| account.username == username && account.password == password)
            .ok_or(AccountError::InvalidCredentials)
    }

    /// Authorized balance read: the caller must hold the stored session key.
    pub fn balance(&self, account_id: &str, session_key: &str) -> Result<u64, AccountError> {
        let account = self.accounts.get(account_id).ok_or(AccountError::NotFound)?;
        if account.session_key != session_key {
            return Err(AccountError::Unauthorized);
        }
        Ok(account.balance_minor)
    }

    pub fn contains(&self, account_id: &str) -> bool {
        self.accounts.contains_key(account_id)
    }

    /// Removes funds if the balance covers the amount. Returns false (and
    /// leaves the balance untouched) otherwise.
    pub fn debit(&mut self, account_id: &str, amount_minor: u64) -> bool {
        match self.accounts.get_mut(account_id) {
            Some(account) if account.balance_minor >= amount_minor => {
                account.balance_minor -= amount_minor;
                true
            }
            _ => false,
        }
    }

    /// Adds funds to an existing account. Returns false if the account is
    /// unknown.
    pub fn credit(&mut self, account_id: &str, amount_minor: u64) -> bool {
        match self.accounts.get_mut(account_id) {
            Some(account) => {
                account.balance_minor = account.balance_minor.saturating_add(amount_minor);
                true
            }
            None => false,
        }
    }

    /// Sum of all balances in the shard, for conservation checks.
    pub fn total_minor(&self) -> u64 {
        self.accounts
            .values()
            .map(|account| account.balance_minor)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
