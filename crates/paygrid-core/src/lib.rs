//! Domain model for the paygrid payments platform.
//!
//! This crate owns the account shards, the participant side of the
//! two-phase commit protocol, the gateway's bank directory, and session-key
//! derivation. It performs no I/O; transport lives in `paygrid-proto` and
//! the node crates.

#![deny(unsafe_code)]

pub mod account;
pub mod directory;
pub mod error;
pub mod participant;
pub mod session;
pub mod transfer;

pub use account::{Account, AccountStore, RegisteredAccount};
pub use directory::{BankDirectory, DirectoryError};
pub use error::AccountError;
pub use participant::{BankState, PreparedEntry, Role};
pub use session::derive_session_key;
pub use transfer::TransferRequest;
