//! Wire contracts for paygrid.
//!
//! Holds the committed gRPC bindings for the three services (auth, bank,
//! gateway), conversions between wire messages and the domain types in
//! `paygrid-core`, mutual-TLS material loading, and the RPC logging
//! middleware shared by both server binaries.

#![deny(unsafe_code)]

pub mod convert;
pub mod logging;
pub mod pb;
pub mod tls;

pub use logging::RpcLogLayer;
pub use tls::{TlsError, TlsMaterial};
