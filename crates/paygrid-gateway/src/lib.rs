//! Gateway node: stateless routing and transaction coordination.
//!
//! Auth and balance RPCs are forwarded to the owning bank; payments run the
//! two-phase commit coordinator across the one or two participating banks.
//! The gateway holds no shared mutable state across requests; the only
//! durable state lives on the banks.

#![deny(unsafe_code)]

pub mod coordinator;
pub mod grpc;
pub mod link;

pub use coordinator::{Participant, TransferOutcome, TwoPhaseCoordinator};
pub use grpc::GatewayApi;
pub use link::{BankLink, GrpcBankLink, LinkError};
