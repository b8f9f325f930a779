//! # Sui Rust SDK
//!
//! Client-side construction, encoding and signing of Sui programmable
//! transactions.
//!
//! The crate builds a sequence of commands over typed inputs, encodes it in
//! the ledger's canonical BCS wire format, wraps it in a transaction envelope
//! and signs it. It performs no network I/O: gas prices and coins come in
//! through [`provider::ChainStateProvider`], and the signed
//! [`transaction::SubmissionPayload`] goes out to whatever transport the
//! caller uses.
//!
//! ## Quick Start
//!
//! ```rust
//! use sui_rust_sdk::account::{Account, Ed25519Account};
//! use sui_rust_sdk::transaction::{compose, sign_transaction, ProgrammableTransactionBuilder};
//! use sui_rust_sdk::types::{ObjectDigest, ObjectId, ObjectRef};
//! use sui_rust_sdk::SuiAddress;
//!
//! let account = Ed25519Account::generate();
//!
//! let mut ptb = ProgrammableTransactionBuilder::new();
//! ptb.transfer_sui(SuiAddress::from_hex("0xabc").unwrap(), Some(1_000_000)).unwrap();
//!
//! let gas = ObjectRef::new(ObjectId::new([3; 32]), 11, ObjectDigest::new([4; 32]));
//! let data = compose(account.address(), vec![gas], ptb.finish(), 5_000_000, 1_000).unwrap();
//! let signature = sign_transaction(&data, &account).unwrap();
//! println!("{}", signature.to_base64());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `ed25519` | Yes | Ed25519 keys, accounts and signature verification |
//!
//! ## Modules
//!
//! - [`types`] - Addresses, object references, digests and Move type tags
//! - [`transaction`] - Commands, the builder, the envelope and signing
//! - [`account`] - Accounts that sign
//! - [`crypto`] - Hashing, signature schemes and address derivation
//! - [`codec`] - BCS and base64 helpers
//! - [`config`] - Builder limits and composition policy
//! - [`provider`] - The chain-state seam used during composition

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod account;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod provider;
pub mod transaction;
pub mod types;

pub use config::TransactionConfig;
pub use error::{ErrorKind, SuiError, SuiResult};

pub use types::{ObjectId, ObjectRef, StructTag, SuiAddress, TypeTag};
