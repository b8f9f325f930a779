//! Transaction building and signing.
//!
//! # Overview
//!
//! - [`ProgrammableTransactionBuilder`] accumulates inputs and commands and
//!   hands back [`Argument`]s that later commands can reference
//! - [`TransactionData`] wraps the finished [`ProgrammableTransaction`] with a
//!   sender, gas data and expiration
//! - [`sign_transaction`] wraps the data in an [`IntentMessage`], hashes it and
//!   produces a [`UserSignature`]
//!
//! # Example: Transfer
//!
//! ```rust
//! use sui_rust_sdk::transaction::{Argument, ProgrammableTransactionBuilder};
//! use sui_rust_sdk::SuiAddress;
//!
//! let mut ptb = ProgrammableTransactionBuilder::new();
//! let amount = ptb.pure(&1_000_000u64).unwrap();
//! let coin = ptb.split_coins(Argument::GasCoin, vec![amount]).unwrap();
//! let recipient = ptb.pure(&SuiAddress::TWO).unwrap();
//! ptb.transfer_objects(vec![coin], recipient).unwrap();
//!
//! let pt = ptb.build();
//! assert_eq!(pt.inputs.len(), 2);
//! assert_eq!(pt.commands.len(), 2);
//! ```
//!
//! # Example: Move Call
//!
//! ```rust
//! use sui_rust_sdk::transaction::{Argument, MoveCallBuilder, ProgrammableTransactionBuilder};
//!
//! let mut ptb = ProgrammableTransactionBuilder::new();
//! let amount = ptb.pure(&5u64).unwrap();
//! let result = ptb
//!     .move_call(
//!         MoveCallBuilder::new("0x2::coin::split")
//!             .type_arg("0x2::sui::SUI")
//!             .arg(Argument::GasCoin)
//!             .arg(amount),
//!     )
//!     .unwrap();
//! assert_eq!(result, Argument::Result(0));
//! ```

mod argument;
mod builder;
mod command;
mod intent;
mod pure;
mod signing;
mod types;

pub use argument::{Argument, CallArg, ObjectArg};
pub use builder::ProgrammableTransactionBuilder;
pub use command::{parse_move_call_target, Command, MoveCallBuilder, ProgrammableMoveCall};
pub use intent::{AppId, Intent, IntentMessage, IntentScope, IntentVersion, PersonalMessage};
pub use pure::{decode_pure_value, encode_pure_value, PureValue};
pub use signing::{
    compose, compose_with_provider, compose_with_provider_and_config, sign_personal_message,
    sign_sponsored_transaction, sign_transaction, sign_transaction_with, signing_digest,
    SignedTransaction, SubmissionPayload, UserSignature,
};
pub use types::{
    GasData, ProgrammableTransaction, TransactionData, TransactionDataBuilder, TransactionDataV1,
    TransactionExpiration, TransactionKind,
};
