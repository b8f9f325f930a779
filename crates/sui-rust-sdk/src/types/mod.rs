//! Core Sui types.
//!
//! Addresses, object ids and references, digests, and the Move type
//! descriptors used by the transaction model.

mod address;
mod digest;
mod move_types;
mod object;

pub use address::{ObjectId, SuiAddress, SUI_ADDRESS_LENGTH};
pub use digest::{Digest, ObjectDigest, TransactionDigest, DIGEST_LENGTH};
pub use move_types::{Identifier, StructTag, TypeTag, DEFAULT_MAX_TYPE_DEPTH};
pub use object::{ObjectRef, SequenceNumber};
