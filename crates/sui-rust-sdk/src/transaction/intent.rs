//! Intent wrapping for signed messages.
//!
//! Everything a key signs is first wrapped in an [`IntentMessage`], a
//! three-byte [`Intent`] prefix followed by the BCS bytes of the value. The
//! prefix binds the signature to the kind of message, the intent version and
//! the application, so a signature over one kind of message can never be
//! replayed as another.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// What kind of message is being signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum IntentScope {
    /// Transaction data to be executed.
    TransactionData = 0,
    /// Transaction effects, signed by validators.
    TransactionEffects = 1,
    /// A checkpoint summary, signed by validators.
    CheckpointSummary = 2,
    /// An arbitrary message signed by a user.
    PersonalMessage = 3,
}

/// The intent format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum IntentVersion {
    /// The only defined version.
    V0 = 0,
}

/// The application a signature is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum AppId {
    /// Sui
    Sui = 0,
    /// Narwhal
    Narwhal = 1,
}

/// The intent prefix: scope, version and application, one byte each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    /// What is being signed.
    pub scope: IntentScope,
    /// The intent version.
    pub version: IntentVersion,
    /// The application.
    pub app_id: AppId,
}

impl Intent {
    /// The intent for Sui transaction data.
    pub fn sui_transaction() -> Self {
        Self::sui_app(IntentScope::TransactionData)
    }

    /// The intent for a Sui personal message.
    pub fn personal_message() -> Self {
        Self::sui_app(IntentScope::PersonalMessage)
    }

    /// A V0 Sui intent with the given scope.
    pub fn sui_app(scope: IntentScope) -> Self {
        Self {
            scope,
            version: IntentVersion::V0,
            app_id: AppId::Sui,
        }
    }

    /// Replaces the application id.
    #[must_use]
    pub fn with_app_id(mut self, app_id: AppId) -> Self {
        self.app_id = app_id;
        self
    }

    /// The three prefix bytes.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.scope as u8, self.version as u8, self.app_id as u8]
    }
}

/// A value wrapped with its intent, the exact structure whose BCS bytes
/// are hashed for signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMessage<T> {
    /// The intent prefix.
    pub intent: Intent,
    /// The wrapped value.
    pub value: T,
}

impl<T> IntentMessage<T> {
    /// Wraps `value` with `intent`.
    pub fn new(intent: Intent, value: T) -> Self {
        Self { intent, value }
    }
}

/// A personal message, signed as a byte vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalMessage(#[serde(with = "serde_bytes")] pub Vec<u8>);
