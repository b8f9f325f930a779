//! Error types for the Sui SDK.
//!
//! This module provides a unified error type [`SuiError`] covering every
//! failure the construction, encoding and signing layers can report.
//! Errors are grouped into coarse [`ErrorKind`]s so that callers can decide
//! whether to fix their input, or to refresh chain state and rebuild.

use std::fmt;
use thiserror::Error;

/// A specialized Result type for Sui SDK operations.
pub type SuiResult<T> = Result<T, SuiError>;

/// The main error type for the Sui SDK.
#[derive(Error, Debug)]
pub enum SuiError {
    /// A type string could not be parsed into a type tag.
    #[error("Invalid type tag: {0}")]
    InvalidTypeTag(String),

    /// A Move identifier (module, function or struct name) is malformed.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Invalid account address or object id
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid object or transaction digest
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    /// Error occurred during hex decoding
    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Error occurred during base64 decoding
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A builder command is missing a required field or has a malformed one.
    ///
    /// Raised before the command is appended, so the builder is unchanged.
    #[error("Builder not valid: {command}.{field}: {reason}")]
    BuilderNotValid {
        /// The command (or builder operation) being assembled
        command: &'static str,
        /// The offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A configured protocol limit would be exceeded.
    #[error("Limit exceeded: {what} (max {limit})")]
    LimitExceeded {
        /// What overflowed
        what: String,
        /// The configured limit
        limit: usize,
    },

    /// A value could not be encoded as a pure argument for its type.
    #[error("Pure encoding error: {0}")]
    PureEncoding(String),

    /// Error occurred during BCS serialization/deserialization
    #[error("BCS error: {0}")]
    Bcs(String),

    /// Error occurred during JSON serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transaction data could not be composed from the supplied gas data.
    #[error("Composition error: {0}")]
    Composition(String),

    /// Invalid public key
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Invalid private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Invalid signature
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// The signature scheme flag is not known or not supported here.
    #[error("Unsupported signature scheme: 0x{0:02x}")]
    UnsupportedScheme(u8),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The chain-state provider failed.
    #[error("Provider error: {message}")]
    Provider {
        /// Error message reported by the provider
        message: String,
        /// Whether the provider reported a stale object version or digest
        stale_object: bool,
    },

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Coarse classification of [`SuiError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed type strings, identifiers, addresses, digests or encodings of them.
    Parse,
    /// A builder command was rejected before being appended.
    Builder,
    /// Pure-value or wire encoding/decoding failed.
    Encoding,
    /// Transaction data could not be composed.
    Composition,
    /// Key, signature or scheme problems.
    Crypto,
    /// Invalid configuration.
    Config,
    /// The chain-state collaborator failed.
    Provider,
    /// Anything else.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Builder => "builder",
            ErrorKind::Encoding => "encoding",
            ErrorKind::Composition => "composition",
            ErrorKind::Crypto => "crypto",
            ErrorKind::Config => "config",
            ErrorKind::Provider => "provider",
            ErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Maximum length for error messages to prevent excessive memory usage in logs.
const MAX_ERROR_MESSAGE_LENGTH: usize = 1000;

impl SuiError {
    /// Creates a new BCS error
    pub fn bcs<E: fmt::Display>(err: E) -> Self {
        Self::Bcs(err.to_string())
    }

    /// Creates a new builder-validity error
    pub fn builder(command: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::BuilderNotValid {
            command,
            field,
            reason: reason.into(),
        }
    }

    /// Creates a new composition error
    pub fn composition<S: Into<String>>(msg: S) -> Self {
        Self::Composition(msg.into())
    }

    /// Creates a new pure-encoding error
    pub fn pure_encoding<S: Into<String>>(msg: S) -> Self {
        Self::PureEncoding(msg.into())
    }

    /// Creates a provider error reporting a stale object reference.
    pub fn stale_object(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            stale_object: true,
        }
    }

    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTypeTag(_)
            | Self::InvalidIdentifier(_)
            | Self::InvalidAddress(_)
            | Self::InvalidDigest(_)
            | Self::Hex(_)
            | Self::Base64(_) => ErrorKind::Parse,
            Self::BuilderNotValid { .. } | Self::LimitExceeded { .. } => ErrorKind::Builder,
            Self::PureEncoding(_) | Self::Bcs(_) | Self::Json(_) => ErrorKind::Encoding,
            Self::Composition(_) => ErrorKind::Composition,
            Self::InvalidPublicKey(_)
            | Self::InvalidPrivateKey(_)
            | Self::InvalidSignature(_)
            | Self::SignatureVerificationFailed
            | Self::UnsupportedScheme(_) => ErrorKind::Crypto,
            Self::Config(_) => ErrorKind::Config,
            Self::Provider { .. } => ErrorKind::Provider,
            Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    /// Returns true if this is a builder-validity error.
    pub fn is_builder_error(&self) -> bool {
        self.kind() == ErrorKind::Builder
    }

    /// Returns true if this is an encoding error.
    pub fn is_encoding_error(&self) -> bool {
        self.kind() == ErrorKind::Encoding
    }

    /// Returns true if this is a composition error.
    pub fn is_composition_error(&self) -> bool {
        self.kind() == ErrorKind::Composition
    }

    /// Returns true if refreshing chain state and rebuilding the transaction
    /// from scratch may succeed.
    ///
    /// Nothing in this crate retries; the answer is for the caller.
    pub fn requires_rebuild(&self) -> bool {
        match self {
            Self::Provider { stale_object, .. } => *stale_object,
            Self::Composition(_) => true,
            _ => false,
        }
    }

    /// Returns a sanitized version of the error message safe for logging.
    ///
    /// Control characters are removed and very long messages are truncated.
    pub fn sanitized_message(&self) -> String {
        let cleaned: String = self
            .to_string()
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();

        if cleaned.len() > MAX_ERROR_MESSAGE_LENGTH {
            let mut end = MAX_ERROR_MESSAGE_LENGTH;
            while !cleaned.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... [truncated, total length: {}]",
                &cleaned[..end],
                cleaned.len()
            )
        } else {
            cleaned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SuiError::InvalidAddress("bad address".to_string());
        assert_eq!(err.to_string(), "Invalid address: bad address");
    }

    #[test]
    fn test_builder_error_names_field() {
        let err = SuiError::builder("move_call", "target", "expected 3 segments, got 2");
        assert!(err.is_builder_error());
        let msg = err.to_string();
        assert!(msg.contains("Builder not valid"));
        assert!(msg.contains("move_call.target"));
        assert!(msg.contains("expected 3 segments"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            SuiError::InvalidTypeTag("x".into()).kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            SuiError::LimitExceeded {
                what: "commands".into(),
                limit: 1
            }
            .kind(),
            ErrorKind::Builder
        );
        assert_eq!(SuiError::pure_encoding("x").kind(), ErrorKind::Encoding);
        assert_eq!(SuiError::bcs("unknown variant").kind(), ErrorKind::Encoding);
        assert_eq!(SuiError::composition("x").kind(), ErrorKind::Composition);
        assert_eq!(SuiError::UnsupportedScheme(9).kind(), ErrorKind::Crypto);
        assert_eq!(SuiError::Config("x".into()).kind(), ErrorKind::Config);
        assert_eq!(SuiError::stale_object("x").kind(), ErrorKind::Provider);
    }

    #[test]
    fn test_requires_rebuild() {
        assert!(SuiError::stale_object("object version 3 is stale").requires_rebuild());
        assert!(SuiError::composition("gas price missing").requires_rebuild());
        assert!(!SuiError::InvalidTypeTag("u7".into()).requires_rebuild());
        assert!(!SuiError::Provider {
            message: "connection refused".into(),
            stale_object: false
        }
        .requires_rebuild());
    }

    #[test]
    fn test_unsupported_scheme_display() {
        let err = SuiError::UnsupportedScheme(0x0a);
        assert_eq!(err.to_string(), "Unsupported signature scheme: 0x0a");
    }

    #[test]
    fn test_sanitized_message_truncates_long_messages() {
        let err = SuiError::composition("x".repeat(2000));
        let sanitized = err.sanitized_message();
        assert!(sanitized.len() < 1200);
        assert!(sanitized.contains("truncated"));
    }

    #[test]
    fn test_sanitized_message_removes_control_chars() {
        let err = SuiError::Bcs("bad\x00bytes\x1f".to_string());
        let sanitized = err.sanitized_message();
        assert!(!sanitized.contains('\x00'));
        assert!(!sanitized.contains('\x1f'));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Composition.to_string(), "composition");
        assert_eq!(ErrorKind::Parse.to_string(), "parse");
    }
}
