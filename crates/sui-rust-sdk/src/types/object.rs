//! Object references.

use super::{ObjectDigest, ObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An object's version number.
pub type SequenceNumber = u64;

/// A reference to a specific version of an object.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    /// The object id.
    pub object_id: ObjectId,
    /// The version being referenced.
    pub version: SequenceNumber,
    /// The digest of the object at that version.
    pub digest: ObjectDigest,
}

impl ObjectRef {
    /// Creates a new object reference.
    pub fn new(object_id: ObjectId, version: SequenceNumber, digest: ObjectDigest) -> Self {
        Self {
            object_id,
            version,
            digest,
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({})",
            self.object_id.to_short_string(),
            self.version,
            self.digest
        )
    }
}
