//! Command arguments and transaction inputs.

use crate::types::{ObjectId, ObjectRef, SequenceNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a value available to a command.
///
/// Declaration order is the wire discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Argument {
    /// The coin used to pay for gas.
    GasCoin,
    /// One of the transaction's inputs.
    Input(u16),
    /// The result of a command with a single return value.
    Result(u16),
    /// One return value of a command with several.
    NestedResult(u16, u16),
}

impl Argument {
    /// Returns the `index`-th return value of this command result.
    ///
    /// Returns `None` unless `self` is a [`Argument::Result`].
    pub fn nested(&self, index: u16) -> Option<Argument> {
        match self {
            Argument::Result(command) => Some(Argument::NestedResult(*command, index)),
            _ => None,
        }
    }

    /// The command index this argument reads from, if any.
    pub fn command_index(&self) -> Option<u16> {
        match self {
            Argument::Result(i) | Argument::NestedResult(i, _) => Some(*i),
            _ => None,
        }
    }

    /// The input index this argument reads from, if any.
    pub fn input_index(&self) -> Option<u16> {
        match self {
            Argument::Input(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::GasCoin => f.write_str("GasCoin"),
            Argument::Input(i) => write!(f, "Input({i})"),
            Argument::Result(i) => write!(f, "Result({i})"),
            Argument::NestedResult(i, j) => write!(f, "NestedResult({i},{j})"),
        }
    }
}

/// How an object input is accessed.
///
/// Declaration order is the wire discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectArg {
    /// An immutable object, or an object owned by the sender.
    ImmOrOwnedObject(ObjectRef),
    /// A shared object.
    SharedObject {
        /// The object id.
        id: ObjectId,
        /// The version at which the object became shared.
        initial_shared_version: SequenceNumber,
        /// Whether the transaction takes it by mutable reference.
        mutable: bool,
    },
    /// An object sent to another object, to be received by it.
    Receiving(ObjectRef),
}

impl ObjectArg {
    /// The id of the referenced object.
    pub fn id(&self) -> ObjectId {
        match self {
            ObjectArg::ImmOrOwnedObject(obj) | ObjectArg::Receiving(obj) => obj.object_id,
            ObjectArg::SharedObject { id, .. } => *id,
        }
    }
}

/// A transaction input: pure bytes or an object.
///
/// Declaration order is the wire discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallArg {
    /// A BCS-encoded value of a pure type.
    Pure(#[serde(with = "serde_bytes")] Vec<u8>),
    /// An object reference.
    Object(ObjectArg),
}

impl From<ObjectArg> for CallArg {
    fn from(arg: ObjectArg) -> Self {
        CallArg::Object(arg)
    }
}
