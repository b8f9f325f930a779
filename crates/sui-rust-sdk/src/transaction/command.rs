//! Commands of a programmable transaction.

use super::Argument;
use crate::error::{SuiError, SuiResult};
use crate::types::{Identifier, ObjectId, TypeTag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A call to a Move function.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgrammableMoveCall {
    /// The package containing the module.
    pub package: ObjectId,
    /// The module name.
    pub module: Identifier,
    /// The function name.
    pub function: Identifier,
    /// Type arguments to the function.
    pub type_arguments: Vec<TypeTag>,
    /// Arguments to the function.
    pub arguments: Vec<Argument>,
}

impl fmt::Display for ProgrammableMoveCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.package.to_short_string(),
            self.module,
            self.function
        )?;
        if !self.type_arguments.is_empty() {
            let types: Vec<String> = self
                .type_arguments
                .iter()
                .map(TypeTag::to_short_string)
                .collect();
            write!(f, "<{}>", types.join(", "))?;
        }
        Ok(())
    }
}

/// A single step of a programmable transaction.
///
/// Declaration order is the wire discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Call a Move function.
    MoveCall(Box<ProgrammableMoveCall>),
    /// Transfer objects (first field) to an address (second field).
    TransferObjects(Vec<Argument>, Argument),
    /// Split the given amounts off a coin, producing one coin per amount.
    SplitCoins(Argument, Vec<Argument>),
    /// Merge the source coins (second field) into the destination coin.
    MergeCoins(Argument, Vec<Argument>),
    /// Publish modules with the given dependency package ids.
    Publish(Vec<Vec<u8>>, Vec<ObjectId>),
    /// Build a vector from the arguments, with an optional element type.
    ///
    /// The type is required when the vector is empty or its elements are
    /// pure values.
    MakeMoveVec(Option<TypeTag>, Vec<Argument>),
    /// Upgrade `package` with new modules, authorized by an upgrade ticket.
    Upgrade(Vec<Vec<u8>>, Vec<ObjectId>, ObjectId, Argument),
}

impl Command {
    /// Short name of the command kind, used in logs and errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Command::MoveCall(_) => "move_call",
            Command::TransferObjects(..) => "transfer_objects",
            Command::SplitCoins(..) => "split_coins",
            Command::MergeCoins(..) => "merge_coins",
            Command::Publish(..) => "publish",
            Command::MakeMoveVec(..) => "make_move_vec",
            Command::Upgrade(..) => "upgrade",
        }
    }

    /// Every argument the command reads, in wire order.
    pub fn arguments(&self) -> Vec<&Argument> {
        match self {
            Command::MoveCall(call) => call.arguments.iter().collect(),
            Command::TransferObjects(objects, recipient) => {
                objects.iter().chain(std::iter::once(recipient)).collect()
            }
            Command::SplitCoins(coin, amounts) => {
                std::iter::once(coin).chain(amounts.iter()).collect()
            }
            Command::MergeCoins(target, sources) => {
                std::iter::once(target).chain(sources.iter()).collect()
            }
            Command::Publish(..) => vec![],
            Command::MakeMoveVec(_, elements) => elements.iter().collect(),
            Command::Upgrade(_, _, _, ticket) => vec![ticket],
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveCall(call) => write!(f, "MoveCall({call})"),
            other => f.write_str(other.kind_name()),
        }
    }
}

/// Parses a `package::module::function` move-call target.
///
/// # Errors
///
/// Returns [`SuiError::BuilderNotValid`] naming the `target` field if the
/// string does not have exactly three `::`-separated segments or a segment
/// is malformed.
pub fn parse_move_call_target(target: &str) -> SuiResult<(ObjectId, Identifier, Identifier)> {
    let segments: Vec<&str> = target.trim().split("::").collect();
    let [package, module, function] = segments.as_slice() else {
        return Err(SuiError::builder(
            "move_call",
            "target",
            format!(
                "expected 'package::module::function', got {} segments in '{target}'",
                segments.len()
            ),
        ));
    };
    let package = ObjectId::from_hex(package)
        .map_err(|e| SuiError::builder("move_call", "target", format!("package: {e}")))?;
    let module = Identifier::new(*module)
        .map_err(|e| SuiError::builder("move_call", "target", format!("module: {e}")))?;
    let function = Identifier::new(*function)
        .map_err(|e| SuiError::builder("move_call", "target", format!("function: {e}")))?;
    Ok((package, module, function))
}

/// Builder for a single move call.
///
/// Problems with the target or type arguments are collected and reported
/// together when the call is appended to a
/// [`ProgrammableTransactionBuilder`](super::ProgrammableTransactionBuilder).
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::transaction::{Argument, MoveCallBuilder, ProgrammableTransactionBuilder};
///
/// let mut ptb = ProgrammableTransactionBuilder::new();
/// let amount = ptb.pure(&1_000u64).unwrap();
/// let coin = ptb
///     .move_call(
///         MoveCallBuilder::new("0x2::coin::split")
///             .type_arg("0x2::sui::SUI")
///             .arg(Argument::GasCoin)
///             .arg(amount),
///     )
///     .unwrap();
/// assert_eq!(coin, Argument::Result(0));
/// ```
#[derive(Debug, Clone)]
pub struct MoveCallBuilder {
    target: Result<(ObjectId, Identifier, Identifier), String>,
    type_arguments: Vec<TypeTag>,
    arguments: Vec<Argument>,
    returns: Option<u16>,
    errors: Vec<String>,
}

impl MoveCallBuilder {
    /// Starts a call to `package::module::function`.
    #[must_use]
    pub fn new(target: &str) -> Self {
        Self {
            target: parse_move_call_target(target).map_err(|e| match e {
                SuiError::BuilderNotValid { reason, .. } => reason,
                other => other.to_string(),
            }),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
            returns: None,
            errors: Vec::new(),
        }
    }

    /// Starts a call from already-validated parts.
    #[must_use]
    pub fn from_parts(package: ObjectId, module: Identifier, function: Identifier) -> Self {
        Self {
            target: Ok((package, module, function)),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
            returns: None,
            errors: Vec::new(),
        }
    }

    /// Adds a type argument parsed from a string.
    #[must_use]
    pub fn type_arg(mut self, type_arg: &str) -> Self {
        match TypeTag::from_str_strict(type_arg) {
            Ok(tag) => self.type_arguments.push(tag),
            Err(e) => self
                .errors
                .push(format!("invalid type argument '{type_arg}': {e}")),
        }
        self
    }

    /// Adds a type argument.
    #[must_use]
    pub fn type_arg_typed(mut self, type_arg: TypeTag) -> Self {
        self.type_arguments.push(type_arg);
        self
    }

    /// Adds several type arguments.
    #[must_use]
    pub fn type_args_typed(mut self, type_args: impl IntoIterator<Item = TypeTag>) -> Self {
        self.type_arguments.extend(type_args);
        self
    }

    /// Adds an argument.
    #[must_use]
    pub fn arg(mut self, arg: Argument) -> Self {
        self.arguments.push(arg);
        self
    }

    /// Adds several arguments.
    #[must_use]
    pub fn args(mut self, args: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(args);
        self
    }

    /// Declares how many values the function returns.
    #[must_use]
    pub fn returns(mut self, count: u16) -> Self {
        self.returns = Some(count);
        self
    }

    /// Returns the declared return count, if any.
    pub fn declared_returns(&self) -> Option<u16> {
        self.returns
    }

    /// Finishes the call.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::BuilderNotValid`] for a malformed target (field
    /// `target`) or any type argument that failed to parse (field
    /// `type_arguments`).
    pub fn build(self) -> SuiResult<ProgrammableMoveCall> {
        let (package, module, function) = self
            .target
            .map_err(|reason| SuiError::builder("move_call", "target", reason))?;
        if !self.errors.is_empty() {
            return Err(SuiError::builder(
                "move_call",
                "type_arguments",
                self.errors.join("; "),
            ));
        }
        Ok(ProgrammableMoveCall {
            package,
            module,
            function,
            type_arguments: self.type_arguments,
            arguments: self.arguments,
        })
    }
}
