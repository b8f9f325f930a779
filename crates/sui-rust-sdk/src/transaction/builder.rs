//! Programmable transaction builder.
//!
//! The builder owns two growing lists, inputs and commands. Every append
//! returns the [`Argument`] that refers to what was appended, so later
//! commands can consume earlier results. Arguments are checked when a
//! command is appended: a command may only read inputs that exist and
//! results of commands strictly before it.

use super::command::{Command, MoveCallBuilder, ProgrammableMoveCall};
use super::pure::{encode_pure_value, PureValue};
use super::types::ProgrammableTransaction;
use super::{Argument, CallArg, ObjectArg};
use crate::config::{BuilderLimits, TransactionConfig};
use crate::error::{SuiError, SuiResult};
use crate::types::{Identifier, ObjectId, SuiAddress, TypeTag};
use serde::Serialize;
use tracing::{debug, warn};

/// Builds a [`ProgrammableTransaction`].
///
/// Inputs are not deduplicated: adding the same object twice yields two
/// distinct input indices.
///
/// A failed append leaves the builder unchanged.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::transaction::{Argument, ProgrammableTransactionBuilder};
/// use sui_rust_sdk::SuiAddress;
///
/// let mut ptb = ProgrammableTransactionBuilder::new();
/// let amount = ptb.pure(&1_000_000u64).unwrap();
/// let coin = ptb.split_coins(Argument::GasCoin, vec![amount]).unwrap();
/// let recipient = ptb.pure(&SuiAddress::from_hex("0xa11ce").unwrap()).unwrap();
/// ptb.transfer_objects(vec![coin], recipient).unwrap();
///
/// let tx = ptb.build();
/// assert_eq!(tx.inputs.len(), 2);
/// assert_eq!(tx.commands.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgrammableTransactionBuilder {
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
    limits: BuilderLimits,
}

impl ProgrammableTransactionBuilder {
    /// Creates an empty builder with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with the given limits.
    #[must_use]
    pub fn with_limits(limits: BuilderLimits) -> Self {
        Self {
            inputs: Vec::new(),
            commands: Vec::new(),
            limits,
        }
    }

    /// Creates an empty builder enforcing the limits carried by `config`.
    #[must_use]
    pub fn with_config(config: &TransactionConfig) -> Self {
        Self::with_limits(*config.limits())
    }

    /// Returns the limits this builder enforces.
    pub fn limits(&self) -> &BuilderLimits {
        &self.limits
    }

    /// Number of inputs appended so far.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of commands appended so far.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Returns the inputs appended so far.
    pub fn inputs(&self) -> &[CallArg] {
        &self.inputs
    }

    /// Returns the commands appended so far.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the programmable transaction built so far.
    ///
    /// The builder is not reset, so calling this twice returns equal values.
    pub fn build(&self) -> ProgrammableTransaction {
        debug!(
            inputs = self.inputs.len(),
            commands = self.commands.len(),
            "Built programmable transaction"
        );
        ProgrammableTransaction {
            inputs: self.inputs.clone(),
            commands: self.commands.clone(),
        }
    }

    /// Consumes the builder, returning the programmable transaction.
    pub fn finish(self) -> ProgrammableTransaction {
        debug!(
            inputs = self.inputs.len(),
            commands = self.commands.len(),
            "Finished programmable transaction"
        );
        ProgrammableTransaction {
            inputs: self.inputs,
            commands: self.commands,
        }
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Appends raw pure bytes as an input.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::LimitExceeded`] if the bytes exceed the pure
    /// argument size limit or the input list is full.
    pub fn input(&mut self, bytes: Vec<u8>) -> SuiResult<Argument> {
        if bytes.len() > self.limits.max_pure_argument_size {
            return Err(self.limit_exceeded(
                format!("pure argument of {} bytes", bytes.len()),
                self.limits.max_pure_argument_size,
            ));
        }
        self.push_input(CallArg::Pure(bytes))
    }

    /// BCS-encodes any serializable value and appends it as a pure input.
    ///
    /// The caller is responsible for the value's encoding matching the
    /// parameter type it will be passed to.
    pub fn pure<T: Serialize + ?Sized>(&mut self, value: &T) -> SuiResult<Argument> {
        let bytes = bcs::to_bytes(value).map_err(SuiError::bcs)?;
        self.input(bytes)
    }

    /// Encodes `value` as `type_tag` and appends it as a pure input.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::PureEncoding`] if the type is not pure or the
    /// value does not fit it.
    pub fn pure_value(&mut self, type_tag: &TypeTag, value: &PureValue) -> SuiResult<Argument> {
        let bytes = encode_pure_value(type_tag, value)?;
        self.input(bytes)
    }

    /// Appends an object input.
    pub fn object(&mut self, object: ObjectArg) -> SuiResult<Argument> {
        self.push_input(CallArg::Object(object))
    }

    fn push_input(&mut self, arg: CallArg) -> SuiResult<Argument> {
        let index = self.next_index(self.inputs.len(), self.limits.max_inputs, "inputs")?;
        match &arg {
            CallArg::Pure(bytes) => {
                debug!(index, kind = "pure", size = bytes.len(), "Appended input")
            }
            CallArg::Object(object) => {
                debug!(index, kind = "object", id = %object.id(), "Appended input")
            }
        }
        self.inputs.push(arg);
        Ok(Argument::Input(index))
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Appends any command, returning `Result(index)`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::BuilderNotValid`] if a required list is empty, an
    /// input index is out of range, or a result refers to this command or a
    /// later one; and [`SuiError::LimitExceeded`] for limit violations.
    pub fn command(&mut self, command: Command) -> SuiResult<Argument> {
        let index = self.next_index(self.commands.len(), self.limits.max_commands, "commands")?;
        self.validate_command(&command)?;
        debug!(index, kind = command.kind_name(), "Appended command");
        self.commands.push(command);
        Ok(Argument::Result(index))
    }

    /// Appends a move call, returning its result.
    pub fn move_call(&mut self, call: MoveCallBuilder) -> SuiResult<Argument> {
        let call = call.build()?;
        self.command(Command::MoveCall(Box::new(call)))
    }

    /// Appends a move call with a declared number of return values,
    /// returning one `NestedResult` per return value.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::BuilderNotValid`] naming the `returns` field if the
    /// call does not declare its return count.
    pub fn move_call_with_returns(&mut self, call: MoveCallBuilder) -> SuiResult<Vec<Argument>> {
        let returns = call.declared_returns().ok_or_else(|| {
            SuiError::builder(
                "move_call",
                "returns",
                "return count must be declared with `returns`",
            )
        })?;
        let result = self.move_call(call)?;
        Ok(nested_results(result, returns))
    }

    /// Appends a move call from typed parts.
    pub fn programmable_move_call(
        &mut self,
        package: ObjectId,
        module: Identifier,
        function: Identifier,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> SuiResult<Argument> {
        self.command(Command::MoveCall(Box::new(ProgrammableMoveCall {
            package,
            module,
            function,
            type_arguments,
            arguments,
        })))
    }

    /// Transfers `objects` to `recipient`.
    pub fn transfer_objects(
        &mut self,
        objects: Vec<Argument>,
        recipient: Argument,
    ) -> SuiResult<Argument> {
        self.command(Command::TransferObjects(objects, recipient))
    }

    /// Splits `amounts` off `coin`, returning the command result.
    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<Argument>) -> SuiResult<Argument> {
        self.command(Command::SplitCoins(coin, amounts))
    }

    /// Splits `amounts` off `coin`, returning one `NestedResult` per new coin.
    pub fn split_coins_into(
        &mut self,
        coin: Argument,
        amounts: Vec<Argument>,
    ) -> SuiResult<Vec<Argument>> {
        let count = amounts.len();
        let result = self.split_coins(coin, amounts)?;
        // The amounts list has already been checked against max_arguments.
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        Ok(nested_results(result, count))
    }

    /// Merges `sources` into `target`.
    pub fn merge_coins(&mut self, target: Argument, sources: Vec<Argument>) -> SuiResult<Argument> {
        self.command(Command::MergeCoins(target, sources))
    }

    /// Publishes `modules`, returning the upgrade capability.
    pub fn publish(
        &mut self,
        modules: Vec<Vec<u8>>,
        dependencies: Vec<ObjectId>,
    ) -> SuiResult<Argument> {
        self.command(Command::Publish(modules, dependencies))
    }

    /// Builds a vector from `elements`.
    ///
    /// `element_type` is required when `elements` is empty.
    pub fn make_move_vec(
        &mut self,
        element_type: Option<TypeTag>,
        elements: Vec<Argument>,
    ) -> SuiResult<Argument> {
        self.command(Command::MakeMoveVec(element_type, elements))
    }

    /// Upgrades `package`, returning the upgrade receipt.
    pub fn upgrade(
        &mut self,
        modules: Vec<Vec<u8>>,
        dependencies: Vec<ObjectId>,
        package: ObjectId,
        ticket: Argument,
    ) -> SuiResult<Argument> {
        self.command(Command::Upgrade(modules, dependencies, package, ticket))
    }

    // ------------------------------------------------------------------
    // Compositions
    // ------------------------------------------------------------------

    /// Sends SUI from the gas coin to `recipient`.
    ///
    /// With an amount, that amount is split off the gas coin and transferred.
    /// Without one, the whole gas coin is transferred.
    pub fn transfer_sui(&mut self, recipient: SuiAddress, amount: Option<u64>) -> SuiResult<()> {
        self.atomically(|ptb| {
            let recipient = ptb.pure(&recipient)?;
            let coin = match amount {
                Some(amount) => {
                    let amount = ptb.pure(&amount)?;
                    ptb.split_coins(Argument::GasCoin, vec![amount])?
                }
                None => Argument::GasCoin,
            };
            ptb.transfer_objects(vec![coin], recipient)?;
            Ok(())
        })
    }

    /// Pays each recipient the matching amount, split off the gas coin.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::BuilderNotValid`] if the lists are empty or have
    /// different lengths.
    pub fn pay_sui(&mut self, recipients: Vec<SuiAddress>, amounts: Vec<u64>) -> SuiResult<()> {
        if recipients.is_empty() {
            return Err(SuiError::builder("pay_sui", "recipients", "must not be empty"));
        }
        if recipients.len() != amounts.len() {
            return Err(SuiError::builder(
                "pay_sui",
                "amounts",
                format!(
                    "{} amounts for {} recipients",
                    amounts.len(),
                    recipients.len()
                ),
            ));
        }
        self.atomically(|ptb| {
            let amounts = amounts
                .iter()
                .map(|amount| ptb.pure(amount))
                .collect::<SuiResult<Vec<_>>>()?;
            let coins = ptb.split_coins_into(Argument::GasCoin, amounts)?;
            for (recipient, coin) in recipients.iter().zip(coins) {
                let recipient = ptb.pure(recipient)?;
                ptb.transfer_objects(vec![coin], recipient)?;
            }
            Ok(())
        })
    }

    // Rolls back everything `f` appended if it fails.
    fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> SuiResult<T>) -> SuiResult<T> {
        let (inputs, commands) = (self.inputs.len(), self.commands.len());
        let result = f(self);
        if result.is_err() {
            self.inputs.truncate(inputs);
            self.commands.truncate(commands);
        }
        result
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    fn next_index(&self, len: usize, limit: usize, what: &str) -> SuiResult<u16> {
        if len >= limit {
            return Err(self.limit_exceeded(what.to_string(), limit));
        }
        u16::try_from(len)
            .map_err(|_| self.limit_exceeded(what.to_string(), usize::from(u16::MAX) + 1))
    }

    fn limit_exceeded(&self, what: String, limit: usize) -> SuiError {
        warn!(what = %what, limit, "Builder limit exceeded");
        SuiError::LimitExceeded { what, limit }
    }

    fn validate_command(&self, command: &Command) -> SuiResult<()> {
        let kind = command.kind_name();
        match command {
            Command::MoveCall(call) => {
                if call.type_arguments.len() > self.limits.max_type_arguments {
                    return Err(self.limit_exceeded(
                        format!("{} type arguments", call.type_arguments.len()),
                        self.limits.max_type_arguments,
                    ));
                }
                for type_argument in &call.type_arguments {
                    self.check_type_depth(type_argument)?;
                }
            }
            Command::TransferObjects(objects, _) => {
                if objects.is_empty() {
                    return Err(SuiError::builder(kind, "objects", "must not be empty"));
                }
            }
            Command::SplitCoins(_, amounts) => {
                if amounts.is_empty() {
                    return Err(SuiError::builder(kind, "amounts", "must not be empty"));
                }
            }
            Command::MergeCoins(_, sources) => {
                if sources.is_empty() {
                    return Err(SuiError::builder(kind, "sources", "must not be empty"));
                }
            }
            Command::Publish(modules, _) | Command::Upgrade(modules, ..) => {
                if modules.is_empty() {
                    return Err(SuiError::builder(kind, "modules", "must not be empty"));
                }
                if modules.len() > self.limits.max_publish_modules {
                    return Err(self.limit_exceeded(
                        format!("{} modules", modules.len()),
                        self.limits.max_publish_modules,
                    ));
                }
            }
            Command::MakeMoveVec(element_type, elements) => match element_type {
                Some(tag) => self.check_type_depth(tag)?,
                None if elements.is_empty() => {
                    return Err(SuiError::builder(
                        kind,
                        "type",
                        "an element type is required for an empty vector",
                    ));
                }
                None => {}
            },
        }

        let arguments = command.arguments();
        if arguments.len() > self.limits.max_arguments {
            return Err(self.limit_exceeded(
                format!("{} arguments to {kind}", arguments.len()),
                self.limits.max_arguments,
            ));
        }
        for argument in arguments {
            self.check_argument(kind, argument)?;
        }
        Ok(())
    }

    fn check_type_depth(&self, tag: &TypeTag) -> SuiResult<()> {
        let depth = tag.depth();
        if depth > self.limits.max_type_argument_depth {
            return Err(self.limit_exceeded(
                format!("type argument depth {depth}"),
                self.limits.max_type_argument_depth,
            ));
        }
        Ok(())
    }

    fn check_argument(&self, kind: &'static str, argument: &Argument) -> SuiResult<()> {
        match *argument {
            Argument::GasCoin => Ok(()),
            Argument::Input(i) if usize::from(i) < self.inputs.len() => Ok(()),
            Argument::Input(i) => Err(SuiError::builder(
                kind,
                "arguments",
                format!("Input({i}) out of range ({} inputs)", self.inputs.len()),
            )),
            Argument::Result(i) | Argument::NestedResult(i, _)
                if usize::from(i) < self.commands.len() =>
            {
                Ok(())
            }
            Argument::Result(_) | Argument::NestedResult(..) => Err(SuiError::builder(
                kind,
                "arguments",
                format!(
                    "{argument} refers to command {} or later",
                    self.commands.len()
                ),
            )),
        }
    }
}

fn nested_results(result: Argument, count: u16) -> Vec<Argument> {
    (0..count).filter_map(|i| result.nested(i)).collect()
}
