//! Transaction envelope types.

use super::{CallArg, Command};
use crate::codec;
use crate::config::TransactionConfig;
use crate::crypto::hash::{Blake2b256, Hasher};
use crate::error::{SuiError, SuiResult};
use crate::types::{ObjectRef, SuiAddress, TransactionDigest};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Domain separator hashed in front of transaction data to obtain its digest.
const TRANSACTION_DATA_SALT: &[u8] = b"TransactionData::";

/// An ordered list of inputs and the commands that consume them.
///
/// Insertion order of `inputs` defines `Argument::Input` indices; insertion
/// order of `commands` defines `Argument::Result`/`NestedResult` indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgrammableTransaction {
    /// Inputs, referenced by index.
    pub inputs: Vec<CallArg>,
    /// Commands, executed in order.
    pub commands: Vec<Command>,
}

/// The kind of a transaction.
///
/// Only user-submittable programmable transactions are modelled; other kinds
/// are produced by the system and rejected when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// A programmable transaction.
    ProgrammableTransaction(ProgrammableTransaction),
}

impl From<ProgrammableTransaction> for TransactionKind {
    fn from(pt: ProgrammableTransaction) -> Self {
        TransactionKind::ProgrammableTransaction(pt)
    }
}

/// How the transaction pays for gas. All four fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GasData {
    /// Coins used to pay for gas, merged into the first at execution.
    pub payment: Vec<ObjectRef>,
    /// Owner of the gas coins; differs from the sender when sponsored.
    pub owner: SuiAddress,
    /// Price per gas unit in MIST.
    pub price: u64,
    /// Maximum gas to spend, in MIST.
    pub budget: u64,
}

/// When the transaction stops being valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionExpiration {
    /// Valid until executed.
    #[default]
    None,
    /// Valid only up to and including this epoch.
    Epoch(u64),
}

/// The first version of transaction data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionDataV1 {
    /// What the transaction does.
    pub kind: TransactionKind,
    /// Who sends it.
    pub sender: SuiAddress,
    /// How gas is paid.
    pub gas_data: GasData,
    /// Expiration policy.
    pub expiration: TransactionExpiration,
}

/// Versioned transaction data: the value that is hashed and signed.
///
/// Built once per submission attempt from fresh chain state. If any object
/// it references has become stale, build a new one rather than modifying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionData {
    /// Version 1.
    V1(TransactionDataV1),
}

impl TransactionData {
    /// Creates V1 programmable transaction data with no expiration.
    pub fn new_programmable(
        sender: SuiAddress,
        gas_payment: Vec<ObjectRef>,
        pt: ProgrammableTransaction,
        gas_budget: u64,
        gas_price: u64,
    ) -> Self {
        TransactionData::V1(TransactionDataV1 {
            kind: pt.into(),
            sender,
            gas_data: GasData {
                payment: gas_payment,
                owner: sender,
                price: gas_price,
                budget: gas_budget,
            },
            expiration: TransactionExpiration::None,
        })
    }

    fn v1(&self) -> &TransactionDataV1 {
        match self {
            TransactionData::V1(v1) => v1,
        }
    }

    /// The transaction kind.
    pub fn kind(&self) -> &TransactionKind {
        &self.v1().kind
    }

    /// The programmable transaction carried by this data.
    pub fn programmable(&self) -> &ProgrammableTransaction {
        match self.kind() {
            TransactionKind::ProgrammableTransaction(pt) => pt,
        }
    }

    /// The sender.
    pub fn sender(&self) -> SuiAddress {
        self.v1().sender
    }

    /// The gas data.
    pub fn gas_data(&self) -> &GasData {
        &self.v1().gas_data
    }

    /// The gas owner.
    pub fn gas_owner(&self) -> SuiAddress {
        self.v1().gas_data.owner
    }

    /// Returns true if someone other than the sender pays for gas.
    pub fn is_sponsored(&self) -> bool {
        self.gas_owner() != self.sender()
    }

    /// The expiration policy.
    pub fn expiration(&self) -> TransactionExpiration {
        self.v1().expiration
    }

    /// BCS bytes of this data.
    pub fn to_bytes(&self) -> SuiResult<Vec<u8>> {
        codec::to_bytes(self)
    }

    /// Decodes transaction data from BCS bytes.
    pub fn from_bytes(bytes: &[u8]) -> SuiResult<Self> {
        codec::from_bytes(bytes)
    }

    /// The transaction digest: `Blake2b-256("TransactionData::" || bcs(self))`.
    pub fn digest(&self) -> SuiResult<TransactionDigest> {
        let mut hasher = Blake2b256::default();
        hasher.update(TRANSACTION_DATA_SALT);
        hasher.update(&self.to_bytes()?);
        Ok(TransactionDigest::from(hasher.finalize()))
    }
}

/// A builder for [`TransactionData`].
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::transaction::{ProgrammableTransactionBuilder, TransactionDataBuilder};
/// use sui_rust_sdk::types::{ObjectDigest, ObjectId, ObjectRef};
/// use sui_rust_sdk::SuiAddress;
///
/// let mut ptb = ProgrammableTransactionBuilder::new();
/// ptb.transfer_sui(SuiAddress::TWO, Some(100)).unwrap();
///
/// let gas = ObjectRef::new(ObjectId::new([1; 32]), 3, ObjectDigest::new([2; 32]));
/// let data = TransactionDataBuilder::new()
///     .sender(SuiAddress::ONE)
///     .gas_payment(vec![gas])
///     .gas_price(1_000)
///     .gas_budget(5_000_000)
///     .programmable(ptb.finish())
///     .build()
///     .unwrap();
/// assert_eq!(data.gas_owner(), SuiAddress::ONE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionDataBuilder {
    sender: Option<SuiAddress>,
    kind: Option<TransactionKind>,
    gas_payment: Option<Vec<ObjectRef>>,
    gas_owner: Option<SuiAddress>,
    gas_price: Option<u64>,
    gas_budget: Option<u64>,
    expiration: TransactionExpiration,
    config: TransactionConfig,
}

impl TransactionDataBuilder {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender.
    #[must_use]
    pub fn sender(mut self, sender: SuiAddress) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the programmable transaction.
    #[must_use]
    pub fn programmable(mut self, pt: ProgrammableTransaction) -> Self {
        self.kind = Some(pt.into());
        self
    }

    /// Sets the gas payment coins.
    #[must_use]
    pub fn gas_payment(mut self, payment: Vec<ObjectRef>) -> Self {
        self.gas_payment = Some(payment);
        self
    }

    /// Sets the gas owner. Defaults to the sender.
    #[must_use]
    pub fn gas_owner(mut self, owner: SuiAddress) -> Self {
        self.gas_owner = Some(owner);
        self
    }

    /// Sets the gas price.
    #[must_use]
    pub fn gas_price(mut self, price: u64) -> Self {
        self.gas_price = Some(price);
        self
    }

    /// Sets the gas budget.
    #[must_use]
    pub fn gas_budget(mut self, budget: u64) -> Self {
        self.gas_budget = Some(budget);
        self
    }

    /// Sets the expiration policy. Defaults to no expiration.
    #[must_use]
    pub fn expiration(mut self, expiration: TransactionExpiration) -> Self {
        self.expiration = expiration;
        self
    }

    /// Sets the configuration used to check gas limits.
    #[must_use]
    pub fn config(mut self, config: TransactionConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the transaction data.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Composition`] if:
    /// - `sender`, `programmable`, `gas_payment`, `gas_price` or `gas_budget` is missing
    /// - the payment list is empty, too long, or lists an object twice
    /// - the gas price or budget is zero
    /// - the budget exceeds the configured maximum
    ///
    /// Returns [`SuiError::LimitExceeded`] if the programmable transaction has
    /// more inputs or commands than the configured [`BuilderLimits`].
    ///
    /// [`BuilderLimits`]: crate::config::BuilderLimits
    pub fn build(self) -> SuiResult<TransactionData> {
        let sender = self.sender.ok_or_else(|| missing("sender"))?;
        let kind = self.kind.ok_or_else(|| missing("programmable transaction"))?;
        let payment = self.gas_payment.ok_or_else(|| missing("gas payment"))?;
        let price = self.gas_price.ok_or_else(|| missing("gas price"))?;
        let budget = self.gas_budget.ok_or_else(|| missing("gas budget"))?;

        let TransactionKind::ProgrammableTransaction(pt) = &kind;
        let limits = self.config.limits();
        if pt.inputs.len() > limits.max_inputs {
            return Err(over_limit(format!("{} inputs", pt.inputs.len()), limits.max_inputs));
        }
        if pt.commands.len() > limits.max_commands {
            return Err(over_limit(
                format!("{} commands", pt.commands.len()),
                limits.max_commands,
            ));
        }

        if payment.is_empty() {
            return Err(rejected("gas payment must contain at least one coin".into()));
        }
        if payment.len() > self.config.max_gas_payment_objects() {
            return Err(rejected(format!(
                "{} gas payment objects exceeds the maximum of {}",
                payment.len(),
                self.config.max_gas_payment_objects()
            )));
        }
        let mut seen = HashSet::with_capacity(payment.len());
        if let Some(dup) = payment.iter().find(|obj| !seen.insert(obj.object_id)) {
            return Err(rejected(format!(
                "gas payment lists {} more than once",
                dup.object_id
            )));
        }
        if price == 0 {
            return Err(rejected("gas price must be positive".into()));
        }
        if budget == 0 {
            return Err(rejected("gas budget must be positive".into()));
        }
        if budget > self.config.max_gas_budget() {
            return Err(rejected(format!(
                "gas budget {budget} exceeds the maximum of {}",
                self.config.max_gas_budget()
            )));
        }

        Ok(TransactionData::V1(TransactionDataV1 {
            kind,
            sender,
            gas_data: GasData {
                payment,
                owner: self.gas_owner.unwrap_or(sender),
                price,
                budget,
            },
            expiration: self.expiration,
        }))
    }
}

fn missing(field: &str) -> SuiError {
    rejected(format!("{field} is required"))
}

fn over_limit(what: String, limit: usize) -> SuiError {
    warn!(what = %what, limit, "Transaction composition rejected");
    SuiError::LimitExceeded { what, limit }
}

fn rejected(reason: String) -> SuiError {
    warn!(reason = %reason, "Transaction composition rejected");
    SuiError::Composition(reason)
}
