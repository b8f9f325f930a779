//! Chain state consumed during composition.
//!
//! The crate performs no I/O. Whatever talks to a node implements
//! [`ChainStateProvider`] and hands it to
//! [`compose_with_provider`](crate::transaction::compose_with_provider).

use crate::error::SuiResult;
use crate::types::{ObjectRef, SuiAddress};
use serde::{Deserialize, Serialize};

/// A spendable coin: its current reference and balance in MIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinRef {
    /// The coin's object reference at its current version.
    pub object_ref: ObjectRef,
    /// The coin's balance.
    pub balance: u64,
}

impl CoinRef {
    /// Creates a coin reference.
    pub fn new(object_ref: ObjectRef, balance: u64) -> Self {
        Self {
            object_ref,
            balance,
        }
    }
}

/// Fresh chain state needed to pay for a transaction.
///
/// Implementations report stale or missing objects with
/// [`SuiError::stale_object`](crate::error::SuiError::stale_object) so callers
/// know to rebuild.
pub trait ChainStateProvider {
    /// The current reference gas price, in MIST per unit.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Provider`](crate::error::SuiError::Provider) if the
    /// price cannot be fetched.
    fn reference_gas_price(&self) -> SuiResult<u64>;

    /// Coins owned by `owner` whose balances together cover at least `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Provider`](crate::error::SuiError::Provider) if the
    /// coins cannot be fetched.
    fn spendable_coins(&self, owner: SuiAddress, amount: u64) -> SuiResult<Vec<CoinRef>>;
}

impl<P: ChainStateProvider + ?Sized> ChainStateProvider for &P {
    fn reference_gas_price(&self) -> SuiResult<u64> {
        (**self).reference_gas_price()
    }

    fn spendable_coins(&self, owner: SuiAddress, amount: u64) -> SuiResult<Vec<CoinRef>> {
        (**self).spendable_coins(owner, amount)
    }
}
