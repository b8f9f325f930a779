//! Shared helpers for the example binaries.

#![deny(unused_imports)]

use sui_rust_sdk::provider::{ChainStateProvider, CoinRef};
use sui_rust_sdk::types::{ObjectDigest, ObjectId, ObjectRef};
use sui_rust_sdk::{SuiAddress, SuiError, SuiResult};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Installs a `RUST_LOG` aware subscriber, defaulting to `info`.
pub fn init_tracing() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// A fixed set of coins owned by one address, standing in for a node.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    owner: SuiAddress,
    gas_price: u64,
    coins: Vec<CoinRef>,
}

impl StaticProvider {
    /// Creates a provider holding `count` coins of `balance` MIST for `owner`.
    pub fn new(owner: SuiAddress, gas_price: u64, count: u8, balance: u64) -> Self {
        let coins = (1..=count)
            .map(|i| {
                CoinRef::new(
                    ObjectRef::new(ObjectId::new([i; 32]), u64::from(i), ObjectDigest::new([i; 32])),
                    balance,
                )
            })
            .collect();
        Self {
            owner,
            gas_price,
            coins,
        }
    }
}

impl ChainStateProvider for StaticProvider {
    fn reference_gas_price(&self) -> SuiResult<u64> {
        Ok(self.gas_price)
    }

    fn spendable_coins(&self, owner: SuiAddress, amount: u64) -> SuiResult<Vec<CoinRef>> {
        if owner != self.owner {
            return Err(SuiError::Provider {
                message: format!("no coins for {owner}"),
                stale_object: false,
            });
        }
        let mut selected = Vec::new();
        let mut total = 0u64;
        for coin in &self.coins {
            if total >= amount {
                break;
            }
            total = total.saturating_add(coin.balance);
            selected.push(*coin);
        }
        Ok(selected)
    }
}
