//! Builds, composes and signs a SUI transfer, then prints the submission
//! payload a transport would send.

#![deny(unused_imports)]

use examples::{init_tracing, StaticProvider};
use sui_rust_sdk::account::Ed25519Account;
use sui_rust_sdk::transaction::{
    compose_with_provider, Argument, MoveCallBuilder, ProgrammableTransactionBuilder,
    SignedTransaction,
};
use sui_rust_sdk::SuiAddress;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let sender = Ed25519Account::generate();
    let recipient = SuiAddress::from_hex("0xa11ce")?;
    info!(sender = %sender.address(), recipient = %recipient, "Building transfer");

    let mut ptb = ProgrammableTransactionBuilder::new();
    let amount = ptb.pure(&1_000_000u64)?;
    let coin = ptb.split_coins(Argument::GasCoin, vec![amount])?;
    let value = ptb.move_call(
        MoveCallBuilder::new("0x2::coin::value")
            .type_arg("0x2::sui::SUI")
            .arg(coin),
    )?;
    let recipient_arg = ptb.pure(&recipient)?;
    ptb.transfer_objects(vec![coin], recipient_arg)?;
    info!(value = %value, commands = ptb.command_count(), "Programmable transaction ready");

    let provider = StaticProvider::new(sender.address(), 1_000, 3, 2_000_000_000);
    let data = compose_with_provider(&provider, sender.address(), ptb.finish(), 50_000_000)?;
    info!(digest = %data.digest()?, "Composed transaction data");

    let signed = SignedTransaction::sign(data, &sender)?;
    signed.verify()?;

    let payload = signed.to_submission()?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
