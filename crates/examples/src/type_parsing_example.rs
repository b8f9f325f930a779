//! Parses Move type strings and shows their canonical forms, purity and BCS
//! bytes.

#![deny(unused_imports)]

use examples::init_tracing;
use sui_rust_sdk::codec;
use sui_rust_sdk::transaction::{encode_pure_value, PureValue};
use sui_rust_sdk::TypeTag;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let inputs = [
        "u64",
        "vector<u8>",
        "vector<vector<address>>",
        "0x1::string::String",
        "0x2::coin::Coin<0x2::sui::SUI>",
        "0x2::table::Table<address, vector<u64>>",
        "0x2::coin",
        "vector<u64",
        "u7",
    ];

    for input in inputs {
        match input.parse::<TypeTag>() {
            Ok(tag) => println!(
                "{input:<42} short={:<40} pure={:<5} bcs={}",
                tag.to_short_string(),
                tag.is_pure(),
                hex::encode(codec::to_bytes(&tag)?),
            ),
            Err(err) => warn!(input, error = %err.sanitized_message(), "Rejected type string"),
        }
    }

    let numbers = PureValue::from(vec![1u64, 2, 3]);
    let encoded = encode_pure_value(&TypeTag::from_str_strict("vector<u64>")?, &numbers)?;
    println!("vector<u64> [1, 2, 3] => {}", hex::encode(&encoded));
    Ok(())
}
