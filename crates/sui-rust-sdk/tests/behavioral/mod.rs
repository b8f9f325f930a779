//! Behavioral tests for the SDK.
//!
//! These exercise the public API end to end, from type strings through the
//! builder and the wire codec to signed submission payloads.

mod wire_tests {
    use proptest::prelude::*;
    use sui_rust_sdk::codec;
    use sui_rust_sdk::transaction::{Argument, CallArg, Command, ObjectArg, ProgrammableMoveCall};
    use sui_rust_sdk::types::{Identifier, ObjectDigest, ObjectId, ObjectRef, StructTag, SuiAddress, TypeTag};

    fn arb_identifier() -> impl Strategy<Value = Identifier> {
        "[a-z][a-z0-9_]{0,10}".prop_map(|s| Identifier::new(s).unwrap())
    }

    fn arb_type_tag() -> impl Strategy<Value = TypeTag> {
        let leaf = prop_oneof![
            Just(TypeTag::Bool),
            Just(TypeTag::U8),
            Just(TypeTag::U16),
            Just(TypeTag::U32),
            Just(TypeTag::U64),
            Just(TypeTag::U128),
            Just(TypeTag::U256),
            Just(TypeTag::Address),
            Just(TypeTag::Signer),
        ];
        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(TypeTag::vector),
                (
                    any::<[u8; 32]>(),
                    arb_identifier(),
                    arb_identifier(),
                    prop::collection::vec(inner, 0..3)
                )
                    .prop_map(|(address, module, name, params)| {
                        TypeTag::Struct(Box::new(StructTag::new(
                            SuiAddress::new(address),
                            module,
                            name,
                            params,
                        )))
                    }),
            ]
        })
    }

    fn arb_argument() -> impl Strategy<Value = Argument> {
        prop_oneof![
            Just(Argument::GasCoin),
            any::<u16>().prop_map(Argument::Input),
            any::<u16>().prop_map(Argument::Result),
            (any::<u16>(), any::<u16>()).prop_map(|(c, r)| Argument::NestedResult(c, r)),
        ]
    }

    fn arb_object_ref() -> impl Strategy<Value = ObjectRef> {
        (any::<[u8; 32]>(), any::<u64>(), any::<[u8; 32]>()).prop_map(|(id, version, digest)| {
            ObjectRef::new(ObjectId::new(id), version, ObjectDigest::new(digest))
        })
    }

    fn arb_object_arg() -> impl Strategy<Value = ObjectArg> {
        prop_oneof![
            arb_object_ref().prop_map(ObjectArg::ImmOrOwnedObject),
            (any::<[u8; 32]>(), any::<u64>(), any::<bool>()).prop_map(
                |(id, initial_shared_version, mutable)| ObjectArg::SharedObject {
                    id: ObjectId::new(id),
                    initial_shared_version,
                    mutable,
                }
            ),
            arb_object_ref().prop_map(ObjectArg::Receiving),
        ]
    }

    fn arb_call_arg() -> impl Strategy<Value = CallArg> {
        prop_oneof![
            prop::collection::vec(any::<u8>(), 0..64).prop_map(CallArg::Pure),
            arb_object_arg().prop_map(CallArg::Object),
        ]
    }

    fn arb_modules() -> impl Strategy<Value = Vec<Vec<u8>>> {
        prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 0..3)
    }

    fn arb_ids() -> impl Strategy<Value = Vec<ObjectId>> {
        prop::collection::vec(any::<[u8; 32]>().prop_map(ObjectId::new), 0..3)
    }

    fn arb_command() -> impl Strategy<Value = Command> {
        let args = || prop::collection::vec(arb_argument(), 0..4);
        prop_oneof![
            (
                any::<[u8; 32]>(),
                arb_identifier(),
                arb_identifier(),
                prop::collection::vec(arb_type_tag(), 0..3),
                args()
            )
                .prop_map(|(package, module, function, type_arguments, arguments)| {
                    Command::MoveCall(Box::new(ProgrammableMoveCall {
                        package: ObjectId::new(package),
                        module,
                        function,
                        type_arguments,
                        arguments,
                    }))
                }),
            (args(), arb_argument()).prop_map(|(objects, to)| Command::TransferObjects(objects, to)),
            (arb_argument(), args()).prop_map(|(coin, amounts)| Command::SplitCoins(coin, amounts)),
            (arb_argument(), args()).prop_map(|(coin, sources)| Command::MergeCoins(coin, sources)),
            (arb_modules(), arb_ids()).prop_map(|(modules, deps)| Command::Publish(modules, deps)),
            (prop::option::of(arb_type_tag()), args())
                .prop_map(|(ty, elements)| Command::MakeMoveVec(ty, elements)),
            (arb_modules(), arb_ids(), any::<[u8; 32]>(), arb_argument()).prop_map(
                |(modules, deps, package, ticket)| {
                    Command::Upgrade(modules, deps, ObjectId::new(package), ticket)
                }
            ),
        ]
    }

    proptest! {
        #[test]
        fn argument_round_trips(arg in arb_argument()) {
            let bytes = codec::to_bytes(&arg).unwrap();
            prop_assert_eq!(codec::from_bytes::<Argument>(&bytes).unwrap(), arg);
        }

        #[test]
        fn call_arg_round_trips(arg in arb_call_arg()) {
            let bytes = codec::to_bytes(&arg).unwrap();
            prop_assert_eq!(codec::from_bytes::<CallArg>(&bytes).unwrap(), arg);
        }

        #[test]
        fn object_arg_round_trips(arg in arb_object_arg()) {
            let bytes = codec::to_bytes(&arg).unwrap();
            prop_assert_eq!(codec::from_bytes::<ObjectArg>(&bytes).unwrap(), arg);
        }

        #[test]
        fn command_round_trips(command in arb_command()) {
            let bytes = codec::to_bytes(&command).unwrap();
            prop_assert_eq!(codec::from_bytes::<Command>(&bytes).unwrap(), command);
        }

        #[test]
        fn type_tag_round_trips(tag in arb_type_tag()) {
            let bytes = codec::to_bytes(&tag).unwrap();
            prop_assert_eq!(codec::from_bytes::<TypeTag>(&bytes).unwrap(), tag.clone());

            let text = tag.to_canonical_string();
            if text.len() <= 1024 {
                prop_assert_eq!(text.parse::<TypeTag>().unwrap(), tag);
            }
        }
    }

    #[test]
    fn type_tag_variant_bytes_are_stable() {
        assert_eq!(codec::to_bytes(&TypeTag::U64).unwrap(), vec![2]);
        assert_eq!(codec::to_bytes(&TypeTag::U16).unwrap(), vec![8]);
        assert_eq!(codec::to_bytes(&TypeTag::U256).unwrap(), vec![10]);
        assert_eq!(
            codec::to_bytes(&TypeTag::vector(TypeTag::U8)).unwrap(),
            vec![6, 1]
        );
    }

    #[test]
    fn argument_and_command_variant_bytes() {
        assert_eq!(codec::to_bytes(&Argument::GasCoin).unwrap(), vec![0]);
        assert_eq!(codec::to_bytes(&Argument::Input(1)).unwrap(), vec![1, 1, 0]);
        assert_eq!(
            codec::to_bytes(&Argument::NestedResult(2, 3)).unwrap(),
            vec![3, 2, 0, 3, 0]
        );
        assert_eq!(
            codec::to_bytes(&CallArg::Pure(vec![7, 8])).unwrap(),
            vec![0, 2, 7, 8]
        );
        assert_eq!(
            codec::to_bytes(&Command::MergeCoins(Argument::GasCoin, vec![])).unwrap(),
            vec![3, 0, 0]
        );
    }

    #[test]
    fn unknown_variants_are_rejected() {
        assert!(codec::from_bytes::<Argument>(&[4]).is_err());
        assert!(codec::from_bytes::<CallArg>(&[2, 0]).is_err());
        assert!(codec::from_bytes::<Command>(&[7]).is_err());
        assert!(codec::from_bytes::<TypeTag>(&[11]).is_err());
        assert!(codec::from_bytes::<TypeTag>(&[2, 0]).is_err());
    }
}

mod builder_tests {
    use proptest::prelude::*;
    use sui_rust_sdk::transaction::{
        Argument, CallArg, Command, MoveCallBuilder, ProgrammableTransactionBuilder,
    };
    use sui_rust_sdk::types::{StructTag, SuiAddress, TypeTag};
    use sui_rust_sdk::SuiError;

    #[test]
    fn split_then_transfer_scenario() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let amount = ptb.pure(&1_000_000u64).unwrap();
        let coin = ptb.split_coins(Argument::GasCoin, vec![amount]).unwrap();
        assert_eq!(coin, Argument::Result(0));
        let recipient = ptb.pure(&SuiAddress::from_hex("0xa11ce").unwrap()).unwrap();
        ptb.transfer_objects(vec![coin], recipient).unwrap();

        let pt = ptb.build();
        assert_eq!(pt.commands.len(), 2);
        assert_eq!(pt.commands[0], Command::SplitCoins(Argument::GasCoin, vec![Argument::Input(0)]));
        assert_eq!(
            pt.commands[1],
            Command::TransferObjects(vec![Argument::Result(0)], Argument::Input(1))
        );
        assert_eq!(pt.inputs.len(), 2);
        assert_eq!(pt.inputs[0], CallArg::Pure(1_000_000u64.to_le_bytes().to_vec()));
    }

    #[test]
    fn type_strings_parse() {
        assert_eq!(
            "vector<u64>".parse::<TypeTag>().unwrap(),
            TypeTag::vector(TypeTag::U64)
        );
        let TypeTag::Struct(sui) = "0x2::sui::SUI".parse::<TypeTag>().unwrap() else {
            panic!("expected a struct tag");
        };
        assert_eq!(sui.address, SuiAddress::TWO);
        assert_eq!(sui.module.as_str(), "sui");
        assert_eq!(sui.name.as_str(), "SUI");
        assert!(sui.type_params.is_empty());

        assert_eq!(
            "0x2::coin::Coin<0x2::sui::SUI>".parse::<TypeTag>().unwrap(),
            TypeTag::gas_coin()
        );
    }

    #[test]
    fn purity() {
        let custom = TypeTag::Struct(Box::new(StructTag::new(
            SuiAddress::from_hex("0x42").unwrap(),
            "pool".parse().unwrap(),
            "Pool".parse().unwrap(),
            vec![],
        )));
        assert!(!TypeTag::vector(custom).is_pure());
        assert!(TypeTag::vector(TypeTag::U64).is_pure());
        assert!("0x1::string::String".parse::<TypeTag>().unwrap().is_pure());
        assert!("0x1::ascii::String".parse::<TypeTag>().unwrap().is_pure());
        assert!("0x2::object::ID".parse::<TypeTag>().unwrap().is_pure());
        assert!(!TypeTag::gas_coin().is_pure());
    }

    #[test]
    fn two_segment_target_fails_before_append() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb
            .move_call(MoveCallBuilder::new("0x2::coin").arg(Argument::GasCoin))
            .unwrap_err();
        assert!(err.is_builder_error());
        assert!(matches!(err, SuiError::BuilderNotValid { field: "target", .. }));
        assert_eq!(ptb.command_count(), 0);
        assert_eq!(ptb.input_count(), 0);
    }

    #[test]
    fn build_is_idempotent() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(SuiAddress::TWO, Some(5)).unwrap();
        let first = ptb.build();
        let second = ptb.build();
        assert_eq!(first, second);
        assert_eq!(ptb.command_count(), 2);
    }

    #[derive(Debug, Clone)]
    enum Step {
        Pure(u64),
        Split(u8),
        SplitInto(u8),
        Merge,
        MakeVec,
    }

    fn arb_step() -> impl Strategy<Value = Step> {
        prop_oneof![
            any::<u64>().prop_map(Step::Pure),
            (1u8..4).prop_map(Step::Split),
            (1u8..4).prop_map(Step::SplitInto),
            Just(Step::Merge),
            Just(Step::MakeVec),
        ]
    }

    proptest! {
        #[test]
        fn returned_indices_are_monotonic(steps in prop::collection::vec(arb_step(), 1..24)) {
            let mut ptb = ProgrammableTransactionBuilder::new();
            let mut last_input: Option<u16> = None;
            let mut last_command: Option<u16> = None;

            for step in steps {
                let returned: Vec<Argument> = match step {
                    Step::Pure(value) => vec![ptb.pure(&value).unwrap()],
                    Step::Split(n) => {
                        let amounts = (0..n).map(|i| ptb.pure(&u64::from(i)).unwrap()).collect();
                        vec![ptb.split_coins(Argument::GasCoin, amounts).unwrap()]
                    }
                    Step::SplitInto(n) => {
                        let amounts = (0..n).map(|i| ptb.pure(&u64::from(i)).unwrap()).collect();
                        ptb.split_coins_into(Argument::GasCoin, amounts).unwrap()
                    }
                    Step::Merge => {
                        let source = ptb.pure(&0u64).unwrap();
                        vec![ptb.merge_coins(Argument::GasCoin, vec![source]).unwrap()]
                    }
                    Step::MakeVec => {
                        let element = ptb.pure(&1u8).unwrap();
                        vec![ptb.make_move_vec(Some(TypeTag::U8), vec![element]).unwrap()]
                    }
                };

                let mut command_in_step: Option<u16> = None;
                for arg in returned {
                    match arg {
                        Argument::Input(i) => {
                            prop_assert!(last_input.map_or(true, |last| i > last));
                            last_input = Some(i);
                        }
                        Argument::Result(c) | Argument::NestedResult(c, _) => {
                            match command_in_step {
                                Some(same) => prop_assert_eq!(c, same),
                                None => {
                                    prop_assert!(last_command.map_or(true, |last| c > last));
                                    command_in_step = Some(c);
                                }
                            }
                        }
                        Argument::GasCoin => prop_assert!(false, "builder returned GasCoin"),
                    }
                }
                if let Some(c) = command_in_step {
                    last_command = Some(c);
                    prop_assert_eq!(usize::from(c) + 1, ptb.command_count());
                }
            }
        }
    }
}

#[cfg(feature = "ed25519")]
mod signing_tests {
    use base64::Engine;
    use sui_rust_sdk::account::{Account, Ed25519Account};
    use sui_rust_sdk::codec;
    use sui_rust_sdk::crypto::{address_from_public_key, blake2b_256, SignatureScheme};
    use sui_rust_sdk::provider::{ChainStateProvider, CoinRef};
    use sui_rust_sdk::transaction::{
        compose, compose_with_provider, sign_transaction, ProgrammableTransactionBuilder,
        SignedTransaction, TransactionData, UserSignature,
    };
    use sui_rust_sdk::types::{ObjectDigest, ObjectId, ObjectRef, SuiAddress};
    use sui_rust_sdk::{SuiError, SuiResult};

    const SEED: &str = "0x9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    fn gas(seed: u8) -> ObjectRef {
        ObjectRef::new(ObjectId::new([seed; 32]), 42, ObjectDigest::new([seed; 32]))
    }

    fn pay(account: &Ed25519Account) -> TransactionData {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_sui(vec![SuiAddress::TWO, SuiAddress::ONE], vec![10, 20])
            .unwrap();
        compose(account.address(), vec![gas(1)], ptb.finish(), 2_000_000, 1_000).unwrap()
    }

    #[test]
    fn end_to_end_sign_and_submit() {
        let account = Ed25519Account::from_private_key_hex(SEED).unwrap();
        let data = pay(&account);
        let signed = SignedTransaction::sign(data.clone(), &account).unwrap();
        assert!(signed.verify().is_ok());

        let payload = signed.to_submission().unwrap();
        let tx_bytes = base64::engine::general_purpose::STANDARD
            .decode(&payload.tx_bytes)
            .unwrap();
        assert_eq!(tx_bytes, codec::to_bytes(&data).unwrap());
        assert_eq!(TransactionData::from_bytes(&tx_bytes).unwrap(), data);

        let signature = UserSignature::from_base64(&payload.signatures[0]).unwrap();
        assert_eq!(signature.scheme(), SignatureScheme::Ed25519);
        assert_eq!(signature.signature_bytes().len(), 64);
        assert_eq!(signature.public_key_bytes(), account.public_key_bytes().as_slice());
        assert_eq!(signature.signer(), account.address());
    }

    #[test]
    fn signing_is_deterministic() {
        let account = Ed25519Account::from_private_key_hex(SEED).unwrap();
        let data = pay(&account);
        assert_eq!(
            sign_transaction(&data, &account).unwrap(),
            sign_transaction(&data, &account).unwrap()
        );
    }

    #[test]
    fn address_matches_flag_and_key() {
        let account = Ed25519Account::from_private_key_hex(SEED).unwrap();
        let mut preimage = vec![0x00];
        preimage.extend_from_slice(&account.public_key_bytes());
        assert_eq!(account.address().to_bytes(), blake2b_256(&preimage));
        assert_eq!(
            address_from_public_key(SignatureScheme::Ed25519, &account.public_key_bytes()),
            account.address()
        );
        assert_eq!(account.address().to_string().len(), 66);
    }

    #[test]
    fn digest_changes_with_data() {
        let account = Ed25519Account::generate();
        let data = pay(&account);
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(SuiAddress::TWO, None).unwrap();
        let other = compose(account.address(), vec![gas(1)], ptb.finish(), 2_000_000, 1_000).unwrap();
        assert_ne!(data.digest().unwrap(), other.digest().unwrap());
    }

    struct StaleProvider;

    impl ChainStateProvider for StaleProvider {
        fn reference_gas_price(&self) -> SuiResult<u64> {
            Ok(750)
        }

        fn spendable_coins(&self, _: SuiAddress, _: u64) -> SuiResult<Vec<CoinRef>> {
            Err(SuiError::stale_object("0x5 was modified at version 43"))
        }
    }

    struct RichProvider;

    impl ChainStateProvider for RichProvider {
        fn reference_gas_price(&self) -> SuiResult<u64> {
            Ok(750)
        }

        fn spendable_coins(&self, _: SuiAddress, _: u64) -> SuiResult<Vec<CoinRef>> {
            Ok(vec![CoinRef::new(gas(9), 10_000_000_000)])
        }
    }

    #[test]
    fn provider_composition() {
        let account = Ed25519Account::generate();
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(SuiAddress::TWO, Some(1)).unwrap();
        let pt = ptb.finish();

        let data = compose_with_provider(&RichProvider, account.address(), pt.clone(), 3_000_000)
            .unwrap();
        assert_eq!(data.gas_data().price, 750);
        assert_eq!(data.gas_data().payment, vec![gas(9)]);

        let err = compose_with_provider(&StaleProvider, account.address(), pt, 3_000_000)
            .unwrap_err();
        assert!(err.requires_rebuild());
        assert!(!err.is_parse_error());
    }
}
