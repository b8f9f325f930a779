//! Composition and signing.
//!
//! Signing takes finished [`TransactionData`], wraps it in an
//! [`IntentMessage`], hashes the BCS bytes of that message and hands the
//! 32-byte digest to an [`Account`]. The resulting [`UserSignature`] is the
//! scheme flag, the raw signature and the public key, concatenated.
//!
//! # Example
//!
//! ```rust
//! use sui_rust_sdk::account::{Account, Ed25519Account};
//! use sui_rust_sdk::transaction::{compose, sign_transaction, ProgrammableTransactionBuilder};
//! use sui_rust_sdk::types::{ObjectDigest, ObjectId, ObjectRef};
//! use sui_rust_sdk::SuiAddress;
//!
//! let account = Ed25519Account::generate();
//! let mut ptb = ProgrammableTransactionBuilder::new();
//! ptb.transfer_sui(SuiAddress::TWO, Some(1_000)).unwrap();
//!
//! let gas = ObjectRef::new(ObjectId::new([1; 32]), 7, ObjectDigest::new([9; 32]));
//! let data = compose(account.address(), vec![gas], ptb.finish(), 10_000_000, 1_000).unwrap();
//! let signature = sign_transaction(&data, &account).unwrap();
//! assert!(signature.verify_transaction(&data).is_ok());
//! ```

use super::intent::{Intent, IntentMessage, PersonalMessage};
use super::types::{ProgrammableTransaction, TransactionData, TransactionDataBuilder};
use crate::account::Account;
use crate::codec;
use crate::config::TransactionConfig;
use crate::crypto::{address_from_public_key, Blake2b256, Hasher, SignatureScheme};
use crate::error::{SuiError, SuiResult};
use crate::provider::ChainStateProvider;
use crate::types::{Digest, ObjectRef, SuiAddress};
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, info, warn};

/// Composes programmable transaction data with no expiration.
///
/// # Errors
///
/// Returns [`SuiError::Composition`] if the gas data is incomplete or out of
/// bounds (see [`TransactionDataBuilder::build`]).
pub fn compose(
    sender: SuiAddress,
    gas_payment: Vec<ObjectRef>,
    pt: ProgrammableTransaction,
    gas_budget: u64,
    gas_price: u64,
) -> SuiResult<TransactionData> {
    TransactionDataBuilder::new()
        .sender(sender)
        .gas_payment(gas_payment)
        .programmable(pt)
        .gas_budget(gas_budget)
        .gas_price(gas_price)
        .build()
}

/// Composes transaction data, fetching the gas price and payment coins from a
/// [`ChainStateProvider`].
///
/// # Errors
///
/// Returns provider errors unchanged, or [`SuiError::Composition`] if the
/// provider's coins cannot cover `gas_budget`.
pub fn compose_with_provider<P: ChainStateProvider + ?Sized>(
    provider: &P,
    sender: SuiAddress,
    pt: ProgrammableTransaction,
    gas_budget: u64,
) -> SuiResult<TransactionData> {
    compose_with_provider_and_config(provider, sender, pt, gas_budget, TransactionConfig::default())
}

/// Like [`compose_with_provider`], with an explicit configuration.
///
/// # Errors
///
/// See [`compose_with_provider`].
pub fn compose_with_provider_and_config<P: ChainStateProvider + ?Sized>(
    provider: &P,
    sender: SuiAddress,
    pt: ProgrammableTransaction,
    gas_budget: u64,
    config: TransactionConfig,
) -> SuiResult<TransactionData> {
    let gas_price = provider.reference_gas_price()?;
    let coins = provider.spendable_coins(sender, gas_budget)?;

    let total = coins
        .iter()
        .fold(0u128, |acc, coin| acc + u128::from(coin.balance));
    if total < u128::from(gas_budget) {
        let reason = format!(
            "spendable coins of {sender} total {total}, below the gas budget of {gas_budget}"
        );
        warn!(reason = %reason, "Transaction composition rejected");
        return Err(SuiError::composition(reason));
    }
    debug!(
        coins = coins.len(),
        gas_price,
        gas_budget,
        "Selected gas payment"
    );

    TransactionDataBuilder::new()
        .config(config)
        .sender(sender)
        .gas_payment(coins.into_iter().map(|coin| coin.object_ref).collect())
        .programmable(pt)
        .gas_budget(gas_budget)
        .gas_price(gas_price)
        .build()
}

/// Signs transaction data with the default hasher and configuration.
///
/// The account must be the sender or the gas owner.
///
/// # Errors
///
/// Returns [`SuiError::Composition`] if the data has no gas payment, price or
/// budget, or the account is neither sender nor gas owner. These checks run
/// before the account is asked to sign.
pub fn sign_transaction<A: Account + ?Sized>(
    data: &TransactionData,
    account: &A,
) -> SuiResult<UserSignature> {
    sign_transaction_with(data, account, Blake2b256::default(), &TransactionConfig::default())
}

/// Signs transaction data with an explicit hasher and configuration.
///
/// The configuration supplies the intent's application id.
///
/// # Errors
///
/// See [`sign_transaction`].
pub fn sign_transaction_with<A: Account + ?Sized, H: Hasher>(
    data: &TransactionData,
    account: &A,
    hasher: H,
    config: &TransactionConfig,
) -> SuiResult<UserSignature> {
    check_signable(data)?;
    let signer = account.address();
    if signer != data.sender() && signer != data.gas_owner() {
        return Err(rejected(format!(
            "signer {signer} is neither the sender nor the gas owner"
        )));
    }

    let tx_digest = data.digest()?;
    let intent = Intent::sui_transaction().with_app_id(config.app_id());
    let digest = signing_digest(hasher, intent, data)?;
    let signature = sign_digest(account, &digest)?;

    info!(
        sender = %data.sender(),
        digest = %tx_digest,
        signatures = 1,
        "Signed transaction"
    );
    Ok(signature)
}

/// Signs a sponsored transaction with both the sender and the gas sponsor.
///
/// Returns the signed transaction with the sender's signature first.
///
/// # Errors
///
/// Returns [`SuiError::Composition`] if the accounts do not match the data's
/// sender and gas owner, or the gas data is incomplete.
pub fn sign_sponsored_transaction<S: Account + ?Sized, G: Account + ?Sized>(
    data: TransactionData,
    sender: &S,
    sponsor: &G,
) -> SuiResult<SignedTransaction> {
    check_signable(&data)?;
    if sender.address() != data.sender() {
        return Err(rejected(format!(
            "{} is not the sender {}",
            sender.address(),
            data.sender()
        )));
    }
    if sponsor.address() != data.gas_owner() {
        return Err(rejected(format!(
            "{} is not the gas owner {}",
            sponsor.address(),
            data.gas_owner()
        )));
    }
    if !data.is_sponsored() {
        return Err(rejected("transaction is not sponsored".to_string()));
    }

    let tx_digest = data.digest()?;
    let digest = signing_digest(Blake2b256::default(), Intent::sui_transaction(), &data)?;
    let signatures = vec![sign_digest(sender, &digest)?, sign_digest(sponsor, &digest)?];

    info!(
        sender = %data.sender(),
        digest = %tx_digest,
        signatures = signatures.len(),
        "Signed sponsored transaction"
    );
    Ok(SignedTransaction::new(data, signatures))
}

/// Signs an arbitrary message under the personal-message intent.
///
/// # Errors
///
/// Returns an error if the account fails to sign.
pub fn sign_personal_message<A: Account + ?Sized>(
    message: &[u8],
    account: &A,
) -> SuiResult<UserSignature> {
    let digest = personal_message_digest(message)?;
    sign_digest(account, &digest)
}

/// The digest an account signs for transaction data under `intent`.
///
/// # Errors
///
/// Returns [`SuiError::Bcs`] if the data cannot be encoded.
pub fn signing_digest<H: Hasher>(
    mut hasher: H,
    intent: Intent,
    data: &TransactionData,
) -> SuiResult<Digest> {
    let bytes = codec::to_bytes(&IntentMessage::new(intent, data))?;
    hasher.update(&bytes);
    Ok(hasher.finalize())
}

fn personal_message_digest(message: &[u8]) -> SuiResult<Digest> {
    let wrapped = IntentMessage::new(
        Intent::personal_message(),
        PersonalMessage(message.to_vec()),
    );
    Ok(Blake2b256::digest(&codec::to_bytes(&wrapped)?))
}

fn sign_digest<A: Account + ?Sized>(account: &A, digest: &Digest) -> SuiResult<UserSignature> {
    let signature = account.sign(digest.as_bytes())?;
    Ok(UserSignature::new(
        account.signature_scheme(),
        signature,
        account.public_key_bytes(),
    ))
}

fn check_signable(data: &TransactionData) -> SuiResult<()> {
    let gas = data.gas_data();
    if gas.payment.is_empty() {
        return Err(rejected("gas payment is missing".to_string()));
    }
    if gas.price == 0 {
        return Err(rejected("gas price is missing".to_string()));
    }
    if gas.budget == 0 {
        return Err(rejected("gas budget is missing".to_string()));
    }
    Ok(())
}

fn rejected(reason: String) -> SuiError {
    warn!(reason = %reason, "Signing rejected");
    SuiError::Composition(reason)
}

/// A single-key signature: `flag || signature || public_key`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserSignature {
    scheme: SignatureScheme,
    signature: Vec<u8>,
    public_key: Vec<u8>,
}

impl UserSignature {
    /// Assembles a signature from its parts.
    pub fn new(scheme: SignatureScheme, signature: Vec<u8>, public_key: Vec<u8>) -> Self {
        Self {
            scheme,
            signature,
            public_key,
        }
    }

    /// Parses `flag || signature || public_key`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::UnsupportedScheme`] for schemes without a fixed
    /// layout, or [`SuiError::InvalidSignature`] if the length is wrong.
    pub fn from_bytes(bytes: &[u8]) -> SuiResult<Self> {
        let (&flag, rest) = bytes
            .split_first()
            .ok_or_else(|| SuiError::InvalidSignature("empty signature".into()))?;
        let scheme = SignatureScheme::from_flag(flag)?;
        let (sig_len, pk_len) = match scheme {
            SignatureScheme::Ed25519 => (64, 32),
            SignatureScheme::Secp256k1 | SignatureScheme::Secp256r1 => (64, 33),
            other => return Err(SuiError::UnsupportedScheme(other.flag())),
        };
        if rest.len() != sig_len + pk_len {
            return Err(SuiError::InvalidSignature(format!(
                "expected {} bytes for {scheme}, got {}",
                1 + sig_len + pk_len,
                bytes.len()
            )));
        }
        let (signature, public_key) = rest.split_at(sig_len);
        Ok(Self::new(scheme, signature.to_vec(), public_key.to_vec()))
    }

    /// Parses a base64 encoded signature.
    ///
    /// # Errors
    ///
    /// See [`UserSignature::from_bytes`].
    pub fn from_base64(encoded: &str) -> SuiResult<Self> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;
        Self::from_bytes(&bytes)
    }

    /// `flag || signature || public_key`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.signature.len() + self.public_key.len());
        out.push(self.scheme.flag());
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.public_key);
        out
    }

    /// Base64 of [`UserSignature::to_bytes`], the form submitted to the ledger.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.to_bytes())
    }

    /// The signature scheme.
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// The raw signature.
    pub fn signature_bytes(&self) -> &[u8] {
        &self.signature
    }

    /// The public key.
    pub fn public_key_bytes(&self) -> &[u8] {
        &self.public_key
    }

    /// The address of the signer.
    pub fn signer(&self) -> SuiAddress {
        address_from_public_key(self.scheme, &self.public_key)
    }

    /// Verifies this signature over a 32-byte signing digest.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::SignatureVerificationFailed`] on mismatch, or
    /// [`SuiError::UnsupportedScheme`] for schemes this crate cannot verify.
    pub fn verify_digest(&self, digest: &Digest) -> SuiResult<()> {
        match self.scheme {
            #[cfg(feature = "ed25519")]
            SignatureScheme::Ed25519 => {
                let public_key = crate::crypto::Ed25519PublicKey::from_bytes(&self.public_key)?;
                let signature = crate::crypto::Ed25519Signature::from_bytes(&self.signature)?;
                public_key.verify(digest.as_bytes(), &signature)
            }
            other => Err(SuiError::UnsupportedScheme(other.flag())),
        }
    }

    /// Verifies this signature over transaction data with the Sui intent.
    ///
    /// # Errors
    ///
    /// See [`UserSignature::verify_digest`].
    pub fn verify_transaction(&self, data: &TransactionData) -> SuiResult<()> {
        let digest = signing_digest(Blake2b256::default(), Intent::sui_transaction(), data)?;
        self.verify_digest(&digest)
    }

    /// Verifies this signature over a personal message.
    ///
    /// # Errors
    ///
    /// See [`UserSignature::verify_digest`].
    pub fn verify_personal_message(&self, message: &[u8]) -> SuiResult<()> {
        self.verify_digest(&personal_message_digest(message)?)
    }
}

impl fmt::Debug for UserSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserSignature({}, {})", self.scheme, self.to_base64())
    }
}

impl fmt::Display for UserSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Serialize for UserSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base64())
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for UserSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            UserSignature::from_base64(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = serde_bytes::ByteBuf::deserialize(deserializer)?;
            UserSignature::from_bytes(&bytes).map_err(serde::de::Error::custom)
        }
    }
}

/// Transaction data together with its signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// The signed data.
    pub data: TransactionData,
    /// Signatures, sender first.
    pub signatures: Vec<UserSignature>,
}

impl SignedTransaction {
    /// Pairs data with its signatures.
    pub fn new(data: TransactionData, signatures: Vec<UserSignature>) -> Self {
        Self { data, signatures }
    }

    /// Signs `data` with a single account.
    ///
    /// # Errors
    ///
    /// See [`sign_transaction`].
    pub fn sign<A: Account + ?Sized>(data: TransactionData, account: &A) -> SuiResult<Self> {
        let signature = sign_transaction(&data, account)?;
        Ok(Self::new(data, vec![signature]))
    }

    /// Verifies every signature, and that each signer is the sender or the gas
    /// owner.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::SignatureVerificationFailed`] on the first failure.
    pub fn verify(&self) -> SuiResult<()> {
        let digest = signing_digest(Blake2b256::default(), Intent::sui_transaction(), &self.data)?;
        for signature in &self.signatures {
            let signer = signature.signer();
            if signer != self.data.sender() && signer != self.data.gas_owner() {
                return Err(SuiError::SignatureVerificationFailed);
            }
            signature.verify_digest(&digest)?;
        }
        Ok(())
    }

    /// The payload handed to the transport: base64 transaction bytes plus
    /// base64 signatures.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Bcs`] if the data cannot be encoded.
    pub fn to_submission(&self) -> SuiResult<SubmissionPayload> {
        Ok(SubmissionPayload {
            tx_bytes: codec::to_base64(&self.data)?,
            signatures: self.signatures.iter().map(UserSignature::to_base64).collect(),
        })
    }
}

/// What a transport submits to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Base64 of the BCS transaction data.
    pub tx_bytes: String,
    /// Base64 signatures.
    pub signatures: Vec<String>,
}

impl SubmissionPayload {
    /// Renders the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Json`] if serialization fails.
    pub fn to_json(&self) -> SuiResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes the transaction data back out of the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if `tx_bytes` is not valid base64 BCS.
    pub fn transaction_data(&self) -> SuiResult<TransactionData> {
        codec::from_base64(&self.tx_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Ed25519Account;
    use crate::provider::CoinRef;
    use crate::transaction::{ProgrammableTransactionBuilder, TransactionExpiration};
    use crate::types::{ObjectDigest, ObjectId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn gas_coin(seed: u8) -> ObjectRef {
        ObjectRef::new(ObjectId::new([seed; 32]), 3, ObjectDigest::new([seed; 32]))
    }

    fn transfer() -> ProgrammableTransaction {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(SuiAddress::TWO, Some(1_000_000)).unwrap();
        ptb.finish()
    }

    struct CountingAccount {
        inner: Ed25519Account,
        calls: AtomicUsize,
    }

    impl Account for CountingAccount {
        fn address(&self) -> SuiAddress {
            self.inner.address()
        }

        fn sign(&self, message: &[u8]) -> SuiResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Account::sign(&self.inner, message)
        }

        fn public_key_bytes(&self) -> Vec<u8> {
            self.inner.public_key_bytes()
        }

        fn signature_scheme(&self) -> SignatureScheme {
            SignatureScheme::Ed25519
        }
    }

    struct FixedProvider {
        price: u64,
        coins: Vec<CoinRef>,
    }

    impl ChainStateProvider for FixedProvider {
        fn reference_gas_price(&self) -> SuiResult<u64> {
            Ok(self.price)
        }

        fn spendable_coins(&self, _owner: SuiAddress, _amount: u64) -> SuiResult<Vec<CoinRef>> {
            Ok(self.coins.clone())
        }
    }

    #[test]
    fn test_compose_defaults() {
        let data = compose(SuiAddress::ONE, vec![gas_coin(1)], transfer(), 5_000, 750).unwrap();
        assert_eq!(data.sender(), SuiAddress::ONE);
        assert_eq!(data.gas_owner(), SuiAddress::ONE);
        assert_eq!(data.gas_data().price, 750);
        assert_eq!(data.gas_data().budget, 5_000);
        assert_eq!(data.expiration(), TransactionExpiration::None);
    }

    #[test]
    fn test_signature_layout() {
        let account = Ed25519Account::generate();
        let data = compose(account.address(), vec![gas_coin(1)], transfer(), 5_000, 750).unwrap();
        let signature = sign_transaction(&data, &account).unwrap();

        let bytes = signature.to_bytes();
        assert_eq!(bytes.len(), 97);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(&bytes[65..], &account.public_key().to_bytes());
        assert_eq!(signature.signer(), account.address());
        assert!(signature.verify_transaction(&data).is_ok());

        let parsed = UserSignature::from_base64(&signature.to_base64()).unwrap();
        assert_eq!(parsed, signature);
    }

    #[test]
    fn test_signing_digest_hashes_intent_message() {
        let data = compose(SuiAddress::ONE, vec![gas_coin(1)], transfer(), 5_000, 750).unwrap();
        let mut expected = vec![0u8, 0, 0];
        expected.extend_from_slice(&data.to_bytes().unwrap());
        assert_eq!(
            signing_digest(Blake2b256::default(), Intent::sui_transaction(), &data).unwrap(),
            Blake2b256::digest(&expected)
        );
    }

    #[test]
    fn test_missing_gas_aborts_before_signing() {
        let account = CountingAccount {
            inner: Ed25519Account::generate(),
            calls: AtomicUsize::new(0),
        };
        let data = compose(account.address(), vec![gas_coin(1)], transfer(), 5_000, 750).unwrap();

        let mut no_price = data.clone();
        let TransactionData::V1(v1) = &mut no_price;
        v1.gas_data.price = 0;
        let err = sign_transaction(&no_price, &account).unwrap_err();
        assert!(err.is_composition_error());

        let mut no_payment = data;
        let TransactionData::V1(v1) = &mut no_payment;
        v1.gas_data.payment.clear();
        assert!(sign_transaction(&no_payment, &account).is_err());

        assert_eq!(account.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_stranger_cannot_sign() {
        let data = compose(SuiAddress::ONE, vec![gas_coin(1)], transfer(), 5_000, 750).unwrap();
        let err = sign_transaction(&data, &Ed25519Account::generate()).unwrap_err();
        assert!(err.is_composition_error());
    }

    #[test]
    fn test_app_id_changes_digest() {
        use crate::transaction::AppId;

        let account = Ed25519Account::generate();
        let data = compose(account.address(), vec![gas_coin(1)], transfer(), 5_000, 750).unwrap();
        let config = TransactionConfig::default().with_app_id(AppId::Narwhal);
        let signature =
            sign_transaction_with(&data, &account, Blake2b256::default(), &config).unwrap();
        assert!(matches!(
            signature.verify_transaction(&data),
            Err(SuiError::SignatureVerificationFailed)
        ));
    }

    #[test]
    fn test_sponsored_signing() {
        let sender = Ed25519Account::generate();
        let sponsor = Ed25519Account::generate();
        let data = TransactionDataBuilder::new()
            .sender(sender.address())
            .gas_owner(sponsor.address())
            .gas_payment(vec![gas_coin(4)])
            .gas_price(1_000)
            .gas_budget(10_000)
            .programmable(transfer())
            .build()
            .unwrap();

        let signed = sign_sponsored_transaction(data.clone(), &sender, &sponsor).unwrap();
        assert_eq!(signed.signatures.len(), 2);
        assert_eq!(signed.signatures[0].signer(), sender.address());
        assert_eq!(signed.signatures[1].signer(), sponsor.address());
        assert!(signed.verify().is_ok());

        assert!(sign_sponsored_transaction(data, &sponsor, &sender).is_err());
    }

    #[test]
    fn test_personal_message() {
        let account = Ed25519Account::generate();
        let signature = sign_personal_message(b"hello", &account).unwrap();
        assert!(signature.verify_personal_message(b"hello").is_ok());
        assert!(signature.verify_personal_message(b"hullo").is_err());
    }

    #[test]
    fn test_submission_payload() {
        let account = Ed25519Account::generate();
        let data = compose(account.address(), vec![gas_coin(1)], transfer(), 5_000, 750).unwrap();
        let signed = SignedTransaction::sign(data.clone(), &account).unwrap();
        let payload = signed.to_submission().unwrap();

        assert_eq!(payload.transaction_data().unwrap(), data);
        assert_eq!(payload.signatures, vec![signed.signatures[0].to_base64()]);
        let json = payload.to_json().unwrap();
        assert!(json.starts_with("{\"txBytes\":\""));
    }

    #[test]
    fn test_user_signature_rejects_bad_input() {
        assert!(UserSignature::from_bytes(&[]).is_err());
        assert!(matches!(
            UserSignature::from_bytes(&[0x09, 1, 2]),
            Err(SuiError::UnsupportedScheme(9))
        ));
        assert!(matches!(
            UserSignature::from_bytes(&[0x03; 10]),
            Err(SuiError::UnsupportedScheme(3))
        ));
        assert!(matches!(
            UserSignature::from_bytes(&[0x00; 96]),
            Err(SuiError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_compose_with_provider() {
        let provider = FixedProvider {
            price: 990,
            coins: vec![
                CoinRef::new(gas_coin(1), 3_000),
                CoinRef::new(gas_coin(2), 3_000),
            ],
        };
        let data = compose_with_provider(&provider, SuiAddress::ONE, transfer(), 5_000).unwrap();
        assert_eq!(data.gas_data().price, 990);
        assert_eq!(data.gas_data().payment, vec![gas_coin(1), gas_coin(2)]);

        let err = compose_with_provider(&provider, SuiAddress::ONE, transfer(), 7_000).unwrap_err();
        assert!(err.is_composition_error());
    }

    #[test]
    fn test_provider_errors_propagate() {
        struct Stale;
        impl ChainStateProvider for Stale {
            fn reference_gas_price(&self) -> SuiResult<u64> {
                Ok(1_000)
            }

            fn spendable_coins(&self, _: SuiAddress, _: u64) -> SuiResult<Vec<CoinRef>> {
                Err(SuiError::stale_object("coin version moved"))
            }
        }

        let err = compose_with_provider(&Stale, SuiAddress::ONE, transfer(), 5_000).unwrap_err();
        assert!(err.requires_rebuild());
    }
}
