//! Move type representations.
//!
//! [`TypeTag`] is the recursive type descriptor used for move-call type
//! arguments, `MakeMoveVec` element types and pure-value encoding.
//!
//! # Security
//!
//! The text parser enforces length and nesting limits so that untrusted
//! type strings cannot cause excessive allocation or deep recursion.

use crate::error::{SuiError, SuiResult};
use crate::types::SuiAddress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a type string accepted by the parser.
const MAX_TYPE_TAG_LENGTH: usize = 1024;

/// Maximum length of a Move identifier.
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Default maximum nesting of `vector<...>` and struct type parameters.
pub const DEFAULT_MAX_TYPE_DEPTH: usize = 16;

/// A Move identifier (module, function or struct name).
///
/// Identifiers start with an ASCII letter or underscore and contain only
/// ASCII alphanumerics and underscores. A lone `_` is not an identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new identifier, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::InvalidIdentifier`] if the string is empty, longer
    /// than 128 bytes, starts with a digit, or contains other characters.
    pub fn new(s: impl Into<String>) -> SuiResult<Self> {
        let s = s.into();
        if s.len() > MAX_IDENTIFIER_LENGTH {
            return Err(SuiError::InvalidIdentifier(format!(
                "identifier too long: {} bytes (max {})",
                s.len(),
                MAX_IDENTIFIER_LENGTH
            )));
        }
        let Some(first) = s.chars().next() else {
            return Err(SuiError::InvalidIdentifier(
                "identifier cannot be empty".into(),
            ));
        };
        if !first.is_ascii_alphabetic() && first != '_' {
            return Err(SuiError::InvalidIdentifier(format!(
                "identifier must start with a letter or underscore: '{s}'"
            )));
        }
        if s == "_" {
            return Err(SuiError::InvalidIdentifier(
                "'_' is not a valid identifier".into(),
            ));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(SuiError::InvalidIdentifier(format!(
                "identifier contains invalid characters: '{s}'"
            )));
        }
        Ok(Self(s))
    }

    // Only for compile-time known names.
    fn known(s: &'static str) -> Self {
        Self(s.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = SuiError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// A struct type: `address::module::Name<T1, ...>`.
///
/// Field order is part of the wire format.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StructTag {
    /// The address of the package declaring the struct.
    pub address: SuiAddress,
    /// The module name.
    pub module: Identifier,
    /// The struct name.
    pub name: Identifier,
    /// Generic type parameters.
    pub type_params: Vec<TypeTag>,
}

impl StructTag {
    /// Creates a new struct tag.
    pub fn new(
        address: SuiAddress,
        module: Identifier,
        name: Identifier,
        type_params: Vec<TypeTag>,
    ) -> Self {
        Self {
            address,
            module,
            name,
            type_params,
        }
    }

    /// `0x2::sui::SUI`
    pub fn sui() -> Self {
        Self::new(
            SuiAddress::TWO,
            Identifier::known("sui"),
            Identifier::known("SUI"),
            vec![],
        )
    }

    /// `0x2::coin::Coin<T>`
    pub fn coin(coin_type: TypeTag) -> Self {
        Self::new(
            SuiAddress::TWO,
            Identifier::known("coin"),
            Identifier::known("Coin"),
            vec![coin_type],
        )
    }

    /// `0x2::coin::Coin<0x2::sui::SUI>`, the type of the gas coin.
    pub fn gas_coin() -> Self {
        Self::coin(TypeTag::Struct(Box::new(Self::sui())))
    }

    /// `0x1::string::String`
    pub fn utf8_string() -> Self {
        Self::new(
            SuiAddress::ONE,
            Identifier::known("string"),
            Identifier::known("String"),
            vec![],
        )
    }

    /// `0x1::ascii::String`
    pub fn ascii_string() -> Self {
        Self::new(
            SuiAddress::ONE,
            Identifier::known("ascii"),
            Identifier::known("String"),
            vec![],
        )
    }

    /// `0x2::object::ID`
    pub fn object_id() -> Self {
        Self::new(
            SuiAddress::TWO,
            Identifier::known("object"),
            Identifier::known("ID"),
            vec![],
        )
    }

    fn is(&self, address: SuiAddress, module: &str, name: &str) -> bool {
        self.address == address
            && self.module.as_str() == module
            && self.name.as_str() == name
            && self.type_params.is_empty()
    }

    /// Returns true for `0x1::string::String`.
    pub fn is_utf8_string(&self) -> bool {
        self.is(SuiAddress::ONE, "string", "String")
    }

    /// Returns true for `0x1::ascii::String`.
    pub fn is_ascii_string(&self) -> bool {
        self.is(SuiAddress::ONE, "ascii", "String")
    }

    /// Returns true for `0x2::object::ID`.
    pub fn is_object_id(&self) -> bool {
        self.is(SuiAddress::TWO, "object", "ID")
    }

    /// Returns the form with short addresses, e.g. `0x2::coin::Coin<0x2::sui::SUI>`.
    pub fn to_short_string(&self) -> String {
        let mut out = format!(
            "{}::{}::{}",
            self.address.to_short_string(),
            self.module,
            self.name
        );
        if !self.type_params.is_empty() {
            let params: Vec<String> = self
                .type_params
                .iter()
                .map(TypeTag::to_short_string)
                .collect();
            out.push('<');
            out.push_str(&params.join(", "));
            out.push('>');
        }
        out
    }

    /// Returns the canonical Move type name: full-width addresses without
    /// `0x` and no spaces between type parameters.
    pub fn to_canonical_string(&self) -> String {
        let mut out = format!(
            "{}::{}::{}",
            hex::encode(self.address.as_bytes()),
            self.module,
            self.name
        );
        if !self.type_params.is_empty() {
            let params: Vec<String> = self
                .type_params
                .iter()
                .map(TypeTag::to_canonical_string)
                .collect();
            out.push('<');
            out.push_str(&params.join(","));
            out.push('>');
        }
        out
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if let Some((first, rest)) = self.type_params.split_first() {
            write!(f, "<{first}")?;
            for param in rest {
                write!(f, ", {param}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl FromStr for StructTag {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match TypeTag::from_str_strict(s)? {
            TypeTag::Struct(tag) => Ok(*tag),
            other => Err(SuiError::InvalidTypeTag(format!(
                "expected a struct type, got '{other}'"
            ))),
        }
    }
}

/// A Move type.
///
/// Declaration order is the wire discriminant and follows the historical
/// ordering: the 16/32/256-bit integers were added after `Struct`.
///
/// | index | variant |
/// |-------|---------|
/// | 0 | Bool |
/// | 1 | U8 |
/// | 2 | U64 |
/// | 3 | U128 |
/// | 4 | Address |
/// | 5 | Signer |
/// | 6 | Vector |
/// | 7 | Struct |
/// | 8 | U16 |
/// | 9 | U32 |
/// | 10 | U256 |
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// `bool`
    Bool,
    /// `u8`
    U8,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `address`
    Address,
    /// `signer`
    Signer,
    /// `vector<T>`
    Vector(Box<TypeTag>),
    /// A struct type
    Struct(Box<StructTag>),
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u256`
    U256,
}

impl TypeTag {
    /// Creates a vector type tag with the given element type.
    pub fn vector(element: TypeTag) -> Self {
        Self::Vector(Box::new(element))
    }

    /// Creates a struct type tag.
    pub fn struct_tag(tag: StructTag) -> Self {
        Self::Struct(Box::new(tag))
    }

    /// `0x2::coin::Coin<0x2::sui::SUI>`
    pub fn gas_coin() -> Self {
        Self::struct_tag(StructTag::gas_coin())
    }

    /// `0x2::sui::SUI`
    pub fn sui() -> Self {
        Self::struct_tag(StructTag::sui())
    }

    /// Returns true if values of this type can be passed by value as pure
    /// bytes rather than referenced as ledger objects.
    ///
    /// All primitives are pure. A vector is pure iff its element type is.
    /// Structs are pure only for `0x1::string::String`,
    /// `0x1::ascii::String` and `0x2::object::ID`.
    pub fn is_pure(&self) -> bool {
        match self {
            TypeTag::Bool
            | TypeTag::U8
            | TypeTag::U16
            | TypeTag::U32
            | TypeTag::U64
            | TypeTag::U128
            | TypeTag::U256
            | TypeTag::Address
            | TypeTag::Signer => true,
            TypeTag::Vector(inner) => inner.is_pure(),
            TypeTag::Struct(tag) => {
                tag.is_utf8_string() || tag.is_ascii_string() || tag.is_object_id()
            }
        }
    }

    /// Nesting depth: 0 for primitives, 1 + the deepest child otherwise.
    pub fn depth(&self) -> usize {
        match self {
            TypeTag::Vector(inner) => 1 + inner.depth(),
            TypeTag::Struct(tag) => {
                1 + tag.type_params.iter().map(TypeTag::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Returns the form with short addresses.
    pub fn to_short_string(&self) -> String {
        match self {
            TypeTag::Vector(inner) => format!("vector<{}>", inner.to_short_string()),
            TypeTag::Struct(tag) => tag.to_short_string(),
            primitive => primitive.to_string(),
        }
    }

    /// Returns the canonical Move type name; see [`StructTag::to_canonical_string`].
    pub fn to_canonical_string(&self) -> String {
        match self {
            TypeTag::Vector(inner) => format!("vector<{}>", inner.to_canonical_string()),
            TypeTag::Struct(tag) => tag.to_canonical_string(),
            primitive => primitive.to_string(),
        }
    }

    /// Parses a type tag from a string.
    ///
    /// Accepts primitive keywords, arbitrarily nested `vector<T>`, and struct
    /// paths `address::module::Name` with optional comma-separated generic
    /// parameters. Whitespace around tokens is ignored. Nesting deeper than
    /// [`DEFAULT_MAX_TYPE_DEPTH`] is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::InvalidTypeTag`] for unknown keywords, malformed
    /// struct paths, unbalanced angle brackets, over-long input or excessive
    /// nesting, and [`SuiError::InvalidIdentifier`] for bad module or
    /// struct names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sui_rust_sdk::TypeTag;
    ///
    /// let tag = TypeTag::from_str_strict("vector<u64>").unwrap();
    /// assert_eq!(tag, TypeTag::vector(TypeTag::U64));
    ///
    /// let coin = TypeTag::from_str_strict("0x2::coin::Coin<0x2::sui::SUI>").unwrap();
    /// assert_eq!(coin, TypeTag::gas_coin());
    /// ```
    pub fn from_str_strict(s: &str) -> SuiResult<Self> {
        Self::parse_with_max_depth(s, DEFAULT_MAX_TYPE_DEPTH)
    }

    /// Parses a type tag, rejecting nesting deeper than `max_depth`.
    pub fn parse_with_max_depth(s: &str, max_depth: usize) -> SuiResult<Self> {
        let s = s.trim();
        if s.len() > MAX_TYPE_TAG_LENGTH {
            return Err(SuiError::InvalidTypeTag(format!(
                "type tag too long: {} bytes (max {})",
                s.len(),
                MAX_TYPE_TAG_LENGTH
            )));
        }
        check_balanced(s)?;
        Self::parse_type_tag_with_depth(s, 0, max_depth)
    }

    fn parse_type_tag_with_depth(s: &str, depth: usize, max_depth: usize) -> SuiResult<Self> {
        if depth > max_depth {
            return Err(SuiError::InvalidTypeTag(format!(
                "type tag nesting too deep (max {max_depth})"
            )));
        }
        let s = s.trim();

        match s {
            "bool" => return Ok(TypeTag::Bool),
            "u8" => return Ok(TypeTag::U8),
            "u16" => return Ok(TypeTag::U16),
            "u32" => return Ok(TypeTag::U32),
            "u64" => return Ok(TypeTag::U64),
            "u128" => return Ok(TypeTag::U128),
            "u256" => return Ok(TypeTag::U256),
            "address" => return Ok(TypeTag::Address),
            "signer" => return Ok(TypeTag::Signer),
            "" => return Err(SuiError::InvalidTypeTag("empty type".into())),
            _ => {}
        }

        if let Some(rest) = s.strip_prefix("vector") {
            let rest = rest.trim_start();
            if let Some(inner) = rest.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
                let element = Self::parse_type_tag_with_depth(inner, depth + 1, max_depth)?;
                return Ok(TypeTag::vector(element));
            }
            if rest.is_empty() {
                return Err(SuiError::InvalidTypeTag(
                    "vector requires an element type: 'vector<T>'".into(),
                ));
            }
        }

        if !s.contains("::") {
            return Err(SuiError::InvalidTypeTag(format!(
                "unknown primitive type '{s}'"
            )));
        }

        Self::parse_struct_with_depth(s, depth, max_depth)
    }

    fn parse_struct_with_depth(s: &str, depth: usize, max_depth: usize) -> SuiResult<Self> {
        let (base, params) = match s.find('<') {
            Some(idx) => {
                let Some(params) = s[idx + 1..].strip_suffix('>') else {
                    return Err(SuiError::InvalidTypeTag(format!(
                        "unexpected characters after type parameters in '{s}'"
                    )));
                };
                (s[..idx].trim(), Some(params))
            }
            None => (s, None),
        };

        let segments: Vec<&str> = base.split("::").map(str::trim).collect();
        if segments.len() != 3 {
            return Err(SuiError::InvalidTypeTag(format!(
                "expected 'address::module::Name', got {} segments in '{s}'",
                segments.len()
            )));
        }

        let address = SuiAddress::from_hex(segments[0]).map_err(|e| {
            SuiError::InvalidTypeTag(format!("invalid address '{}': {e}", segments[0]))
        })?;
        let module = Identifier::new(segments[1])?;
        let name = Identifier::new(segments[2])?;

        let type_params = match params {
            Some(params) => Self::parse_type_params_with_depth(params, depth + 1, max_depth)?,
            None => vec![],
        };

        Ok(TypeTag::struct_tag(StructTag::new(
            address,
            module,
            name,
            type_params,
        )))
    }

    // Commas nested inside `<...>` do not separate parameters.
    fn parse_type_params_with_depth(
        s: &str,
        depth: usize,
        max_depth: usize,
    ) -> SuiResult<Vec<TypeTag>> {
        let mut params = Vec::new();
        let mut bracket_depth = 0usize;
        let mut start = 0;

        for (i, c) in s.char_indices() {
            match c {
                '<' => bracket_depth += 1,
                '>' => bracket_depth = bracket_depth.saturating_sub(1),
                ',' if bracket_depth == 0 => {
                    params.push(Self::parse_param(&s[start..i], depth, max_depth)?);
                    start = i + 1;
                }
                _ => {}
            }
        }
        params.push(Self::parse_param(&s[start..], depth, max_depth)?);
        Ok(params)
    }

    fn parse_param(s: &str, depth: usize, max_depth: usize) -> SuiResult<TypeTag> {
        if s.trim().is_empty() {
            return Err(SuiError::InvalidTypeTag(
                "empty type parameter".to_string(),
            ));
        }
        Self::parse_type_tag_with_depth(s, depth, max_depth)
    }
}

fn check_balanced(s: &str) -> SuiResult<()> {
    let mut open = 0usize;
    for c in s.chars() {
        match c {
            '<' => open += 1,
            '>' => {
                open = open.checked_sub(1).ok_or_else(|| {
                    SuiError::InvalidTypeTag(format!("unbalanced angle brackets in '{s}'"))
                })?;
            }
            _ => {}
        }
    }
    if open != 0 {
        return Err(SuiError::InvalidTypeTag(format!(
            "unbalanced angle brackets in '{s}'"
        )));
    }
    Ok(())
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U16 => f.write_str("u16"),
            TypeTag::U32 => f.write_str("u32"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::U128 => f.write_str("u128"),
            TypeTag::U256 => f.write_str("u256"),
            TypeTag::Address => f.write_str("address"),
            TypeTag::Signer => f.write_str("signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{inner}>"),
            TypeTag::Struct(tag) => write!(f, "{tag}"),
        }
    }
}

impl FromStr for TypeTag {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_strict(s)
    }
}

impl From<StructTag> for TypeTag {
    fn from(tag: StructTag) -> Self {
        Self::struct_tag(tag)
    }
}
