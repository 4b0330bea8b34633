//! Structured records used to persist and transport token amounts.
//!
//! The magnitude always travels as a decimal string so that values near the
//! 256-bit limit survive any JSON implementation. Plain JSON unsigned integers
//! up to `u64::MAX` are still accepted on input; fractional, negative, or
//! larger numbers are not.

use serde::{Deserialize, Deserializer, Serialize};

use super::token::MAX_WIDTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub symbol: String,
    /// Signed so that a negative value in foreign data surfaces as a token config error.
    pub decimals: i64,
    /// Signed for the same reason as `decimals`.
    #[serde(default = "default_width")]
    pub width: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmountRecord {
    /// Raw magnitude in base 10. On input a JSON integer is also accepted,
    /// but only up to `u64::MAX`; larger magnitudes must be strings.
    #[serde(deserialize_with = "amount_from_string_or_integer")]
    pub amount: String,
    pub token: TokenRecord,
}

fn default_width() -> i64 {
    i64::from(MAX_WIDTH)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Integer(u64),
}

fn amount_from_string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Text(s) => s,
        AmountRepr::Integer(n) => n.to_string(),
    })
}
