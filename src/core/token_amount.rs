use std::fmt;
use std::sync::Arc;

use alloy_primitives::U256;
use log::{debug, trace};
use thiserror::Error;

use super::record::TokenAmountRecord;
use super::serializer::{DeterministicSerializer, SerializationError};
use super::token::Token;
use super::uint256::Uint256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenAmountError {
    #[error("Invalid token config: {0}")]
    InvalidTokenConfig(String),

    #[error("Invalid amount format: {0:?}")]
    InvalidAmountFormat(String),

    #[error("Fractional part has {digits} digits, but token only supports {decimals} decimals")]
    PrecisionOverflow { digits: usize, decimals: u8 },

    #[error("Amount does not fit in {width} bits")]
    MagnitudeOverflow { width: u16 },
}

/// An exact amount of a token: `magnitude / 10^decimals`.
///
/// Immutable once built. Every constructor checks that the magnitude fits
/// the token's width, so an instance in hand is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    magnitude: U256,
    token: Arc<Token>,
}

impl TokenAmount {
    pub fn new(magnitude: U256, token: impl Into<Arc<Token>>) -> Result<Self, TokenAmountError> {
        let token = token.into();
        if !token.admits(&magnitude) {
            debug!(
                "rejecting {} magnitude of {} bits (width {})",
                token.symbol(),
                magnitude.bit_len(),
                token.width()
            );
            return Err(TokenAmountError::MagnitudeOverflow { width: token.width() });
        }
        Ok(Self { magnitude, token })
    }

    pub fn zero(token: impl Into<Arc<Token>>) -> Self {
        Self {
            magnitude: U256::ZERO,
            token: token.into(),
        }
    }

    /// Raw magnitude given as base-10 digits (smallest units, no scaling).
    pub fn from_raw_str(raw: &str, token: impl Into<Arc<Token>>) -> Result<Self, TokenAmountError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TokenAmountError::InvalidAmountFormat(raw.to_string()));
        }
        let token = token.into();
        let magnitude = parse_digits(raw, token.width())?;
        Self::new(magnitude, token)
    }

    /// Decimal string (e.g. `"1.5"`) → raw units, exactly.
    ///
    /// Inputs with more fractional digits than the token's decimals are
    /// rejected with [`TokenAmountError::PrecisionOverflow`] instead of being
    /// truncated.
    pub fn parse(input: &str, token: impl Into<Arc<Token>>) -> Result<Self, TokenAmountError> {
        let token = token.into();
        let decimals = usize::from(token.decimals());

        let (integer_part, fractional_part) = match input.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (input, ""),
        };
        if fractional_part.contains('.') {
            return Err(TokenAmountError::InvalidAmountFormat(input.to_string()));
        }
        if integer_part.is_empty() && fractional_part.is_empty() {
            return Err(TokenAmountError::InvalidAmountFormat(input.to_string()));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer_part) || !all_digits(fractional_part) {
            return Err(TokenAmountError::InvalidAmountFormat(input.to_string()));
        }
        if fractional_part.len() > decimals {
            debug!(
                "rejecting {:?}: {} fractional digits for {} ({} decimals)",
                input,
                fractional_part.len(),
                token.symbol(),
                decimals
            );
            return Err(TokenAmountError::PrecisionOverflow {
                digits: fractional_part.len(),
                decimals: token.decimals(),
            });
        }

        let scaled = format!("{}{:0<width$}", integer_part, fractional_part, width = decimals);
        let magnitude = parse_digits(&scaled, token.width())?;
        trace!("parsed {:?} as {} {}", input, magnitude, token.symbol());

        Self::new(magnitude, token)
    }

    /// Rebuilds an amount from a record produced by [`TokenAmount::encode`].
    pub fn from_record(record: &TokenAmountRecord) -> Result<Self, TokenAmountError> {
        let token = Token::from_record(&record.token)?;
        Self::from_raw_str(&record.amount, token)
    }

    pub fn encode(&self) -> TokenAmountRecord {
        TokenAmountRecord {
            amount: self.magnitude.to_string(),
            token: self.token.to_record(),
        }
    }

    /// Canonical JSON of [`TokenAmount::encode`]: sorted keys, no whitespace.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        let value = serde_json::to_value(self.encode())?;
        DeterministicSerializer::serialize_to_string(&value)
    }

    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let record: TokenAmountRecord = serde_json::from_str(json)?;
        Ok(Self::from_record(&record)?)
    }

    /// Keccak-256 of the canonical JSON record.
    pub fn fingerprint(&self) -> Result<[u8; 32], SerializationError> {
        let value = serde_json::to_value(self.encode())?;
        DeterministicSerializer::hash(&value)
    }

    /// Raw → decimal string (no floats). Always shows at least one
    /// fractional digit when the token has decimals.
    pub fn decimal_amount(&self) -> String {
        let decimals = usize::from(self.token.decimals());
        let digits = format!("{:0>width$}", self.magnitude.to_string(), width = decimals + 1);
        if decimals == 0 {
            return digits;
        }

        let (integer_part, fractional_part) = digits.split_at(digits.len() - decimals);
        let integer_part = match integer_part.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let fractional_part = match fractional_part.trim_end_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        format!("{}.{}", integer_part, fractional_part)
    }

    pub fn formatted_amount(&self) -> String {
        format!("{} {}", self.decimal_amount(), self.token.symbol())
    }

    pub fn uint256(&self) -> Uint256 {
        Uint256::new(self.magnitude)
    }

    pub fn magnitude(&self) -> U256 {
        self.magnitude
    }

    pub fn token(&self) -> &Arc<Token> {
        &self.token
    }

    pub fn decimals(&self) -> u8 {
        self.token.decimals()
    }

    pub fn symbol(&self) -> &str {
        self.token.symbol()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

/// Digits are already validated; the only failure left is a value past 256 bits.
fn parse_digits(digits: &str, width: u16) -> Result<U256, TokenAmountError> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| TokenAmountError::MagnitudeOverflow { width })
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted_amount())
    }
}
