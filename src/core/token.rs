use alloy_primitives::U256;

use super::address::Address;
use super::record::TokenRecord;
use super::token_amount::TokenAmountError;

/// Bit width of the backing integer; no token may configure more.
pub const MAX_WIDTH: u16 = 256;

/// Currency identity: symbol, decimals, and the bit width its magnitudes must fit in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    symbol: String,
    decimals: u8,
    width: u16,
    name: Option<String>,
    address: Option<Address>,
}

impl Token {
    pub fn new(symbol: impl Into<String>, decimals: u8, width: u16) -> Result<Self, TokenAmountError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(TokenAmountError::InvalidTokenConfig(
                "symbol must not be empty".to_string(),
            ));
        }
        if width == 0 || width > MAX_WIDTH {
            return Err(TokenAmountError::InvalidTokenConfig(format!(
                "width must be between 1 and {} bits, got {}",
                MAX_WIDTH, width
            )));
        }
        Ok(Self {
            symbol,
            decimals,
            width,
            name: None,
            address: None,
        })
    }

    /// 256-bit token, the common case for ERC-20 balances.
    pub fn with_decimals(symbol: impl Into<String>, decimals: u8) -> Result<Self, TokenAmountError> {
        Self::new(symbol, decimals, MAX_WIDTH)
    }

    pub fn native_eth() -> Self {
        Self {
            symbol: "ETH".to_string(),
            decimals: 18,
            width: MAX_WIDTH,
            name: Some("Ether".to_string()),
            address: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Largest magnitude that fits in `width` bits.
    pub fn max_magnitude(&self) -> U256 {
        U256::MAX >> (usize::from(MAX_WIDTH - self.width))
    }

    /// Whether `magnitude` fits in this token's width.
    pub fn admits(&self, magnitude: &U256) -> bool {
        magnitude.bit_len() <= usize::from(self.width)
    }

    pub fn to_record(&self) -> TokenRecord {
        TokenRecord {
            symbol: self.symbol.clone(),
            decimals: i64::from(self.decimals),
            width: i64::from(self.width),
            name: self.name.clone(),
            address: self.address.as_ref().map(|a| a.checksum().to_string()),
        }
    }

    /// Rebuilds a token from its record, applying the same checks as [`Token::new`].
    pub fn from_record(record: &TokenRecord) -> Result<Self, TokenAmountError> {
        let decimals = u8::try_from(record.decimals).map_err(|_| {
            TokenAmountError::InvalidTokenConfig(format!(
                "decimals must be between 0 and {}, got {}",
                u8::MAX,
                record.decimals
            ))
        })?;
        let width = u16::try_from(record.width).map_err(|_| {
            TokenAmountError::InvalidTokenConfig(format!(
                "width must be between 1 and {} bits, got {}",
                MAX_WIDTH, record.width
            ))
        })?;

        let mut token = Self::new(record.symbol.clone(), decimals, width)?;
        token.name = record.name.clone();
        if let Some(raw) = &record.address {
            let address = Address::from_string(raw)
                .map_err(|e| TokenAmountError::InvalidTokenConfig(e.to_string()))?;
            token.address = Some(address);
        }
        Ok(token)
    }
}
