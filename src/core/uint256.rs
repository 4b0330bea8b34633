use std::fmt;

use alloy_primitives::U256;

/// Raw integer view of a token amount, as handed to transaction builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint256(U256);

impl Uint256 {
    pub fn new(value: U256) -> Self {
        Self(value)
    }

    /// Canonical base-10 form: no leading zeros, `"0"` for zero.
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// `0x`-prefixed lowercase hex, the encoding JSON-RPC transaction fields use.
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<U256> for Uint256 {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Uint256> for U256 {
    fn from(value: Uint256) -> Self {
        value.0
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_string_zero() {
        assert_eq!(Uint256::new(U256::ZERO).as_string(), "0");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Uint256::new(U256::from(255u64)).to_hex(), "0xff");
        assert_eq!(Uint256::new(U256::ZERO).to_hex(), "0x0");
    }

    #[test]
    fn test_as_string_max() {
        assert_eq!(
            Uint256::new(U256::MAX).as_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }
}
