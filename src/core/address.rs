use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use sha3::{Digest, Keccak256};
use alloy_primitives::Address as AlloyAddress;

/// Token contract address, stored in EIP-55 checksummed form.
#[derive(Clone)]
pub struct Address {
    value: String,
    raw: AlloyAddress,
}

impl Address {
    pub fn from_string(s: &str) -> Result<Self, AddressError> {
        let raw = Self::validate_format(s)?;
        let checksummed = Self::to_checksum(s);
        Ok(Address { value: checksummed, raw })
    }

    fn validate_format(addr_str: &str) -> Result<AlloyAddress, AddressError> {
        if !addr_str.starts_with("0x") {
            return Err(AddressError::MissingPrefix(addr_str.to_string()));
        }
        if addr_str.len() != 42 {
            return Err(AddressError::InvalidLength(addr_str.len(), addr_str.to_string()));
        }
        let hex_part = &addr_str[2..];
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHexCharacters(addr_str.to_string()));
        }
        let addr_bytes = hex::decode(hex_part)
            .map_err(|e| AddressError::HexDecodeError(e.to_string()))?;
        if addr_bytes.len() != 20 {
            return Err(AddressError::InvalidByteLength(addr_bytes.len()));
        }
        AlloyAddress::from_str(addr_str)
            .map_err(|e| AddressError::AlloyParseError(addr_str.to_string(), e.to_string()))
    }

    /// EIP-55: uppercase each hex letter whose Keccak-256 nibble is >= 8.
    fn to_checksum(addr: &str) -> String {
        let lower = addr.to_lowercase();
        let hex_part = &lower[2..];
        let mut hasher = Keccak256::new();

        hasher.update(hex_part.as_bytes());
        let hash = hasher.finalize();
        let mut result = String::with_capacity(42);

        result.push_str("0x");
        for (i, ch) in hex_part.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 { hash_byte >> 4 } else { hash_byte & 0x0f };
            if hash_nibble >= 8 && ch.is_ascii_alphabetic() {
                result.push(ch.to_ascii_uppercase());
            } else {
                result.push(ch);
            }
        }

        result
    }

    pub fn checksum(&self) -> &str {
        &self.value
    }

    pub fn lower(&self) -> String {
        self.value.to_lowercase()
    }

    pub fn alloy_address(&self) -> AlloyAddress {
        self.raw
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(\"{}\")", self.value)
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Address {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address must start with '0x', got: {0}")]
    MissingPrefix(String),

    #[error("Address must be 42 characters (0x + 40 hex chars), got {0} characters: {1}")]
    InvalidLength(usize, String),

    #[error("Address contains invalid hex characters: {0}")]
    InvalidHexCharacters(String),

    #[error("Failed to decode address hex: {0}")]
    HexDecodeError(String),

    #[error("Address must decode to exactly 20 bytes, got {0} bytes")]
    InvalidByteLength(usize),

    #[error("Address cannot be parsed as AlloyAddress: {0} (error: {1})")]
    AlloyParseError(String, String),
}
