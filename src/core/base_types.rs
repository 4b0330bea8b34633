//! Re-exports of the core types, so callers can import them from one place.

pub use super::address::{Address, AddressError};

pub use super::token::{Token, MAX_WIDTH};

pub use super::token_amount::{TokenAmount, TokenAmountError};

pub use super::uint256::Uint256;

pub use super::record::{TokenAmountRecord, TokenRecord};
