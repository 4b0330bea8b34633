pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::base_types::{
    Address, AddressError, Token, TokenAmount, TokenAmountError, TokenAmountRecord, TokenRecord,
    Uint256,
};
pub use crate::core::registry::{RegistryError, TokenRegistry};
pub use crate::core::serializer::{DeterministicSerializer, SerializationError};
