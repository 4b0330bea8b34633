pub mod address;
pub mod token;
pub mod token_amount;
pub mod uint256;
pub mod record;
pub mod base_types;  // Re-exports from address, token, token_amount, uint256, and record
pub mod serializer;
pub mod registry;
