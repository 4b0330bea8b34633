use serde_json::{Map, Value};
use sha3::{Digest, Keccak256};
use thiserror::Error;

use super::token_amount::TokenAmountError;

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Floating point numbers are not allowed in amount records: {0}")]
    FloatingPointNotAllowed(f64),

    #[error("Record does not describe a valid token amount: {0}")]
    InvalidRecord(#[from] TokenAmountError),
}

/// Canonical JSON (sorted keys, no whitespace, integers only) and its Keccak-256.
pub struct DeterministicSerializer;

impl DeterministicSerializer {
    pub fn serialize(data: &Value) -> Result<Vec<u8>, SerializationError> {
        Ok(Self::serialize_to_string(data)?.into_bytes())
    }

    pub fn serialize_to_string(data: &Value) -> Result<String, SerializationError> {
        let canonical_value = Self::canonicalize_value(data)?;
        Ok(serde_json::to_string(&canonical_value)?)
    }

    pub fn hash(data: &Value) -> Result<[u8; 32], SerializationError> {
        let canonical_bytes = Self::serialize(data)?;

        let mut hasher = Keccak256::new();
        hasher.update(&canonical_bytes);
        Ok(hasher.finalize().into())
    }

    fn canonicalize_value(value: &Value) -> Result<Value, SerializationError> {
        match value {
            Value::Object(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                let mut sorted_map = Map::new();
                for key in keys {
                    sorted_map.insert(key.clone(), Self::canonicalize_value(&map[key])?);
                }
                Ok(Value::Object(sorted_map))
            }
            Value::Array(arr) => Ok(Value::Array(
                arr.iter()
                    .map(Self::canonicalize_value)
                    .collect::<Result<_, _>>()?,
            )),
            Value::Number(n) if !n.is_i64() && !n.is_u64() => {
                Err(SerializationError::FloatingPointNotAllowed(n.as_f64().unwrap_or(f64::NAN)))
            }
            other => Ok(other.clone()),
        }
    }
}
