//! Shared token descriptors keyed by symbol.
//!
//! A registry hands out one `Arc<Token>` per symbol, so every amount parsed
//! through it points at the same descriptor. Lookups are case-insensitive.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use super::record::TokenRecord;
use super::token::Token;
use super::token_amount::{TokenAmount, TokenAmountError};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Token already registered: {0}")]
    DuplicateToken(String),

    #[error("Failed to read token list: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse token list: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Amount(#[from] TokenAmountError),
}

#[derive(Debug, Default, Clone)]
pub struct TokenRegistry {
    tokens: HashMap<String, Arc<Token>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .tokens
            .insert(Self::key("ETH"), Arc::new(Token::native_eth()));
        registry
    }

    /// Parses a JSON array of token records.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.extend_from_json_str(json)?;
        Ok(registry)
    }

    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.extend_from_path(path)?;
        Ok(registry)
    }

    pub fn extend_from_json_str(&mut self, json: &str) -> Result<usize, RegistryError> {
        let records: Vec<TokenRecord> = serde_json::from_str(json)?;
        let count = records.len();
        for record in &records {
            self.insert(Token::from_record(record)?)?;
        }
        Ok(count)
    }

    pub fn extend_from_path(&mut self, path: &Path) -> Result<usize, RegistryError> {
        let contents = fs::read_to_string(path)?;
        let count = self.extend_from_json_str(&contents)?;
        info!("loaded {} tokens from {}", count, path.display());
        Ok(count)
    }

    pub fn insert(&mut self, token: Token) -> Result<Arc<Token>, RegistryError> {
        let key = Self::key(token.symbol());
        if self.tokens.contains_key(&key) {
            return Err(RegistryError::DuplicateToken(token.symbol().to_string()));
        }
        debug!(
            "registering {} ({} decimals, {} bits)",
            token.symbol(),
            token.decimals(),
            token.width()
        );
        let token = Arc::new(token);
        self.tokens.insert(key, Arc::clone(&token));
        Ok(token)
    }

    pub fn get(&self, symbol: &str) -> Option<Arc<Token>> {
        self.tokens.get(&Self::key(symbol)).cloned()
    }

    pub fn require(&self, symbol: &str) -> Result<Arc<Token>, RegistryError> {
        self.get(symbol)
            .ok_or_else(|| RegistryError::UnknownToken(symbol.to_string()))
    }

    pub fn parse_amount(&self, symbol: &str, input: &str) -> Result<TokenAmount, RegistryError> {
        let token = self.require(symbol)?;
        Ok(TokenAmount::parse(input, token)?)
    }

    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.tokens.values().map(|t| t.symbol()).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn key(symbol: &str) -> String {
        symbol.to_ascii_uppercase()
    }
}
