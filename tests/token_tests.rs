use alloy_primitives::U256;
use ledger_amount::core::base_types::{Address, Token, TokenAmountError, TokenRecord, MAX_WIDTH};

const USDC_ADDRESS: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

#[test]
fn test_new_token() {
    let token = Token::new("USDC", 6, 256).unwrap();
    assert_eq!(token.symbol(), "USDC");
    assert_eq!(token.decimals(), 6);
    assert_eq!(token.width(), 256);
    assert_eq!(token.name(), None);
    assert!(token.address().is_none());
}

#[test]
fn test_native_eth() {
    let eth = Token::native_eth();
    assert_eq!(eth.symbol(), "ETH");
    assert_eq!(eth.decimals(), 18);
    assert_eq!(eth.width(), MAX_WIDTH);
    assert_eq!(eth.name(), Some("Ether"));
}

#[test]
fn test_empty_symbol_rejected() {
    for symbol in ["", "   "] {
        let result = Token::new(symbol, 18, 256);
        assert!(matches!(result, Err(TokenAmountError::InvalidTokenConfig(_))));
    }
}

#[test]
fn test_width_bounds() {
    assert!(matches!(Token::new("X", 0, 0), Err(TokenAmountError::InvalidTokenConfig(_))));
    assert!(matches!(Token::new("X", 0, 257), Err(TokenAmountError::InvalidTokenConfig(_))));
    assert!(Token::new("X", 0, 1).is_ok());
    assert!(Token::new("X", 0, 256).is_ok());
}

#[test]
fn test_max_magnitude() {
    assert_eq!(Token::new("X", 0, 8).unwrap().max_magnitude(), U256::from(255u64));
    assert_eq!(Token::new("X", 0, 1).unwrap().max_magnitude(), U256::from(1u64));
    assert_eq!(Token::native_eth().max_magnitude(), U256::MAX);
}

#[test]
fn test_admits() {
    let token = Token::new("X", 0, 64).unwrap();
    assert!(token.admits(&U256::from(u64::MAX)));
    assert!(!token.admits(&(U256::from(u64::MAX) + U256::from(1u64))));
}

#[test]
fn test_record_round_trip_with_static_fields() {
    let token = Token::with_decimals("USDC", 6)
        .unwrap()
        .with_name("USD Coin")
        .with_address(Address::from_string(USDC_ADDRESS).unwrap());

    let record = token.to_record();
    assert_eq!(record.symbol, "USDC");
    assert_eq!(record.decimals, 6);
    assert_eq!(record.width, 256);
    assert_eq!(record.name.as_deref(), Some("USD Coin"));
    assert_eq!(
        record.address.as_deref(),
        Some("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
    );

    let decoded = Token::from_record(&record).unwrap();
    assert_eq!(decoded, token);
    assert_eq!(decoded.to_record(), record);
}

#[test]
fn test_from_record_rejects_negative_decimals() {
    let record = TokenRecord {
        symbol: "BAD".to_string(),
        decimals: -1,
        width: 256,
        name: None,
        address: None,
    };
    assert!(matches!(
        Token::from_record(&record),
        Err(TokenAmountError::InvalidTokenConfig(_))
    ));
}

#[test]
fn test_from_record_rejects_oversized_decimals_and_width() {
    let mut record = Token::native_eth().to_record();
    record.decimals = 256;
    assert!(matches!(
        Token::from_record(&record),
        Err(TokenAmountError::InvalidTokenConfig(_))
    ));

    let mut record = Token::native_eth().to_record();
    record.width = 70_000;
    assert!(matches!(
        Token::from_record(&record),
        Err(TokenAmountError::InvalidTokenConfig(_))
    ));
}

#[test]
fn test_from_record_rejects_non_positive_width() {
    for width in [-1, 0] {
        let mut record = Token::native_eth().to_record();
        record.width = width;
        assert!(matches!(
            Token::from_record(&record),
            Err(TokenAmountError::InvalidTokenConfig(_))
        ));
    }
}

#[test]
fn test_from_record_rejects_bad_address() {
    let mut record = Token::native_eth().to_record();
    record.address = Some("0x1234".to_string());
    let err = Token::from_record(&record).unwrap_err();
    assert!(matches!(err, TokenAmountError::InvalidTokenConfig(_)));
    assert!(err.to_string().contains("42 characters"), "{}", err);
}

// ========== Address ==========

#[test]
fn test_address_checksum() {
    let addr = Address::from_string("0x742d35cc6634c0532925a3b844bc9e7595f0beb0").unwrap();
    assert_eq!(addr.checksum(), "0x742D35CC6634c0532925A3b844BC9E7595F0BEb0");
    assert_eq!(addr.checksum(), addr.alloy_address().to_checksum(None));
    assert_eq!(addr.lower(), "0x742d35cc6634c0532925a3b844bc9e7595f0beb0");
    assert_eq!(addr.to_string(), addr.checksum());
}

#[test]
fn test_address_equality_ignores_case() {
    let a = Address::from_string("0x742d35cc6634c0532925a3b844bc9e7595f0beb0").unwrap();
    let b: Address = "0x742D35CC6634C0532925A3B844BC9E7595F0BEB0".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.alloy_address(), b.alloy_address());
}

#[test]
fn test_address_validation_errors() {
    use ledger_amount::AddressError;

    assert!(matches!(
        Address::from_string("742d35cc6634c0532925a3b844bc9e7595f0beb0"),
        Err(AddressError::MissingPrefix(_))
    ));
    assert!(matches!(
        Address::from_string("0x742d35"),
        Err(AddressError::InvalidLength(8, _))
    ));
    assert!(matches!(
        Address::from_string("0xZZ2d35cc6634c0532925a3b844bc9e7595f0beb0"),
        Err(AddressError::InvalidHexCharacters(_))
    ));
}
