//! Command-line front end for parsing and inspecting token amounts.

use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ledger_amount::core::token::MAX_WIDTH;
use ledger_amount::{Token, TokenAmount, TokenRegistry};

const TOKEN_LIST_ENV: &str = "LEDGER_AMOUNT_TOKEN_LIST";

#[derive(Parser)]
#[command(name = "ledger-amount")]
#[command(version = "0.1.0")]
#[command(about = "Exact fixed-point token amounts", long_about = None)]
struct Cli {
    /// JSON token list to load on top of the built-in tokens
    #[arg(long, global = true)]
    token_list: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a human-readable decimal amount
    Parse {
        amount: String,

        #[command(flatten)]
        token: TokenArgs,
    },

    /// Build an amount from a raw magnitude in smallest units
    Raw {
        magnitude: String,

        #[command(flatten)]
        token: TokenArgs,
    },

    /// Decode a persisted JSON amount record
    Decode { json: String },
}

#[derive(Args)]
struct TokenArgs {
    /// Symbol of a registered token
    #[arg(short, long, conflicts_with_all = ["symbol", "decimals", "width"])]
    token: Option<String>,

    /// Symbol for an ad-hoc token
    #[arg(long)]
    symbol: Option<String>,

    /// Decimals for an ad-hoc token
    #[arg(long, requires = "symbol")]
    decimals: Option<u8>,

    /// Bit width for an ad-hoc token
    #[arg(long, requires = "symbol")]
    width: Option<u16>,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = TokenRegistry::with_defaults();
    let token_list = cli
        .token_list
        .or_else(|| env::var(TOKEN_LIST_ENV).ok().map(PathBuf::from));
    if let Some(path) = token_list {
        registry.extend_from_path(&path)?;
    }

    let amount = match cli.command {
        Commands::Parse { amount, token } => {
            TokenAmount::parse(&amount, resolve_token(&registry, &token)?)?
        }
        Commands::Raw { magnitude, token } => {
            TokenAmount::from_raw_str(&magnitude, resolve_token(&registry, &token)?)?
        }
        Commands::Decode { json } => TokenAmount::from_json(&json)?,
    };

    print_amount(&amount)
}

fn resolve_token(registry: &TokenRegistry, args: &TokenArgs) -> Result<Arc<Token>, Box<dyn std::error::Error>> {
    if let Some(symbol) = &args.token {
        return Ok(registry.require(symbol)?);
    }
    match (&args.symbol, args.decimals) {
        (Some(symbol), Some(decimals)) => {
            let width = args.width.unwrap_or(MAX_WIDTH);
            Ok(Arc::new(Token::new(symbol.as_str(), decimals, width)?))
        }
        (Some(symbol), None) => Ok(registry.require(symbol)?),
        (None, _) => Ok(registry.require("ETH")?),
    }
}

fn print_amount(amount: &TokenAmount) -> Result<(), Box<dyn std::error::Error>> {
    let raw = amount.uint256();
    println!("Decimal:   {}", amount.decimal_amount());
    println!("Formatted: {}", amount.formatted_amount());
    println!("Raw:       {}", raw.as_string());
    println!("Hex:       {}", raw.to_hex());
    println!("Record:    {}", amount.to_json()?);
    Ok(())
}
