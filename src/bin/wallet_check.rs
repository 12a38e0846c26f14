use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wallet_checker::{
    client::{HttpWalletSource, WalletChecker},
    core::models::WalletView,
    to_checksum_address,
};

/// Check an EVM wallet against a running wallet-checker server.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Wallet address (0x-prefixed, 40 hex digits)
    address: String,

    /// Base URL of the wallet-checker server
    #[arg(long, env = "WALLET_API_URL", default_value = "http://localhost:5000")]
    server_url: String,

    /// Give up on each request after this many seconds
    #[arg(long, env = "WALLET_API_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// List tokens and NFTs, not just their counts
    #[arg(long)]
    details: bool,

    /// Print the merged wallet view as JSON
    #[arg(long, conflicts_with = "details")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let source = HttpWalletSource::new(&args.server_url, args.timeout_secs.map(Duration::from_secs))?;
    let checker = WalletChecker::new(source);

    let wallet = match checker.check(&args.address).await {
        Ok(wallet) => wallet,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&wallet)?);
    } else {
        let address = to_checksum_address(&args.address).unwrap_or(args.address);
        print_wallet(&address, &wallet, args.details);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_wallet(address: &str, wallet: &WalletView, details: bool) {
    println!("Wallet: {address}");
    println!("Tokens: {}", wallet.token_count);
    if details {
        for token in &wallet.tokens {
            let name = token.name.as_deref().unwrap_or("Unnamed token");
            println!("  {} ({})", name, token.symbol.as_deref().unwrap_or("?"));
        }
    }
    println!("NFTs: {}", wallet.nft_count);
    if details {
        for nft in &wallet.nfts {
            println!("  {} (ID: {})", nft.name, nft.token_ids.join(", "));
        }
    }
    println!("Contract interactions: {}", wallet.contract_interactions);
    println!("Transactions: {}", wallet.transaction_count);
}
