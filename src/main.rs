//! Print a testnet WIF private key and address for a P-256 keypair.

use clap::Parser;
use log::{error, info};
use testnet_keys::{KeyPair, Result};

#[derive(Parser, Debug)]
#[clap(about = "Generate a P-256 keypair and print its testnet WIF and address")]
struct Cli {
    /// Hex-encoded private scalar to encode instead of a freshly generated one.
    #[clap(long)]
    secret: Option<String>,
    /// Default log filter; RUST_LOG takes precedence when set.
    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&cli.log_level));

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let keypair = match &cli.secret {
        Some(secret) => KeyPair::from_secret_hex(secret)?,
        None => {
            info!("generating a fresh P-256 keypair");
            KeyPair::generate()
        }
    };

    let public_key = keypair.public_key_bytes()?;
    let wif = keypair.wif();
    let address = keypair.address()?;

    println!("Testnet Private Key (WIF): {wif}");
    println!("Testnet Address: {address}");
    println!("Public Key (hex): {}", hex::encode(public_key.as_bytes()));
    Ok(())
}
