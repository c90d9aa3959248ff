//! ironseed 主入口
//! 一个助记词生成五条链的私钥与地址

use anyhow::{Context, Result};
use ironseed::{
    config::Config,
    domain::{
        mnemonic::EntropyStrength,
        wallet_assembler::{WalletAssembler, WalletBundle},
    },
    error::WalletResult,
    infrastructure::{bundle_store, log_redact::SensitiveRedact, logging},
};

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::info!(
        entropy_bits = config.wallet.entropy_bits,
        output = %config.wallet.output_path.display(),
        "🚀 Starting ironseed"
    );

    // 唯一的错误展示边界：只记录错误类型与链标识
    match run(&config) {
        Ok(bundle) => print_addresses(&bundle, &config),
        Err(err) => {
            tracing::error!(
                kind = %err.kind(),
                chain = ?err.chain_id(),
                error = %err,
                "wallet generation failed"
            );
            std::process::exit(1);
        }
    }
}

/// .env -> 环境变量 -> CONFIG_PATH 指向的 TOML
fn load_config() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => Config::from_env_and_file(Some(path.as_str()))
            .with_context(|| format!("Failed to load config from {}", path))?,
        Err(_) => Config::from_env()?,
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run(config: &Config) -> WalletResult<WalletBundle> {
    let strength = EntropyStrength::from_bits(config.wallet.entropy_bits)?;

    let bundle = WalletAssembler::new()?.generate(strength)?;
    tracing::debug!(bundle = %bundle.redact(), "bundle ready");

    bundle_store::save_bundle(&bundle, &config.wallet.output_path)?;
    Ok(bundle)
}

/// 只输出地址，助记词和私钥仅写入文件
fn print_addresses(bundle: &WalletBundle, config: &Config) {
    println!("Generated wallets:");
    for (chain, address) in bundle.addresses() {
        println!("  {:<9} {:<4} {}", chain, chain.symbol(), address);
    }
    println!(
        "Mnemonic and private keys saved to {}",
        config.wallet.output_path.display()
    );
}
