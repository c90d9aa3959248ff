//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::mnemonic::EntropyStrength;

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 钱包生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// 助记词熵长度 (128/160/192/224/256)
    pub entropy_bits: u32,
    /// bundle 输出文件
    pub output_path: PathBuf,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            entropy_bits: std::env::var("ENTROPY_BITS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(128),
            output_path: std::env::var("WALLET_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("generated_wallets.json")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl WalletConfig {
    pub fn entropy_strength(&self) -> Result<EntropyStrength> {
        EntropyStrength::from_bits(self.entropy_bits).context("Invalid ENTROPY_BITS")
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            wallet: WalletConfig::default(),
            logging: LoggingConfig::default(),
        })
    }

    /// 从配置文件加载配置，缺失的字段回落到环境变量默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        self.wallet.entropy_strength()?;

        if self.wallet.output_path.as_os_str().is_empty() {
            anyhow::bail!("WALLET_OUTPUT_PATH must not be empty");
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}
