//! 多链配置模块
//!
//! 每条链一行：派生路径 + 曲线 + 私钥编码格式。
//! 表在首次访问时构建一次，进程内只读。

use std::{collections::BTreeMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{derivation_path::DerivationPath, encoding::KeyFormat},
    error::{WalletError, WalletResult},
};

/// 支持的链
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    Ethereum,
    Bitcoin,
    Solana,
    Sui,
    Aptos,
}

impl ChainId {
    pub const ALL: [ChainId; 5] = [
        ChainId::Ethereum,
        ChainId::Bitcoin,
        ChainId::Solana,
        ChainId::Sui,
        ChainId::Aptos,
    ];

    /// 小写链名，也是 bundle 中的 key
    pub fn as_str(self) -> &'static str {
        match self {
            ChainId::Ethereum => "ethereum",
            ChainId::Bitcoin => "bitcoin",
            ChainId::Solana => "solana",
            ChainId::Sui => "sui",
            ChainId::Aptos => "aptos",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ChainId::Ethereum => "ETH",
            ChainId::Bitcoin => "BTC",
            ChainId::Solana => "SOL",
            ChainId::Sui => "SUI",
            ChainId::Aptos => "APT",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = WalletError;

    /// 接受链名或符号，大小写不敏感
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ethereum" | "eth" => Ok(ChainId::Ethereum),
            "bitcoin" | "btc" => Ok(ChainId::Bitcoin),
            "solana" | "sol" => Ok(ChainId::Solana),
            "sui" => Ok(ChainId::Sui),
            "aptos" | "apt" => Ok(ChainId::Aptos),
            _ => Err(WalletError::config(format!("unsupported chain: '{}'", s))),
        }
    }
}

/// 加密曲线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// secp256k1 曲线 (Bitcoin, Ethereum)
    Secp256k1,
    /// ed25519 曲线 (Solana, Sui, Aptos)
    Ed25519,
}

/// 派生方式：曲线决定派生器，路径和格式随曲线一起携带
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDerivation {
    Secp256k1Path {
        path: DerivationPath,
        format: KeyFormat,
    },
    Ed25519Path {
        path: DerivationPath,
        format: KeyFormat,
    },
}

impl KeyDerivation {
    pub fn curve(&self) -> CurveType {
        match self {
            KeyDerivation::Secp256k1Path { .. } => CurveType::Secp256k1,
            KeyDerivation::Ed25519Path { .. } => CurveType::Ed25519,
        }
    }

    pub fn path(&self) -> &DerivationPath {
        match self {
            KeyDerivation::Secp256k1Path { path, .. } | KeyDerivation::Ed25519Path { path, .. } => {
                path
            }
        }
    }

    pub fn format(&self) -> &KeyFormat {
        match self {
            KeyDerivation::Secp256k1Path { format, .. }
            | KeyDerivation::Ed25519Path { format, .. } => format,
        }
    }
}

/// 单链密钥配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainKeySpec {
    pub chain: ChainId,
    pub derivation: KeyDerivation,
}

impl ChainKeySpec {
    pub fn secp256k1(chain: ChainId, path: DerivationPath, format: KeyFormat) -> Self {
        Self {
            chain,
            derivation: KeyDerivation::Secp256k1Path { path, format },
        }
    }

    pub fn ed25519(chain: ChainId, path: DerivationPath, format: KeyFormat) -> Self {
        Self {
            chain,
            derivation: KeyDerivation::Ed25519Path { path, format },
        }
    }

    pub fn curve(&self) -> CurveType {
        self.derivation.curve()
    }
}

static STANDARD_REGISTRY: Lazy<Result<ChainRegistry, String>> =
    Lazy::new(|| build_standard_registry().map_err(|e| e.to_string()));

fn build_standard_registry() -> WalletResult<ChainRegistry> {
    let mut registry = ChainRegistry::empty();

    // m/44'/60'/0'/0/0，地址派生方需要不带 0x 的 hex
    registry.register(ChainKeySpec::secp256k1(
        ChainId::Ethereum,
        DerivationPath::bip44(60, 0, 0, 0)?,
        KeyFormat::Hex,
    ));

    // m/44'/0'/0'/0/0，主网压缩 WIF
    registry.register(ChainKeySpec::secp256k1(
        ChainId::Bitcoin,
        DerivationPath::bip44(0, 0, 0, 0)?,
        KeyFormat::BITCOIN_WIF,
    ));

    // m/44'/501'/0'/0'
    registry.register(ChainKeySpec::ed25519(
        ChainId::Solana,
        DerivationPath::hardened_bip44(501, &[0, 0])?,
        KeyFormat::Base58,
    ));

    // m/44'/784'/0'/0'/0'，suiprivkey1...
    registry.register(ChainKeySpec::ed25519(
        ChainId::Sui,
        DerivationPath::hardened_bip44(784, &[0, 0, 0])?,
        KeyFormat::SUI_BECH32,
    ));

    // m/44'/637'/0'/0'/0'
    registry.register(ChainKeySpec::ed25519(
        ChainId::Aptos,
        DerivationPath::hardened_bip44(637, &[0, 0, 0])?,
        KeyFormat::Hex,
    ));

    registry.validate()?;
    Ok(registry)
}

/// 链注册表
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    specs: BTreeMap<ChainId, ChainKeySpec>,
}

impl ChainRegistry {
    /// 空注册表，用于自定义链组合
    pub fn empty() -> Self {
        Self {
            specs: BTreeMap::new(),
        }
    }

    /// 内置五链配置（进程级共享，首次访问时构建并校验）
    pub fn standard() -> WalletResult<&'static ChainRegistry> {
        STANDARD_REGISTRY.as_ref().map_err(|msg| {
            WalletError::config(format!("built-in chain table is invalid: {}", msg))
        })
    }

    /// 注册链配置，同一条链重复注册时后者覆盖前者
    pub fn register(&mut self, spec: ChainKeySpec) {
        self.specs.insert(spec.chain, spec);
    }

    pub fn get(&self, chain: ChainId) -> Option<&ChainKeySpec> {
        self.specs.get(&chain)
    }

    /// 通过链名或符号获取配置
    pub fn get_by_name(&self, name: &str) -> Option<&ChainKeySpec> {
        let chain = name.parse::<ChainId>().ok()?;
        self.get(chain)
    }

    /// 列出所有支持的链（按 ChainId 排序）
    pub fn list_all(&self) -> Vec<&ChainKeySpec> {
        self.specs.values().collect()
    }

    /// 按曲线类型分组获取
    pub fn list_by_curve(&self, curve: CurveType) -> Vec<&ChainKeySpec> {
        self.specs.values().filter(|s| s.curve() == curve).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// 验证配置完整性：ed25519 链必须全硬化路径，WIF/bech32 只能挂在对应曲线上
    pub fn validate_configs(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (chain, spec) in &self.specs {
            let path = spec.derivation.path();
            if path.is_empty() {
                errors.push(format!("chain {} has an empty derivation path", chain));
            }

            match (&spec.derivation, spec.derivation.format()) {
                (KeyDerivation::Ed25519Path { .. }, _) if !path.is_fully_hardened() => {
                    errors.push(format!(
                        "chain {} uses ed25519 with non-hardened path {}",
                        chain, path
                    ));
                }
                (KeyDerivation::Ed25519Path { .. }, KeyFormat::Wif { .. }) => {
                    errors.push(format!("chain {} uses WIF on an ed25519 key", chain));
                }
                (KeyDerivation::Secp256k1Path { .. }, KeyFormat::Bech32 { .. }) => {
                    errors.push(format!(
                        "chain {} uses bech32 private keys on secp256k1",
                        chain
                    ));
                }
                _ => {}
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate_configs` 的 ConfigError 形式
    pub fn validate(&self) -> WalletResult<()> {
        if self.is_empty() {
            return Err(WalletError::config("chain registry is empty"));
        }
        self.validate_configs()
            .map_err(|errors| WalletError::config(errors.join("; ")))
    }
}
