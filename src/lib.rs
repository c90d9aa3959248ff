//! ironseed - 单助记词多链密钥派生
//!
//! 助记词 -> BIP39 种子 -> BIP32 / SLIP-0010 派生 -> 各链私钥编码 -> 地址

pub mod chains;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// 重新导出常用类型
pub use error::{ErrorKind, WalletError, WalletResult};

// 统一模块导出
pub mod prelude {
    pub use crate::{
        domain::{
            AddressDeriver, ChainId, ChainRegistry, EntropyStrength, WalletAssembler,
            WalletBundle,
        },
        error::{ErrorKind, WalletError, WalletResult},
    };
}
