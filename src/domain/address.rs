//! 地址派生协作方
//!
//! 核心只负责产出编码后的私钥，地址由 `AddressDeriver` 计算。
//! 实现方只在调用期间借用私钥，不得保留。

use crate::{
    chains,
    domain::{chain_config::ChainId, keys::EncodedPrivateKey},
    error::WalletResult,
};

pub trait AddressDeriver: Send + Sync {
    /// 已编码私钥 -> 公开地址；失败返回 ChainError
    fn get_address(&self, chain: ChainId, key: &EncodedPrivateKey) -> WalletResult<String>;
}

/// 内置五链地址算法
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAddressDeriver;

impl AddressDeriver for StandardAddressDeriver {
    fn get_address(&self, chain: ChainId, key: &EncodedPrivateKey) -> WalletResult<String> {
        match chain {
            ChainId::Ethereum => chains::evm::address_from_key(key),
            ChainId::Bitcoin => chains::bitcoin::address_from_key(key),
            ChainId::Solana => chains::solana::address_from_key(key),
            ChainId::Sui => chains::sui::address_from_key(key),
            ChainId::Aptos => chains::aptos::address_from_key(key),
        }
    }
}

impl<T: AddressDeriver + ?Sized> AddressDeriver for Box<T> {
    fn get_address(&self, chain: ChainId, key: &EncodedPrivateKey) -> WalletResult<String> {
        (**self).get_address(chain, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::keys::FormatTag, error::ErrorKind};

    #[test]
    fn test_dispatches_by_chain() {
        let deriver = StandardAddressDeriver;
        let key = EncodedPrivateKey::new(
            FormatTag::Hex,
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727".to_string(),
        );

        assert_eq!(
            deriver.get_address(ChainId::Ethereum, &key).unwrap(),
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
        );

        // 同一 hex 私钥在 Aptos 下按 ed25519 处理
        let aptos = deriver.get_address(ChainId::Aptos, &key).unwrap();
        assert!(aptos.starts_with("0x"));
        assert_eq!(aptos.len(), 66);

        // hex 不是 WIF
        let err = deriver.get_address(ChainId::Bitcoin, &key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Chain);
    }

    #[test]
    fn test_boxed_deriver() {
        let deriver: Box<dyn AddressDeriver> = Box::new(StandardAddressDeriver);
        let key = EncodedPrivateKey::new(FormatTag::Hex, "01".repeat(32));
        assert!(deriver.get_address(ChainId::Ethereum, &key).is_ok());
    }
}
