//! 各链地址算法
//!
//! 输入为该链已编码的私钥，输出公开地址。
//! 解码或曲线运算失败统一转换为 ChainError，消息中不含密钥内容。

pub mod aptos;
pub mod bitcoin;
pub mod evm;
pub mod solana;
pub mod sui;

use crate::error::WalletError;

/// 将下层错误收敛为 ChainError
pub(crate) fn chain_error(chain: &str, err: impl std::fmt::Display) -> WalletError {
    WalletError::chain(format!("{} address derivation failed: {}", chain, err))
}

/// ed25519 公钥
pub(crate) fn ed25519_public_key(
    key: &crate::domain::keys::RawPrivateKey,
) -> ed25519_dalek::VerifyingKey {
    ed25519_dalek::SigningKey::from_bytes(key.as_bytes()).verifying_key()
}
