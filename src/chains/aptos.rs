//! Aptos 地址
//!
//! 单签 ed25519 账户：0x || hex(sha3_256(pubkey || 0x00))

use sha3::{Digest, Sha3_256};

use super::{chain_error, ed25519_public_key};
use crate::{
    domain::{encoding::KeyDecoder, keys::EncodedPrivateKey},
    error::WalletResult,
};

/// 单签 ed25519 认证方案标记
pub const ED25519_SCHEME: u8 = 0x00;

/// 私钥 hex 带不带 0x 均可
pub fn address_from_key(key: &EncodedPrivateKey) -> WalletResult<String> {
    let raw = KeyDecoder::decode_hex(key.expose_secret()).map_err(|e| chain_error("aptos", e))?;
    let public_key = ed25519_public_key(&raw);

    let mut hasher = Sha3_256::new();
    hasher.update(public_key.as_bytes());
    hasher.update([ED25519_SCHEME]);

    Ok(format!("0x{}", hex::encode(hasher.finalize())))
}
