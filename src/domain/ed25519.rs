//! Ed25519 HD 派生 (SLIP-0010)
//!
//! 用于 Solana、Sui、Aptos。
//! 与 BIP32 的区别：
//! - 主密钥 HMAC key 为 "ed25519 seed"
//! - 只支持硬化派生，路径中出现非硬化段直接报 ConfigError
//! - 不存在公钥分支，子密钥总是由父私钥派生
//! - 任意 32 字节都是合法私钥，无需范围校验

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::{
    domain::{derivation_path::DerivationPath, keys::RawPrivateKey, mnemonic::SeedBytes},
    error::{WalletError, WalletResult},
};

type HmacSha512 = Hmac<Sha512>;

pub struct Ed25519Deriver;

impl Ed25519Deriver {
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// 按全硬化路径派生 32 字节私钥种子
    pub fn derive(seed: &SeedBytes, path: &DerivationPath) -> WalletResult<RawPrivateKey> {
        Self::derive_from_slice(seed.as_bytes(), path)
    }

    fn derive_from_slice(seed: &[u8], path: &DerivationPath) -> WalletResult<RawPrivateKey> {
        if let Some(segment) = path.first_non_hardened() {
            return Err(WalletError::config(format!(
                "ed25519 derivation requires every segment to be hardened, got '{}' in {}",
                segment, path
            )));
        }

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;

        // I = HMAC-SHA512(Key = c_par, Data = 0x00 || k_par || ser32(i'))
        for segment in path.segments() {
            let index = segment.child_number().to_be_bytes();
            let (child_key, child_chain) = Self::hmac_split(
                chain_code.as_slice(),
                &[&[0x00u8][..], key.as_slice(), &index[..]],
            )?;
            key = child_key;
            chain_code = child_chain;
        }

        Ok(RawPrivateKey::from_array(*key))
    }

    fn hmac_split(
        hmac_key: &[u8],
        data: &[&[u8]],
    ) -> WalletResult<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>)> {
        let mut mac = HmacSha512::new_from_slice(hmac_key)
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {}", e)))?;
        for part in data {
            mac.update(part);
        }

        let mut output = [0u8; 64];
        output.copy_from_slice(&mac.finalize().into_bytes());

        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);
        output.zeroize();

        Ok((key, chain_code))
    }
}
