//! secp256k1 HD 派生 (BIP32)
//!
//! 用于 Ethereum、Bitcoin 等 secp256k1 链。
//! - 主密钥: I = HMAC-SHA512(Key = "Bitcoin seed", Data = seed)
//! - 硬化子密钥: I = HMAC-SHA512(c, 0x00 || ser256(k) || ser32(i))
//! - 普通子密钥: I = HMAC-SHA512(c, serP(K) || ser32(i))
//! - k_child = parse256(IL) + k mod n
//!
//! IL >= n 或结果为零时返回 DerivationError，不做任何回绕或截断。

use hmac::{Hmac, Mac};
use k256::{
    elliptic_curve::{sec1::ToEncodedPoint, Field, PrimeField},
    FieldBytes, ProjectivePoint, Scalar,
};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::{
    domain::{
        derivation_path::{DerivationPath, PathSegment},
        keys::RawPrivateKey,
        mnemonic::SeedBytes,
    },
    error::{WalletError, WalletResult},
};

type HmacSha512 = Hmac<Sha512>;

/// 扩展私钥节点
struct ExtendedNode {
    key: Scalar,
    chain_code: Zeroizing<[u8; 32]>,
}

impl Drop for ExtendedNode {
    fn drop(&mut self) {
        self.key = Scalar::ZERO;
    }
}

pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    const MASTER_SECRET: &'static [u8] = b"Bitcoin seed";

    /// 按路径派生 32 字节私钥
    pub fn derive(seed: &SeedBytes, path: &DerivationPath) -> WalletResult<RawPrivateKey> {
        let mut node = Self::master_node(seed.as_bytes(), path)?;

        for segment in path.segments() {
            node = Self::child_node(&node, *segment, path)?;
        }

        // 大端序列化，固定 32 字节（高位为零时已左补零）
        let mut bytes: [u8; 32] = node.key.to_bytes().into();
        let key = RawPrivateKey::from_be_slice(&bytes);
        bytes.zeroize();
        key
    }

    fn master_node(seed: &[u8], path: &DerivationPath) -> WalletResult<ExtendedNode> {
        let mut mac = HmacSha512::new_from_slice(Self::MASTER_SECRET)
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {}", e)))?;
        mac.update(seed);

        Self::split_node(mac, None, path)
    }

    fn child_node(
        parent: &ExtendedNode,
        segment: PathSegment,
        path: &DerivationPath,
    ) -> WalletResult<ExtendedNode> {
        let mut mac = HmacSha512::new_from_slice(parent.chain_code.as_slice())
            .map_err(|e| WalletError::derivation(format!("HMAC init failed: {}", e)))?;

        if segment.is_hardened() {
            // 0x00 || ser256(k_par)
            let mut parent_bytes: [u8; 32] = parent.key.to_bytes().into();
            mac.update(&[0x00]);
            mac.update(&parent_bytes);
            parent_bytes.zeroize();
        } else {
            // serP(point(k_par))，压缩公钥
            let public = (ProjectivePoint::GENERATOR * parent.key)
                .to_affine()
                .to_encoded_point(true);
            mac.update(public.as_bytes());
        }
        mac.update(&segment.child_number().to_be_bytes());

        Self::split_node(mac, Some(&parent.key), path)
    }

    /// 拆分 HMAC 输出为 (IL, IR)，并校验 IL 与结果标量
    fn split_node(
        mac: HmacSha512,
        parent_key: Option<&Scalar>,
        path: &DerivationPath,
    ) -> WalletResult<ExtendedNode> {
        let mut output = [0u8; 64];
        output.copy_from_slice(&mac.finalize().into_bytes());

        let mut il = [0u8; 32];
        il.copy_from_slice(&output[..32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        chain_code.copy_from_slice(&output[32..]);
        output.zeroize();

        let key = Self::child_scalar(&il, parent_key, path);
        il.zeroize();

        Ok(ExtendedNode {
            key: key?,
            chain_code,
        })
    }

    /// parse256(IL) (+ k_par) mod n
    fn child_scalar(
        il: &[u8; 32],
        parent_key: Option<&Scalar>,
        path: &DerivationPath,
    ) -> WalletResult<Scalar> {
        let il = Option::<Scalar>::from(Scalar::from_repr(*FieldBytes::from_slice(il)))
            .ok_or_else(|| {
                WalletError::derivation(format!(
                    "derived scalar is not below the curve order at {}",
                    path
                ))
            })?;

        let key = match parent_key {
            Some(parent) => il + parent,
            None => il,
        };

        if bool::from(key.is_zero()) {
            return Err(WalletError::derivation(format!(
                "derived scalar is zero at {}",
                path
            )));
        }

        Ok(key)
    }
}
