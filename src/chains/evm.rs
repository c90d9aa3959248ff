//! Ethereum / EVM 地址
//!
//! address = keccak256(uncompressed_pubkey[1..])[12..]，输出 EIP-55 校验和格式

use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};

use super::chain_error;
use crate::{
    domain::{encoding::KeyDecoder, keys::EncodedPrivateKey},
    error::WalletResult,
};

/// 十六进制私钥（可带 0x）-> 0x 校验和地址
pub fn address_from_key(key: &EncodedPrivateKey) -> WalletResult<String> {
    let raw = KeyDecoder::decode_hex(key.expose_secret()).map_err(|e| chain_error("ethereum", e))?;
    let signing_key =
        SigningKey::from_slice(raw.as_ref()).map_err(|e| chain_error("ethereum", e))?;

    let public_key = signing_key.verifying_key().to_encoded_point(false);
    // 去掉 0x04 前缀
    let hash = Keccak256::digest(&public_key.as_bytes()[1..]);

    Ok(to_checksum_address(&hash[12..]))
}

/// EIP-55
/// https://eips.ethereum.org/EIPS/eip-55
pub fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, ch) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::keys::FormatTag, error::ErrorKind};

    #[test]
    fn test_reference_address() {
        let key = EncodedPrivateKey::new(
            FormatTag::Hex,
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727".to_string(),
        );
        assert_eq!(
            address_from_key(&key).unwrap(),
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
        );
    }

    #[test]
    fn test_zero_x_prefix_is_accepted() {
        let key = EncodedPrivateKey::new(
            FormatTag::ZeroXHex,
            "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727".to_string(),
        );
        assert_eq!(
            address_from_key(&key).unwrap(),
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
        );
    }

    #[test]
    fn test_eip55_vectors() {
        // EIP-55 规范中的示例
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let bytes = hex::decode(&expected[2..].to_lowercase()).unwrap();
            assert_eq!(to_checksum_address(&bytes), expected);
        }
    }

    #[test]
    fn test_invalid_key_is_chain_error() {
        // 零不是合法 secp256k1 私钥
        let key = EncodedPrivateKey::new(FormatTag::Hex, "00".repeat(32));
        let err = address_from_key(&key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Chain);

        let key = EncodedPrivateKey::new(FormatTag::Hex, "zz".to_string());
        assert_eq!(address_from_key(&key).unwrap_err().kind(), ErrorKind::Chain);
    }
}
