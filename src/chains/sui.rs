//! Sui 地址
//!
//! suiprivkey bech32 -> ed25519 公钥 -> 0x || hex(blake2b256(flag || pubkey))

use blake2::{digest::consts::U32, Blake2b, Digest};

use super::{chain_error, ed25519_public_key};
use crate::{
    domain::{
        encoding::{KeyDecoder, SUI_ED25519_FLAG, SUI_PRIVATE_KEY_HRP},
        keys::EncodedPrivateKey,
    },
    error::WalletResult,
};

type Blake2b256 = Blake2b<U32>;

pub fn address_from_key(key: &EncodedPrivateKey) -> WalletResult<String> {
    let (flag, raw) = KeyDecoder::decode_bech32(key.expose_secret(), SUI_PRIVATE_KEY_HRP)
        .map_err(|e| chain_error("sui", e))?;

    if flag != SUI_ED25519_FLAG {
        return Err(chain_error(
            "sui",
            format!("unsupported signature scheme flag 0x{:02x}", flag),
        ));
    }

    let public_key = ed25519_public_key(&raw);

    let mut hasher = Blake2b256::new();
    hasher.update([flag]);
    hasher.update(public_key.as_bytes());

    Ok(format!("0x{}", hex::encode(hasher.finalize())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::encoding::{KeyEncoder, KeyFormat},
        error::ErrorKind,
    };

    #[test]
    fn test_address_shape() {
        let key = KeyEncoder::encode(&[9u8; 32], &KeyFormat::SUI_BECH32).unwrap();
        let address = address_from_key(&key).unwrap();

        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 66);
        assert_eq!(address, address.to_lowercase());
    }

    #[test]
    fn test_address_hashes_flag_and_pubkey() {
        let key = KeyEncoder::encode(&[9u8; 32], &KeyFormat::SUI_BECH32).unwrap();

        let public_key = ed25519_dalek::SigningKey::from_bytes(&[9u8; 32]).verifying_key();
        let mut preimage = vec![0x00];
        preimage.extend_from_slice(public_key.as_bytes());
        let expected = format!("0x{}", hex::encode(Blake2b256::digest(&preimage)));

        assert_eq!(address_from_key(&key).unwrap(), expected);
    }

    #[test]
    fn test_foreign_scheme_is_chain_error() {
        let format = KeyFormat::Bech32 {
            hrp: SUI_PRIVATE_KEY_HRP,
            scheme_flag: 0x01,
        };
        let key = KeyEncoder::encode(&[9u8; 32], &format).unwrap();
        assert_eq!(address_from_key(&key).unwrap_err().kind(), ErrorKind::Chain);
    }

    #[test]
    fn test_wrong_prefix_is_chain_error() {
        let format = KeyFormat::Bech32 {
            hrp: "notsui",
            scheme_flag: 0x00,
        };
        let key = KeyEncoder::encode(&[9u8; 32], &format).unwrap();
        assert_eq!(address_from_key(&key).unwrap_err().kind(), ErrorKind::Chain);
    }
}
