//! Solana 地址 = ed25519 公钥的 Base58

use super::{chain_error, ed25519_public_key};
use crate::{
    domain::{encoding::KeyDecoder, keys::EncodedPrivateKey},
    error::WalletResult,
};

pub fn address_from_key(key: &EncodedPrivateKey) -> WalletResult<String> {
    let raw =
        KeyDecoder::decode_base58(key.expose_secret()).map_err(|e| chain_error("solana", e))?;
    let public_key = ed25519_public_key(&raw);

    Ok(bs58::encode(public_key.to_bytes()).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            encoding::{KeyEncoder, KeyFormat},
            keys::FormatTag,
        },
        error::ErrorKind,
    };

    #[test]
    fn test_address_is_base58_pubkey() {
        let key = KeyEncoder::encode(&[7u8; 32], &KeyFormat::Base58).unwrap();
        let address = address_from_key(&key).unwrap();

        let expected = ed25519_dalek::SigningKey::from_bytes(&[7u8; 32])
            .verifying_key()
            .to_bytes();
        assert_eq!(bs58::decode(&address).into_vec().unwrap(), expected.to_vec());
    }

    #[test]
    fn test_wrong_length_is_chain_error() {
        let key = EncodedPrivateKey::new(
            FormatTag::Base58,
            bs58::encode([1u8; 64]).into_string(),
        );
        assert_eq!(address_from_key(&key).unwrap_err().kind(), ErrorKind::Chain);
    }
}
