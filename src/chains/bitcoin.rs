//! Bitcoin 地址
//!
//! WIF -> secp256k1 公钥 -> Legacy P2PKH (1...)

use bitcoin::{
    secp256k1::PublicKey as Secp256k1PublicKey, Address, Network, PublicKey as BitcoinPublicKey,
};
use k256::ecdsa::SigningKey;

use super::chain_error;
use crate::{
    domain::{
        encoding::{KeyDecoder, WIF_MAINNET_VERSION},
        keys::EncodedPrivateKey,
    },
    error::WalletResult,
};

/// 测试网 WIF 版本号
pub const WIF_TESTNET_VERSION: u8 = 0xef;

pub fn address_from_key(key: &EncodedPrivateKey) -> WalletResult<String> {
    let wif = KeyDecoder::decode_wif(key.expose_secret()).map_err(|e| chain_error("bitcoin", e))?;

    let network = match wif.version {
        WIF_MAINNET_VERSION => Network::Bitcoin,
        WIF_TESTNET_VERSION => Network::Testnet,
        other => {
            return Err(chain_error(
                "bitcoin",
                format!("unknown WIF version byte 0x{:02x}", other),
            ))
        }
    };

    let signing_key =
        SigningKey::from_slice(wif.key.as_ref()).map_err(|e| chain_error("bitcoin", e))?;
    let encoded = signing_key.verifying_key().to_encoded_point(wif.compressed);

    let secp_pubkey =
        Secp256k1PublicKey::from_slice(encoded.as_bytes()).map_err(|e| chain_error("bitcoin", e))?;
    let pubkey = if wif.compressed {
        BitcoinPublicKey::new(secp_pubkey)
    } else {
        BitcoinPublicKey::new_uncompressed(secp_pubkey)
    };

    Ok(Address::p2pkh(&pubkey, network).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{encoding::KeyEncoder, encoding::KeyFormat, keys::FormatTag},
        error::ErrorKind,
    };

    const REFERENCE_KEY: &str = "e284129cc0922579a535bbf4d1a3b25773090d28c909bc0fed73b5e0222cc372";

    #[test]
    fn test_reference_address() {
        let raw = hex::decode(REFERENCE_KEY).unwrap();
        let wif = KeyEncoder::encode(&raw, &KeyFormat::BITCOIN_WIF).unwrap();
        assert_eq!(
            address_from_key(&wif).unwrap(),
            "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA"
        );
    }

    #[test]
    fn test_key_one_compressed() {
        // 私钥 = 1 的压缩公钥地址
        let key = EncodedPrivateKey::new(
            FormatTag::Wif,
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn".to_string(),
        );
        assert_eq!(
            address_from_key(&key).unwrap(),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn test_matches_bitcoin_crate() {
        use bitcoin::{secp256k1::Secp256k1, PrivateKey};

        let raw = hex::decode(REFERENCE_KEY).unwrap();
        let wif = KeyEncoder::encode(&raw, &KeyFormat::BITCOIN_WIF).unwrap();

        let secp = Secp256k1::new();
        let private = PrivateKey::from_wif(wif.expose_secret()).unwrap();
        let expected = Address::p2pkh(&private.public_key(&secp), Network::Bitcoin);

        assert_eq!(address_from_key(&wif).unwrap(), expected.to_string());
    }

    #[test]
    fn test_testnet_version() {
        let raw = hex::decode(REFERENCE_KEY).unwrap();
        let format = KeyFormat::Wif {
            version: WIF_TESTNET_VERSION,
            compressed: true,
        };
        let wif = KeyEncoder::encode(&raw, &format).unwrap();
        let address = address_from_key(&wif).unwrap();
        assert!(address.starts_with('m') || address.starts_with('n'));
    }

    #[test]
    fn test_unknown_version_is_chain_error() {
        let raw = hex::decode(REFERENCE_KEY).unwrap();
        let format = KeyFormat::Wif {
            version: 0x42,
            compressed: true,
        };
        let wif = KeyEncoder::encode(&raw, &format).unwrap();
        assert_eq!(address_from_key(&wif).unwrap_err().kind(), ErrorKind::Chain);
    }

    #[test]
    fn test_garbage_is_chain_error() {
        let key = EncodedPrivateKey::new(FormatTag::Wif, "not-a-wif".to_string());
        let err = address_from_key(&key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Chain);
        assert!(err.to_string().contains("bitcoin"));
    }
}
