//! 私钥编码
//!
//! 原始 32 字节私钥 -> 各链要求的对外格式。
//! 每个分支在变换前独立校验 32 字节长度，长度不符一律 ValidationError。

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::{
    domain::keys::{left_pad_32, EncodedPrivateKey, FormatTag, RawPrivateKey, PRIVATE_KEY_LEN},
    error::{WalletError, WalletResult},
};

/// 比特币主网 WIF 版本号
pub const WIF_MAINNET_VERSION: u8 = 0x80;
/// WIF 压缩公钥标记
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;
/// Sui 私钥 bech32 前缀
pub const SUI_PRIVATE_KEY_HRP: &str = "suiprivkey";
/// Sui ed25519 签名方案标记
pub const SUI_ED25519_FLAG: u8 = 0x00;

/// 私钥编码格式（携带链相关参数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// 64 位小写十六进制
    Hex,
    /// `0x` + 64 位小写十六进制
    ZeroXHex,
    /// Wallet Import Format
    Wif { version: u8, compressed: bool },
    /// 裸 32 字节 base58，无版本号无校验
    Base58,
    /// scheme_flag || key 后 bech32 编码
    Bech32 { hrp: &'static str, scheme_flag: u8 },
}

impl KeyFormat {
    pub const BITCOIN_WIF: KeyFormat = KeyFormat::Wif {
        version: WIF_MAINNET_VERSION,
        compressed: true,
    };

    pub const SUI_BECH32: KeyFormat = KeyFormat::Bech32 {
        hrp: SUI_PRIVATE_KEY_HRP,
        scheme_flag: SUI_ED25519_FLAG,
    };

    pub fn tag(&self) -> FormatTag {
        match self {
            KeyFormat::Hex => FormatTag::Hex,
            KeyFormat::ZeroXHex => FormatTag::ZeroXHex,
            KeyFormat::Wif { .. } => FormatTag::Wif,
            KeyFormat::Base58 => FormatTag::Base58,
            KeyFormat::Bech32 { .. } => FormatTag::Bech32,
        }
    }
}

pub struct KeyEncoder;

impl KeyEncoder {
    /// 编码原始私钥
    pub fn encode(key: &[u8], format: &KeyFormat) -> WalletResult<EncodedPrivateKey> {
        let value = match *format {
            KeyFormat::Hex => Self::encode_hex(key)?,
            KeyFormat::ZeroXHex => Self::encode_zero_x_hex(key)?,
            KeyFormat::Wif {
                version,
                compressed,
            } => Self::encode_wif(key, version, compressed)?,
            KeyFormat::Base58 => Self::encode_base58(key)?,
            KeyFormat::Bech32 { hrp, scheme_flag } => Self::encode_bech32(key, hrp, scheme_flag)?,
        };

        Ok(EncodedPrivateKey::new(format.tag(), value))
    }

    pub fn encode_raw(key: &RawPrivateKey, format: &KeyFormat) -> WalletResult<EncodedPrivateKey> {
        Self::encode(key.as_ref(), format)
    }

    fn encode_hex(key: &[u8]) -> WalletResult<String> {
        let key = ensure_key_len(key, FormatTag::Hex)?;
        Ok(hex::encode(key))
    }

    fn encode_zero_x_hex(key: &[u8]) -> WalletResult<String> {
        let key = ensure_key_len(key, FormatTag::ZeroXHex)?;
        Ok(format!("0x{}", hex::encode(key)))
    }

    /// version || key || [0x01] || checksum，base58 编码
    fn encode_wif(key: &[u8], version: u8, compressed: bool) -> WalletResult<String> {
        let key = ensure_key_len(key, FormatTag::Wif)?;

        let mut payload = Zeroizing::new(Vec::with_capacity(1 + PRIVATE_KEY_LEN + 1 + 4));
        payload.push(version);
        payload.extend_from_slice(key);
        if compressed {
            payload.push(WIF_COMPRESSED_FLAG);
        }
        let checksum = double_sha256(&payload);
        payload.extend_from_slice(&checksum[..4]);

        Ok(bs58::encode(payload.as_slice()).into_string())
    }

    fn encode_base58(key: &[u8]) -> WalletResult<String> {
        let key = ensure_key_len(key, FormatTag::Base58)?;
        Ok(bs58::encode(key).into_string())
    }

    fn encode_bech32(key: &[u8], hrp: &str, scheme_flag: u8) -> WalletResult<String> {
        let key = ensure_key_len(key, FormatTag::Bech32)?;

        let hrp = bech32::Hrp::parse(hrp)
            .map_err(|e| WalletError::config(format!("invalid bech32 prefix '{}': {}", hrp, e)))?;

        let mut data = Zeroizing::new(Vec::with_capacity(PRIVATE_KEY_LEN + 1));
        data.push(scheme_flag);
        data.extend_from_slice(key);

        bech32::encode::<bech32::Bech32>(hrp, data.as_slice())
            .map_err(|e| WalletError::validation(format!("bech32 encoding failed: {}", e)))
    }
}

/// 32 字节不变量
fn ensure_key_len(key: &[u8], format: FormatTag) -> WalletResult<&[u8]> {
    if key.len() != PRIVATE_KEY_LEN {
        return Err(WalletError::validation(format!(
            "{} encoding requires a {}-byte private key, got {} bytes",
            format,
            PRIVATE_KEY_LEN,
            key.len()
        )));
    }
    Ok(key)
}

fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 解码（地址派生与校验使用）
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 解码的 WIF
#[derive(Debug)]
pub struct DecodedWif {
    pub version: u8,
    pub compressed: bool,
    pub key: RawPrivateKey,
}

pub struct KeyDecoder;

impl KeyDecoder {
    /// 十六进制私钥：去掉可选的 `0x`，不足 64 位时左补零
    pub fn decode_hex(encoded: &str) -> WalletResult<RawPrivateKey> {
        let trimmed = encoded.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() || digits.len() > PRIVATE_KEY_LEN * 2 {
            return Err(WalletError::validation(format!(
                "hex private key must have 1..={} digits, got {}",
                PRIVATE_KEY_LEN * 2,
                digits.len()
            )));
        }

        let padded = Zeroizing::new(format!("{:0>64}", digits));
        let bytes = Zeroizing::new(
            hex::decode(padded.as_str())
                .map_err(|_| WalletError::validation("hex private key contains non-hex characters"))?,
        );
        RawPrivateKey::from_be_slice(&bytes)
    }

    pub fn decode_wif(encoded: &str) -> WalletResult<DecodedWif> {
        let mut decoded = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|_| WalletError::validation("WIF is not valid base58"))?;

        // 1 (version) + 32 (key) + [1 (compressed)] + 4 (checksum)
        let len = decoded.len();
        if len != 37 && len != 38 {
            decoded.zeroize();
            return Err(WalletError::validation(format!(
                "WIF payload must be 37 or 38 bytes, got {}",
                len
            )));
        }

        let payload_len = len - 4;
        let checksum = double_sha256(&decoded[..payload_len]);
        if decoded[payload_len..] != checksum[..4] {
            decoded.zeroize();
            return Err(WalletError::validation("WIF checksum mismatch"));
        }

        let compressed = payload_len == 34;
        if compressed && decoded[33] != WIF_COMPRESSED_FLAG {
            decoded.zeroize();
            return Err(WalletError::validation("invalid WIF compression flag"));
        }

        let version = decoded[0];
        let key = left_pad_32(&decoded[1..33]).map(|k| RawPrivateKey::from_array(*k));
        decoded.zeroize();

        Ok(DecodedWif {
            version,
            compressed,
            key: key?,
        })
    }

    pub fn decode_base58(encoded: &str) -> WalletResult<RawPrivateKey> {
        let mut decoded = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|_| WalletError::validation("private key is not valid base58"))?;

        let result = if decoded.len() == PRIVATE_KEY_LEN {
            RawPrivateKey::from_be_slice(&decoded)
        } else {
            Err(WalletError::validation(format!(
                "base58 private key must decode to {} bytes, got {}",
                PRIVATE_KEY_LEN,
                decoded.len()
            )))
        };
        decoded.zeroize();
        result
    }

    /// 返回 (scheme_flag, key)，前缀必须与 `expected_hrp` 一致
    pub fn decode_bech32(encoded: &str, expected_hrp: &str) -> WalletResult<(u8, RawPrivateKey)> {
        let (hrp, mut data) = bech32::decode(encoded.trim())
            .map_err(|e| WalletError::validation(format!("invalid bech32 private key: {}", e)))?;

        if !hrp.to_string().eq_ignore_ascii_case(expected_hrp) {
            data.zeroize();
            return Err(WalletError::validation(format!(
                "bech32 prefix must be '{}', got '{}'",
                expected_hrp, hrp
            )));
        }

        if data.len() != PRIVATE_KEY_LEN + 1 {
            let len = data.len();
            data.zeroize();
            return Err(WalletError::validation(format!(
                "bech32 private key payload must be {} bytes, got {}",
                PRIVATE_KEY_LEN + 1,
                len
            )));
        }

        let scheme_flag = data[0];
        let key = RawPrivateKey::from_be_slice(&data[1..]);
        data.zeroize();
        Ok((scheme_flag, key?))
    }
}
