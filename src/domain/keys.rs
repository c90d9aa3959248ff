//! 私钥材料类型
//!
//! 所有类型在 drop 时清零，`Debug` 输出不包含密钥内容。

use std::fmt;

use serde::{Serialize, Serializer};
use zeroize::Zeroizing;

use crate::{
    error::{WalletError, WalletResult},
    infrastructure::log_redact::REDACTED,
};

/// 私钥固定长度
pub const PRIVATE_KEY_LEN: usize = 32;

/// 32 字节原始私钥（曲线无关）
#[derive(Clone, PartialEq, Eq)]
pub struct RawPrivateKey(Zeroizing<[u8; PRIVATE_KEY_LEN]>);

impl RawPrivateKey {
    pub fn from_array(bytes: [u8; PRIVATE_KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// 从大端字节构造，不足 32 字节时左侧补零
    pub fn from_be_slice(bytes: &[u8]) -> WalletResult<Self> {
        let padded = left_pad_32(bytes)?;
        Ok(Self(padded))
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for RawPrivateKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for RawPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawPrivateKey({})", REDACTED)
    }
}

/// 大端数值左侧补零到 32 字节；超长（去掉前导零后仍超过 32 字节）报错
pub fn left_pad_32(bytes: &[u8]) -> WalletResult<Zeroizing<[u8; PRIVATE_KEY_LEN]>> {
    let first_significant = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_significant..];
    if significant.len() > PRIVATE_KEY_LEN {
        return Err(WalletError::validation(format!(
            "private key has {} significant bytes, expected at most {}",
            significant.len(),
            PRIVATE_KEY_LEN
        )));
    }

    let mut out = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
    out[PRIVATE_KEY_LEN - significant.len()..].copy_from_slice(significant);
    Ok(out)
}

/// 私钥对外编码格式标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Hex,
    ZeroXHex,
    Wif,
    Base58,
    Bech32,
}

impl FormatTag {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatTag::Hex => "hex",
            FormatTag::ZeroXHex => "zero-x-hex",
            FormatTag::Wif => "wif",
            FormatTag::Base58 => "base58",
            FormatTag::Bech32 => "bech32",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 编码后的私钥
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedPrivateKey {
    format: FormatTag,
    value: Zeroizing<String>,
}

impl EncodedPrivateKey {
    pub fn new(format: FormatTag, value: String) -> Self {
        Self {
            format,
            value: Zeroizing::new(value),
        }
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }

    /// 读取私钥明文，调用方负责不写入日志
    pub fn expose_secret(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Debug for EncodedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedPrivateKey")
            .field("format", &self.format)
            .field("value", &REDACTED)
            .finish()
    }
}

impl Serialize for EncodedPrivateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose_secret())
    }
}
