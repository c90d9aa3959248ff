//! BIP39 助记词生成与种子派生
//!
//! 助记词是整个钱包唯一的根秘密：
//! - 内存中以 `Zeroizing` 保存，drop 时清零
//! - `Debug` 不输出单词
//! - 只有显式调用 `expose_phrase()` 才能读取明文

use std::fmt;

use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::{Serialize, Serializer};
use zeroize::{Zeroize, Zeroizing};

use crate::{
    error::{WalletError, WalletResult},
    infrastructure::log_redact::REDACTED,
};

/// BIP39 种子长度
pub const SEED_LEN: usize = 64;

/// 助记词熵强度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntropyStrength {
    /// 128 bits = 12 words
    #[default]
    Bits128,
    /// 160 bits = 15 words
    Bits160,
    /// 192 bits = 18 words
    Bits192,
    /// 224 bits = 21 words
    Bits224,
    /// 256 bits = 24 words
    Bits256,
}

impl EntropyStrength {
    pub const ALL: [EntropyStrength; 5] = [
        EntropyStrength::Bits128,
        EntropyStrength::Bits160,
        EntropyStrength::Bits192,
        EntropyStrength::Bits224,
        EntropyStrength::Bits256,
    ];

    pub fn from_bits(bits: u32) -> WalletResult<Self> {
        match bits {
            128 => Ok(EntropyStrength::Bits128),
            160 => Ok(EntropyStrength::Bits160),
            192 => Ok(EntropyStrength::Bits192),
            224 => Ok(EntropyStrength::Bits224),
            256 => Ok(EntropyStrength::Bits256),
            other => Err(WalletError::config(format!(
                "invalid entropy size {} bits, must be one of 128, 160, 192, 224, 256",
                other
            ))),
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            EntropyStrength::Bits128 => 128,
            EntropyStrength::Bits160 => 160,
            EntropyStrength::Bits192 => 192,
            EntropyStrength::Bits224 => 224,
            EntropyStrength::Bits256 => 256,
        }
    }

    pub const fn entropy_bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// 每 32 bits 熵对应 3 个单词
    pub const fn word_count(self) -> usize {
        (self.bits() / 32 * 3) as usize
    }
}

/// BIP39 助记词
#[derive(Clone)]
pub struct MnemonicPhrase {
    phrase: Zeroizing<String>,
    word_count: usize,
}

impl MnemonicPhrase {
    /// 解析并校验已有助记词（单词表 + 校验和）
    pub fn parse(phrase: &str) -> WalletResult<Self> {
        let normalized = Zeroizing::new(phrase.split_whitespace().collect::<Vec<_>>().join(" "));

        let mnemonic = Mnemonic::parse_in(Language::English, normalized.as_str())
            .map_err(|e| WalletError::validation(format!("invalid mnemonic: {}", e)))?;

        Ok(Self {
            word_count: mnemonic.word_count(),
            phrase: Zeroizing::new(mnemonic.to_string()),
        })
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// 读取助记词明文，调用方负责不写入日志
    pub fn expose_phrase(&self) -> &str {
        self.phrase.as_str()
    }
}

impl fmt::Debug for MnemonicPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicPhrase")
            .field("word_count", &self.word_count)
            .field("phrase", &REDACTED)
            .finish()
    }
}

impl Serialize for MnemonicPhrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose_phrase())
    }
}

/// 64 字节 BIP39 种子
pub struct SeedBytes(Zeroizing<[u8; SEED_LEN]>);

impl SeedBytes {
    pub fn from_array(bytes: [u8; SEED_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for SeedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeedBytes({})", REDACTED)
    }
}

/// 助记词生成器
pub struct SeedPhraseGenerator;

impl SeedPhraseGenerator {
    /// 使用系统 CSPRNG 生成助记词
    pub fn generate(entropy_bits: u32) -> WalletResult<MnemonicPhrase> {
        let strength = EntropyStrength::from_bits(entropy_bits)?;
        Self::generate_with_rng(&mut OsRng, strength)
    }

    /// 使用注入的随机源生成助记词
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
        strength: EntropyStrength,
    ) -> WalletResult<MnemonicPhrase> {
        // 最大 32 字节，栈上分配
        let mut entropy = [0u8; 32];
        let len = strength.entropy_bytes();
        rng.fill_bytes(&mut entropy[..len]);

        let result = Self::from_entropy(&entropy[..len]);
        entropy.zeroize();
        result
    }

    /// 熵 -> 助记词
    pub fn from_entropy(entropy: &[u8]) -> WalletResult<MnemonicPhrase> {
        EntropyStrength::from_bits((entropy.len() * 8) as u32)?;

        let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|e| WalletError::config(format!("failed to build mnemonic: {}", e)))?;

        Ok(MnemonicPhrase {
            word_count: mnemonic.word_count(),
            phrase: Zeroizing::new(mnemonic.to_string()),
        })
    }
}

/// 助记词 -> 种子
pub struct SeedMaterial;

impl SeedMaterial {
    /// BIP39 PBKDF2-HMAC-SHA512，空 passphrase
    pub fn to_seed(phrase: &MnemonicPhrase) -> WalletResult<SeedBytes> {
        let mnemonic = Mnemonic::parse_in(Language::English, phrase.expose_phrase())
            .map_err(|e| WalletError::validation(format!("invalid mnemonic: {}", e)))?;

        Ok(SeedBytes::from_array(mnemonic.to_seed("")))
    }

    /// 直接从文本派生种子（先校验）
    pub fn seed_from_phrase(phrase: &str) -> WalletResult<SeedBytes> {
        let phrase = MnemonicPhrase::parse(phrase)?;
        Self::to_seed(&phrase)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::error::ErrorKind;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_all_strengths() {
        for strength in EntropyStrength::ALL {
            let phrase = SeedPhraseGenerator::generate(strength.bits()).unwrap();
            assert_eq!(phrase.word_count(), strength.word_count());
            assert_eq!(
                phrase.expose_phrase().split(' ').count(),
                strength.word_count()
            );

            // 生成的助记词必须能通过校验和
            let reparsed = MnemonicPhrase::parse(phrase.expose_phrase()).unwrap();
            assert_eq!(reparsed.expose_phrase(), phrase.expose_phrase());
        }
    }

    #[test]
    fn test_default_is_twelve_words() {
        assert_eq!(EntropyStrength::default().word_count(), 12);
        let phrase = SeedPhraseGenerator::generate(128).unwrap();
        assert_eq!(phrase.word_count(), 12);
    }

    #[test]
    fn test_invalid_entropy_is_config_error() {
        for bits in [0, 64, 127, 129, 512] {
            let err = SeedPhraseGenerator::generate(bits).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config);
        }
        assert_eq!(
            SeedPhraseGenerator::from_entropy(&[0u8; 17]).unwrap_err().kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_injected_rng_is_deterministic() {
        for strength in EntropyStrength::ALL {
            let a = SeedPhraseGenerator::generate_with_rng(&mut StdRng::seed_from_u64(7), strength)
                .unwrap();
            let b = SeedPhraseGenerator::generate_with_rng(&mut StdRng::seed_from_u64(7), strength)
                .unwrap();
            assert_eq!(a.expose_phrase(), b.expose_phrase());
        }

        let a = SeedPhraseGenerator::generate_with_rng(
            &mut StdRng::seed_from_u64(1),
            EntropyStrength::Bits128,
        )
        .unwrap();
        let b = SeedPhraseGenerator::generate_with_rng(
            &mut StdRng::seed_from_u64(2),
            EntropyStrength::Bits128,
        )
        .unwrap();
        assert_ne!(a.expose_phrase(), b.expose_phrase());
    }

    #[test]
    fn test_zero_entropy_vector() {
        let phrase = SeedPhraseGenerator::from_entropy(&[0u8; 16]).unwrap();
        assert_eq!(phrase.expose_phrase(), TEST_MNEMONIC);
    }

    #[test]
    fn test_seed_vector() {
        // BIP39 参考向量，空 passphrase
        let seed = SeedMaterial::seed_from_phrase(TEST_MNEMONIC).unwrap();
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_seed_is_deterministic() {
        let phrase = SeedPhraseGenerator::generate(256).unwrap();
        let s1 = SeedMaterial::to_seed(&phrase).unwrap();
        let s2 = SeedMaterial::to_seed(&phrase).unwrap();
        assert_eq!(s1.as_bytes(), s2.as_bytes());
        assert_eq!(s1.as_bytes().len(), SEED_LEN);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let messy = format!("  {}  ", TEST_MNEMONIC.replace(' ', "\n  "));
        let phrase = MnemonicPhrase::parse(&messy).unwrap();
        assert_eq!(phrase.expose_phrase(), TEST_MNEMONIC);
    }

    #[test]
    fn test_tampered_checksum_is_validation_error() {
        // 最后一个词替换后校验和失效
        let tampered = TEST_MNEMONIC.replace("about", "abandon");
        let err = SeedMaterial::seed_from_phrase(&tampered).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = MnemonicPhrase::parse("abandon abandon notaword").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_debug_is_redacted() {
        let phrase = MnemonicPhrase::parse(TEST_MNEMONIC).unwrap();
        let debug = format!("{:?}", phrase);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("abandon"));
    }
}
