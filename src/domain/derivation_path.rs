//! HD 派生路径
//!
//! 解析与表示 `m/44'/60'/0'/0/0` 形式的路径，`'` 与 `h` 均表示硬化段。

use std::{fmt, str::FromStr};

use crate::error::{WalletError, WalletResult};

/// 硬化索引偏移量 (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// 路径中的单个段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSegment {
    /// 不含硬化位的索引，构造时保证小于 2^31
    index: u32,
    hardened: bool,
}

impl PathSegment {
    /// 索引 >= 2^31 时返回 ConfigError，硬化与否只由 `hardened` 决定
    pub fn new(index: u32, hardened: bool) -> WalletResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::config(format!(
                "path index {} must be below 2^31",
                index
            )));
        }
        Ok(Self { index, hardened })
    }

    pub fn hardened(index: u32) -> WalletResult<Self> {
        Self::new(index, true)
    }

    pub fn normal(index: u32) -> WalletResult<Self> {
        Self::new(index, false)
    }

    pub const fn index(&self) -> u32 {
        self.index
    }

    pub const fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// BIP32 `ser32(i)` 使用的子索引
    pub const fn child_number(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

/// 派生路径
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    segments: Vec<PathSegment>,
}

impl DerivationPath {
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// BIP44: m/44'/coin'/account'/change/index
    pub fn bip44(coin_type: u32, account: u32, change: u32, index: u32) -> WalletResult<Self> {
        Ok(Self::from_segments(vec![
            PathSegment::hardened(44)?,
            PathSegment::hardened(coin_type)?,
            PathSegment::hardened(account)?,
            PathSegment::normal(change)?,
            PathSegment::normal(index)?,
        ]))
    }

    /// 全硬化路径：m/44'/coin'/rest'...
    pub fn hardened_bip44(coin_type: u32, rest: &[u32]) -> WalletResult<Self> {
        let mut segments = vec![PathSegment::hardened(44)?, PathSegment::hardened(coin_type)?];
        for index in rest {
            segments.push(PathSegment::hardened(*index)?);
        }
        Ok(Self::from_segments(segments))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_fully_hardened(&self) -> bool {
        self.segments.iter().all(|s| s.is_hardened())
    }

    /// 第一个非硬化段
    pub fn first_non_hardened(&self) -> Option<PathSegment> {
        self.segments.iter().copied().find(|s| !s.is_hardened())
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    fn from_str(path: &str) -> WalletResult<Self> {
        let path = path.trim();

        let rest = match path.strip_prefix('m') {
            Some(rest) => rest,
            None => {
                return Err(WalletError::config(format!(
                    "derivation path must start with 'm': {}",
                    path
                )))
            }
        };

        if rest.is_empty() {
            return Ok(Self::from_segments(Vec::new()));
        }

        let rest = rest.strip_prefix('/').ok_or_else(|| {
            WalletError::config(format!("derivation path must start with 'm/': {}", path))
        })?;

        let mut segments = Vec::new();
        for raw in rest.split('/') {
            let (digits, hardened) = match raw
                .strip_suffix('\'')
                .or_else(|| raw.strip_suffix('h'))
            {
                Some(digits) => (digits, true),
                None => (raw, false),
            };

            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(WalletError::config(format!(
                    "invalid path segment '{}' in {}",
                    raw, path
                )));
            }

            let index: u32 = digits.parse().map_err(|_| {
                WalletError::config(format!("path index '{}' out of range in {}", raw, path))
            })?;
            let segment = PathSegment::new(index, hardened).map_err(|_| {
                WalletError::config(format!(
                    "path index '{}' must be below 2^31 in {}",
                    raw, path
                ))
            })?;
            segments.push(segment);
        }

        Ok(Self::from_segments(segments))
    }
}
