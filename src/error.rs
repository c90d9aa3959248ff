//! 统一错误类型
//!
//! 错误消息只允许包含链标识、派生路径和编码格式，
//! 禁止出现助记词、种子或私钥等敏感数据。

use std::fmt;

use crate::domain::chain_config::ChainId;

/// 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 配置错误（熵长度非法、ed25519 路径含非硬化段等）
    Config,
    /// 校验错误（助记词校验和失败、私钥长度不符）
    Validation,
    /// 派生错误（标量越界、算术边界）
    Derivation,
    /// 地址派生协作方返回的错误
    Chain,
    /// 持久化错误
    Io,
}

impl ErrorKind {
    /// 稳定的错误码字符串
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Config => "config_error",
            ErrorKind::Validation => "validation_error",
            ErrorKind::Derivation => "derivation_error",
            ErrorKind::Chain => "chain_error",
            ErrorKind::Io => "io_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("config error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("derivation error: {0}")]
    Derivation(String),

    #[error("chain error: {0}")]
    Chain(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// 单链失败，整批作废
    #[error("chain `{chain}` failed: {source}")]
    ChainFailed {
        chain: ChainId,
        #[source]
        source: Box<WalletError>,
    },
}

pub type WalletResult<T> = Result<T, WalletError>;

impl WalletError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn derivation(msg: impl Into<String>) -> Self {
        Self::Derivation(msg.into())
    }

    pub fn chain(msg: impl Into<String>) -> Self {
        Self::Chain(msg.into())
    }

    /// 附加出错的链标识
    pub fn for_chain(self, chain: ChainId) -> Self {
        Self::ChainFailed {
            chain,
            source: Box::new(self),
        }
    }

    /// 原始错误分类（穿透 `ChainFailed` 包装）
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Config(_) => ErrorKind::Config,
            WalletError::Validation(_) => ErrorKind::Validation,
            WalletError::Derivation(_) => ErrorKind::Derivation,
            WalletError::Chain(_) => ErrorKind::Chain,
            WalletError::Io(_) => ErrorKind::Io,
            WalletError::ChainFailed { source, .. } => source.kind(),
        }
    }

    /// 出错的链（如果有）
    pub fn chain_id(&self) -> Option<ChainId> {
        match self {
            WalletError::ChainFailed { chain, .. } => Some(*chain),
            _ => None,
        }
    }
}
