//! 统一日志脱敏
//!
//! 助记词与私钥不允许出现在任何日志中；地址等公开数据按需截断。

use serde::Serialize;

use crate::domain::wallet_assembler::WalletBundle;

/// 所有秘密字段的统一占位符
pub const REDACTED: &str = "[REDACTED]";

/// 可脱敏trait
pub trait SensitiveRedact {
    fn redact(&self) -> String;
}

/// 脱敏地址（显示前6位和后4位）
pub fn redact_address(address: &str) -> String {
    if address.len() < 10 || !address.is_ascii() {
        return "*".repeat(address.chars().count());
    }

    let prefix = &address[..6];
    let suffix = &address[address.len() - 4..];
    format!("{}...{}", prefix, suffix)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// WalletBundle 脱敏
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Serialize)]
pub struct RedactedChainRecord {
    pub chain: String,
    pub format: String,
    pub address: String,
    // ❌ 不包含：private_key
}

#[derive(Debug, Serialize)]
pub struct RedactedWalletBundle {
    pub words: usize,
    pub chains: Vec<RedactedChainRecord>,
    // ❌ 不包含：mnemonic
}

impl SensitiveRedact for WalletBundle {
    fn redact(&self) -> String {
        let redacted = RedactedWalletBundle {
            words: self.mnemonic.word_count(),
            chains: self
                .chains
                .values()
                .map(|record| RedactedChainRecord {
                    chain: record.chain.to_string(),
                    format: record.private_key.format().to_string(),
                    address: redact_address(&record.address),
                })
                .collect(),
        };

        serde_json::to_string(&redacted).unwrap_or_else(|_| "{ redacted }".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallet_assembler::WalletAssembler;

    #[test]
    fn test_redact_address() {
        let address = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bFd2";
        let redacted = redact_address(address);
        assert_eq!(redacted, "0x742d...bFd2");
        assert_eq!(redact_address("short"), "*****");
    }

    #[test]
    fn test_bundle_redaction_has_no_secrets() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let bundle = WalletAssembler::new()
            .unwrap()
            .assemble_from_phrase(phrase)
            .unwrap();

        let redacted = bundle.redact();
        assert!(!redacted.contains("abandon"));
        for record in bundle.chains.values() {
            assert!(!redacted.contains(record.private_key.expose_secret()));
        }
        assert!(redacted.contains("\"words\":12"));
        assert!(redacted.contains("0x9858...da94"));
        assert!(redacted.contains("\"format\":\"wif\""));
    }
}
