//! Domain 模块
//!
//! 助记词、HD 派生、私钥编码与多链组装

pub mod address;
pub mod chain_config;
pub mod derivation_path;
pub mod ed25519;
pub mod encoding;
pub mod keys;
pub mod mnemonic;
pub mod secp256k1;
pub mod wallet_assembler;

// Re-exports
pub use address::{AddressDeriver, StandardAddressDeriver};
pub use chain_config::{ChainId, ChainKeySpec, ChainRegistry, CurveType, KeyDerivation};
pub use derivation_path::{DerivationPath, PathSegment};
pub use ed25519::Ed25519Deriver;
pub use encoding::{KeyDecoder, KeyEncoder, KeyFormat};
pub use keys::{EncodedPrivateKey, FormatTag, RawPrivateKey};
pub use mnemonic::{EntropyStrength, MnemonicPhrase, SeedBytes, SeedMaterial, SeedPhraseGenerator};
pub use secp256k1::Secp256k1Deriver;
pub use wallet_assembler::{ChainWalletRecord, WalletAssembler, WalletBundle};
