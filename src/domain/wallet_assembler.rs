//! 多链钱包组装
//!
//! 助记词 -> 种子 -> 按链配置逐条派生、编码、取地址。
//! 本模块不包含任何密码学实现，只负责编排。
//!
//! 任意一条链失败则整批失败，不返回部分结果。

use std::collections::BTreeMap;

use rand::{rngs::OsRng, CryptoRng, RngCore};
use serde::Serialize;

use crate::{
    domain::{
        address::{AddressDeriver, StandardAddressDeriver},
        chain_config::{ChainId, ChainKeySpec, ChainRegistry, KeyDerivation},
        ed25519::Ed25519Deriver,
        encoding::KeyEncoder,
        keys::EncodedPrivateKey,
        mnemonic::{EntropyStrength, MnemonicPhrase, SeedBytes, SeedMaterial, SeedPhraseGenerator},
        secp256k1::Secp256k1Deriver,
    },
    error::WalletResult,
};

/// 单链结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainWalletRecord {
    /// 已作为 bundle 的 key 输出
    #[serde(skip)]
    pub chain: ChainId,
    pub private_key: EncodedPrivateKey,
    pub address: String,
}

/// 一次运行的完整输出
#[derive(Debug, Clone, Serialize)]
pub struct WalletBundle {
    pub mnemonic: MnemonicPhrase,
    pub chains: BTreeMap<ChainId, ChainWalletRecord>,
}

impl WalletBundle {
    pub fn get(&self, chain: ChainId) -> Option<&ChainWalletRecord> {
        self.chains.get(&chain)
    }

    /// (链, 地址)，不含任何秘密
    pub fn addresses(&self) -> impl Iterator<Item = (ChainId, &str)> + '_ {
        self.chains
            .iter()
            .map(|(chain, record)| (*chain, record.address.as_str()))
    }
}

pub struct WalletAssembler<D = StandardAddressDeriver> {
    registry: ChainRegistry,
    deriver: D,
}

impl WalletAssembler<StandardAddressDeriver> {
    /// 内置五链 + 内置地址算法
    pub fn new() -> WalletResult<Self> {
        Self::with_deriver(ChainRegistry::standard()?.clone(), StandardAddressDeriver)
    }
}

impl<D: AddressDeriver> WalletAssembler<D> {
    /// 注册表在这里校验，配置错误不会拖到派生阶段
    pub fn with_deriver(registry: ChainRegistry, deriver: D) -> WalletResult<Self> {
        registry.validate()?;
        Ok(Self { registry, deriver })
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// 生成新助记词并派生全部链
    pub fn generate(&self, strength: EntropyStrength) -> WalletResult<WalletBundle> {
        self.generate_with_rng(&mut OsRng, strength)
    }

    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        strength: EntropyStrength,
    ) -> WalletResult<WalletBundle> {
        let phrase = SeedPhraseGenerator::generate_with_rng(rng, strength)?;
        self.assemble(phrase)
    }

    /// 从已有助记词恢复
    pub fn assemble_from_phrase(&self, phrase: &str) -> WalletResult<WalletBundle> {
        let phrase = MnemonicPhrase::parse(phrase)?;
        self.assemble(phrase)
    }

    pub fn assemble(&self, phrase: MnemonicPhrase) -> WalletResult<WalletBundle> {
        let seed = SeedMaterial::to_seed(&phrase)?;

        let mut chains = BTreeMap::new();
        for spec in self.registry.list_all() {
            let record = self
                .derive_record(spec, &seed)
                .map_err(|e| e.for_chain(spec.chain))?;
            chains.insert(spec.chain, record);
        }

        tracing::debug!(
            chains = chains.len(),
            words = phrase.word_count(),
            "wallet bundle assembled"
        );

        Ok(WalletBundle {
            mnemonic: phrase,
            chains,
        })
    }

    fn derive_record(
        &self,
        spec: &ChainKeySpec,
        seed: &SeedBytes,
    ) -> WalletResult<ChainWalletRecord> {
        let raw = match &spec.derivation {
            KeyDerivation::Secp256k1Path { path, .. } => Secp256k1Deriver::derive(seed, path)?,
            KeyDerivation::Ed25519Path { path, .. } => Ed25519Deriver::derive(seed, path)?,
        };

        let format = spec.derivation.format();
        let private_key = KeyEncoder::encode_raw(&raw, format)?;
        drop(raw);

        let address = self.deriver.get_address(spec.chain, &private_key)?;

        tracing::debug!(
            chain = %spec.chain,
            path = %spec.derivation.path(),
            format = %format.tag(),
            "chain key derived"
        );

        Ok(ChainWalletRecord {
            chain: spec.chain,
            private_key,
            address,
        })
    }
}
