//! 测试辅助模块

#![allow(dead_code)]

/// BIP39 参考助记词（全零熵）
pub const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// 参考助记词在各链上的 (私钥, 地址)
pub const ETHEREUM_KEY: &str = "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727";
pub const ETHEREUM_ADDRESS: &str = "0x9858EfFD232B4033E47d90003D41EC34EcaEda94";

pub const BITCOIN_WIF: &str = "L4p2b9VAf8k5aUahF1JCJUzZkgNEAqLfq8DDdQiyAprQAKSbu8hf";
pub const BITCOIN_ADDRESS: &str = "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA";

pub const SOLANA_KEY: &str = "4m6wvvyb9xdht29bJUwmLgB7r7J3mwEPV4AzHKC4Kg2p";
pub const SOLANA_ADDRESS: &str = "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk";

pub const SUI_KEY: &str =
    "suiprivkey1qzyxnjc8z79lvlsg6lz2hh69fp7m7duunfzjlnkzsd59f062855mqacydfr";
pub const SUI_ADDRESS: &str =
    "0x5e93a736d04fbb25737aa40bee40171ef79f65fae833749e3c089fe7cc2161f1";

pub const APTOS_KEY: &str = "cc92c0eaf80206d817f150e21917f797e49cf644a33ac514de3c316baa2f1bf5";
pub const APTOS_ADDRESS: &str =
    "0xeb663b681209e7087d681c5d3eed12aaa8e1915e7c87794542c3f96e94b3d3bf";
