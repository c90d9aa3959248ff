//! WalletBundle 持久化
//!
//! 输出为 pretty JSON；unix 下文件权限为 0600（仅所有者可读写）。

use std::{fs::OpenOptions, io::Write, path::Path};

use crate::{
    domain::wallet_assembler::WalletBundle,
    error::{WalletError, WalletResult},
};

/// 写入 bundle，已存在的文件会被覆盖
pub fn save_bundle(bundle: &WalletBundle, path: &Path) -> WalletResult<()> {
    let json = zeroize::Zeroizing::new(
        serde_json::to_vec_pretty(bundle)
            .map_err(|e| WalletError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?,
    );

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    restrict_permissions(path)?;
    file.write_all(&json)?;
    file.write_all(b"\n")?;
    file.sync_all()?;

    tracing::info!(path = %path.display(), chains = bundle.chains.len(), "wallet bundle saved");
    Ok(())
}

/// `mode` 只在新建时生效，覆盖已有文件时需要再收紧一次
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> WalletResult<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> WalletResult<()> {
    Ok(())
}
