//! 日志系统配置模块
//! 结构化日志，级别由 RUST_LOG 或配置决定，输出到 stderr（stdout 留给地址列表）

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingConfig;

/// 初始化日志系统
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    // 设置日志级别过滤器
    let filter = build_filter(config)?;

    // 根据配置选择日志格式
    if config.format == "json" {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        Registry::default()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_ansi(true),
            )
            .try_init()?;
    }

    Ok(())
}

/// RUST_LOG 优先，其次为配置的级别
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, Box<dyn std::error::Error>> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.level)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_config_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_second_init_does_not_panic() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            format: "text".to_string(),
        };
        // 全局 subscriber 只能设置一次，第二次返回错误而不是 panic
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
