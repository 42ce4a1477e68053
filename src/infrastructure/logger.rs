//! 日志基础设施

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 安装全局 fmt 订阅器；`RUST_LOG` 优先于 `level`
    pub fn init(level: Level) {
        if let Err(err) = Self::try_init(level) {
            tracing::warn!("logger already initialised: {}", err);
        }
    }

    pub fn try_init(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing_subscriber::fmt()
            .with_env_filter(Self::filter(level))
            .with_target(false)
            .compact()
            .try_init()
    }

    fn filter(level: Level) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()))
    }
}
