//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 存储后端选择。
///
/// Postgres 变体携带连接串，保证"选了 postgres 必有 URL"在加载期成立。
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Memory,
    Postgres { database_url: String },
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub store: StoreBackend,
    pub jwt_secret: String,
    pub jwt_access_ttl_seconds: u64,
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("FLEET_JWT_SECRET")
            .map_err(|_| ConfigError::Missing("FLEET_JWT_SECRET".to_string()))?;
        let jwt_access_ttl_seconds =
            read_u64_with_default("FLEET_JWT_ACCESS_TTL_SECONDS", 3600)?;
        let http_addr =
            env::var("FLEET_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let store = read_store_backend()?;
        let seed_demo_data = read_bool_with_default("FLEET_SEED_DEMO_DATA", false);

        Ok(Self {
            http_addr,
            store,
            jwt_secret,
            jwt_access_ttl_seconds,
            seed_demo_data,
        })
    }
}

/// 读取存储后端选择（默认 postgres）。
fn read_store_backend() -> Result<StoreBackend, ConfigError> {
    let selected = env::var("FLEET_STORE").unwrap_or_else(|_| "postgres".to_string());
    match selected.to_ascii_lowercase().as_str() {
        "memory" => Ok(StoreBackend::Memory),
        "postgres" => {
            let database_url = env::var("FLEET_DATABASE_URL")
                .map_err(|_| ConfigError::Missing("FLEET_DATABASE_URL".to_string()))?;
            Ok(StoreBackend::Postgres { database_url })
        }
        _ => Err(ConfigError::Invalid("FLEET_STORE".to_string(), selected)),
    }
}

/// 读取 u64 类型环境变量，缺省时使用默认值。
fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
