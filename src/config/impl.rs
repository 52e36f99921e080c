use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 常用环境变量到配置键的映射，优先级高于 `UNIADMIN_*`
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("APP_ENV", "app.environment"),
    ("RUST_LOG", "app.log_level"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UNIX_SOCKET", "server.unix_socket_path"),
    ("CPU_COUNT", "server.workers"),
    ("DATABASE_URL", "database.url"),
];

impl AppConfig {
    /// 按优先级合并配置文件与环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{env_name}")).required(false))
            .add_source(
                Environment::with_prefix("UNIADMIN")
                    .separator("_")
                    .try_parsing(true),
            );

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        Self::from_config(builder.build()?)
    }

    /// 反序列化并补全派生字段
    pub(crate) fn from_config(config: Config) -> Result<Self, ConfigError> {
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 0 表示按 CPU 核数，受 max_workers 限制
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers).max(1);
        }

        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message("database.url must not be empty".into()));
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::Message("database.pool_size must be at least 1".into()));
        }
        if self.server.limits.max_payload_size == 0 {
            return Err(ConfigError::Message(
                "server.limits.max_payload_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// 全局配置，未初始化时按需加载，失败直接退出进程
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 启动时调用一次
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 配置了 Unix 套接字路径时返回该路径
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        Some(self.server.unix_socket_path.as_str()).filter(|path| !path.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const SAMPLE: &str = r#"
        [app]
        system_name = "University Administration"
        environment = "production"
        log_level = "info"

        [server]
        host = "0.0.0.0"
        port = 8080
        unix_socket_path = ""
        workers = 0
        max_workers = 4

        [server.timeouts]
        client_request = 5000
        client_disconnect = 1000
        keep_alive = 30

        [server.limits]
        max_payload_size = 1048576

        [database]
        url = "university.db"
        pool_size = 10
        timeout = 30

        [cors]
        max_age = 3600
    "#;

    fn parse(source: &str) -> Result<AppConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn test_parse_sample_config() {
        let config = parse(SAMPLE).unwrap();
        assert!(config.is_production());
        assert_eq!(config.server_bind_address(), "0.0.0.0:8080");
        assert!((1..=4).contains(&config.server.workers));
        assert_eq!(config.database.pool_size, 10);
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_socket_path_is_disabled() {
        let config = parse(SAMPLE).unwrap();
        assert_eq!(config.unix_socket_path(), None);
    }

    #[test]
    fn test_zero_pool_size_is_rejected() {
        let source = SAMPLE.replace("pool_size = 10", "pool_size = 0");
        assert!(parse(&source).is_err());
    }
}
