use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化日志：开发环境输出带文件行号的彩色文本，其余环境输出 JSON
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(config.is_development());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(format);

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }

    guard
}

/// 启动前检查数据库中的基础数据，仅用于日志输出
async fn log_dataset_summary(storage: &Arc<dyn Storage>) {
    match storage.get_stats().await {
        Ok(stats) => debug!(
            "Dataset: {} students, {} professors, {} courses, {} enrollments",
            stats.total_students,
            stats.total_professors,
            stats.total_courses,
            stats.total_enrollments
        ),
        Err(e) => warn!("Failed to read dataset summary: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括 TLS 提供者、存储初始化与数据库迁移
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    log_dataset_summary(&storage).await;

    StartupContext { storage }
}
