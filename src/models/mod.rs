//! 数据模型定义
//!
//! 每个资源按 `entities`（业务实体）、`requests`（请求参数）、
//! `responses`（响应结构）拆分，并通过 ts-rs 导出 TypeScript 类型供前端使用。

#[macro_use]
mod macros;

pub mod common;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod professors;
pub mod stats;
pub mod students;

pub use common::{
    ErrorCode, ErrorResponse, MessageResponse, PaginationInfo, PaginationQuery, SortOrder,
    parse_status_filter,
};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
