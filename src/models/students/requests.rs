use serde::Deserialize;
use ts_rs::TS;

use super::entities::{StudentSortBy, StudentStatus};
use crate::models::common::{PaginationQuery, SortOrder};

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub sort_by: Option<StudentSortBy>,
    pub order: Option<SortOrder>,
    pub search: Option<String>,
    // 支持 `all`
    pub status: Option<String>,
    pub career: Option<String>,
}

// 学生快速搜索参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentSearchParams {
    pub q: Option<String>,
}

// 创建学生请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub carnet: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub career: String,
    pub status: Option<StudentStatus>,
    pub enrollment_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 更新学生请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub carnet: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub career: Option<String>,
    pub status: Option<StudentStatus>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: StudentSortBy,
    pub order: SortOrder,
    pub search: Option<String>,
    pub status: Option<StudentStatus>,
    pub career: Option<String>,
}
