use serde::Deserialize;
use ts_rs::TS;

use super::entities::{ProfessorSortBy, ProfessorStatus};
use crate::models::common::{PaginationQuery, SortOrder};

// 教师列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub sort_by: Option<ProfessorSortBy>,
    pub order: Option<SortOrder>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
}

// 创建教师请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct CreateProfessorRequest {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub department: String,
    pub status: Option<ProfessorStatus>,
    pub hire_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 更新教师请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct UpdateProfessorRequest {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub department: Option<String>,
    pub status: Option<ProfessorStatus>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ProfessorListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: ProfessorSortBy,
    pub order: SortOrder,
    pub search: Option<String>,
    pub status: Option<ProfessorStatus>,
    pub department: Option<String>,
}
