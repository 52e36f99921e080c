use serde::Deserialize;
use ts_rs::TS;

use super::entities::{EnrollmentSortBy, EnrollmentStatus};
use crate::models::common::{PaginationQuery, SortOrder};

// 选课列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub sort_by: Option<EnrollmentSortBy>,
    pub order: Option<SortOrder>,
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(
        default,
        with = "crate::models::common::pagination::optional_string_i64"
    )]
    #[ts(optional, type = "number")]
    pub student_id: Option<i64>,
    #[serde(
        default,
        with = "crate::models::common::pagination::optional_string_i64"
    )]
    #[ts(optional, type = "number")]
    pub course_id: Option<i64>,
}

// 创建选课请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub status: Option<EnrollmentStatus>,
}

// 更新选课请求，仅允许修改状态
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateEnrollmentRequest {
    pub status: EnrollmentStatus,
}

// 选课列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct EnrollmentListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: EnrollmentSortBy,
    pub order: SortOrder,
    pub search: Option<String>,
    pub status: Option<EnrollmentStatus>,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
}
