use serde::Deserialize;
use ts_rs::TS;

use super::entities::{GradeSortBy, GradeStatus};
use crate::models::common::{PaginationQuery, SortOrder};

// 成绩列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub sort_by: Option<GradeSortBy>,
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

// 创建成绩请求
//
// 总评与状态由服务端根据三次考试成绩计算
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub partial1: Option<f64>,
    pub partial2: Option<f64>,
    pub partial3: Option<f64>,
    pub comments: Option<String>,
}

// 更新成绩请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct UpdateGradeRequest {
    pub partial1: Option<f64>,
    pub partial2: Option<f64>,
    pub partial3: Option<f64>,
    // 考试成绩不全时允许手动录入总评
    pub final_grade: Option<f64>,
    pub comments: Option<String>,
}

// 写入存储层的成绩数据（已完成计算）
#[derive(Debug, Clone)]
pub struct GradeRecord {
    pub partial1: Option<f64>,
    pub partial2: Option<f64>,
    pub partial3: Option<f64>,
    pub final_grade: Option<f64>,
    pub status: GradeStatus,
    pub comments: Option<String>,
}

// 成绩列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct GradeListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: GradeSortBy,
    pub order: SortOrder,
    pub search: Option<String>,
    pub status: Option<GradeStatus>,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
}
