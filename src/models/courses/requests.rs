use serde::Deserialize;
use ts_rs::TS;

use super::entities::{CourseSortBy, CourseStatus};
use crate::models::common::{PaginationQuery, SortOrder};

// 课程列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub sort_by: Option<CourseSortBy>,
    pub order: Option<SortOrder>,
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(
        default,
        with = "crate::models::common::pagination::optional_string_i64"
    )]
    #[ts(optional, type = "number")]
    pub professor_id: Option<i64>,
    pub semester: Option<String>,
}

// 创建课程请求
//
// current_enrollment 由选课记录维护，不接受客户端传入
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: i32,
    pub professor_id: i64,
    pub max_capacity: i32,
    pub schedule: String,
    pub semester: String,
    pub status: Option<CourseStatus>,
}

// 更新课程请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub professor_id: Option<i64>,
    pub max_capacity: Option<i32>,
    pub schedule: Option<String>,
    pub semester: Option<String>,
    pub status: Option<CourseStatus>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct CourseListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: CourseSortBy,
    pub order: SortOrder,
    pub search: Option<String>,
    pub status: Option<CourseStatus>,
    pub professor_id: Option<i64>,
    pub semester: Option<String>,
}
