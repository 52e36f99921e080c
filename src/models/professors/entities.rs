use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::courses::entities::Course;

define_string_enum! {
    /// 教师状态
    ProfessorStatus, export_to = "../frontend/src/types/generated/professor.ts" {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

define_string_enum! {
    /// 教师列表排序字段
    ProfessorSortBy, export_to = "../frontend/src/types/generated/professor.ts" {
        CreatedAt => "createdAt",
        FirstName => "firstName",
        LastName => "lastName",
        EmployeeId => "employeeId",
    }
}

impl Default for ProfessorSortBy {
    fn default() -> Self {
        ProfessorSortBy::CreatedAt
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct Professor {
    pub id: i64,
    // 工号
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    // 研究方向
    pub specialty: String,
    // 所属院系
    pub department: String,
    // 入职时间
    pub hire_date: chrono::DateTime<chrono::Utc>,
    pub status: ProfessorStatus,
    // 授课列表（仅详情接口加载）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub courses: Option<Vec<Course>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
