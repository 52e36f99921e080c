use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::enrollments::entities::Enrollment;
use crate::models::professors::entities::Professor;

define_string_enum! {
    /// 课程状态
    CourseStatus, export_to = "../frontend/src/types/generated/course.ts" {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

define_string_enum! {
    /// 课程列表排序字段
    CourseSortBy, export_to = "../frontend/src/types/generated/course.ts" {
        CreatedAt => "createdAt",
        Name => "name",
        Code => "code",
        Semester => "semester",
    }
}

impl Default for CourseSortBy {
    fn default() -> Self {
        CourseSortBy::CreatedAt
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    // 课程代码
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub credits: i32,
    pub professor_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub professor: Option<Professor>,
    // 最大容量
    pub max_capacity: i32,
    // 当前选课人数，与选课表记录数保持一致
    pub current_enrollment: i32,
    pub schedule: String,
    pub semester: String,
    pub status: CourseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub enrollments: Option<Vec<Enrollment>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    /// 剩余名额
    pub fn available_seats(&self) -> i32 {
        (self.max_capacity - self.current_enrollment).max(0)
    }

    /// 是否可选：课程开放且仍有名额
    pub fn is_open_for_enrollment(&self) -> bool {
        self.status == CourseStatus::Active && self.available_seats() > 0
    }
}
