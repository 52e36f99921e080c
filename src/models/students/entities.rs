use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::enrollments::entities::Enrollment;
use crate::models::grades::entities::Grade;

define_string_enum! {
    /// 学生状态
    StudentStatus, export_to = "../frontend/src/types/generated/student.ts" {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Graduated => "GRADUATED",
    }
}

define_string_enum! {
    /// 学生列表排序字段
    StudentSortBy, export_to = "../frontend/src/types/generated/student.ts" {
        CreatedAt => "createdAt",
        FirstName => "firstName",
        LastName => "lastName",
        Carnet => "carnet",
    }
}

impl Default for StudentSortBy {
    fn default() -> Self {
        StudentSortBy::CreatedAt
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    // 学号
    pub carnet: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    // 专业
    pub career: String,
    // 入学时间
    pub enrollment_date: chrono::DateTime<chrono::Utc>,
    pub status: StudentStatus,
    // 选课记录（仅详情接口加载）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub enrollments: Option<Vec<Enrollment>>,
    // 成绩记录（仅详情接口加载）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub grades: Option<Vec<Grade>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_strings() {
        for status in StudentStatus::ALL {
            assert_eq!(status.as_str().parse::<StudentStatus>(), Ok(*status));
        }
        assert!("active".parse::<StudentStatus>().is_err());
    }

    #[test]
    fn test_status_json_format() {
        let json = serde_json::to_string(&StudentStatus::Graduated).unwrap();
        assert_eq!(json, "\"GRADUATED\"");

        let err = serde_json::from_str::<StudentStatus>("\"SUSPENDED\"").unwrap_err();
        assert!(err.to_string().contains("ACTIVE, INACTIVE, GRADUATED"));
    }

    #[test]
    fn test_sort_by_accepts_camel_case() {
        assert_eq!(
            "firstName".parse::<StudentSortBy>(),
            Ok(StudentSortBy::FirstName)
        );
        assert_eq!(StudentSortBy::default(), StudentSortBy::CreatedAt);
    }
}
