use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;

/// 课程名额已满
pub const NO_SEATS_AVAILABLE: &str = "No seats available";
/// 重复选课
pub const ALREADY_ENROLLED: &str = "Student already enrolled in this course";
/// 课程未开放
pub const COURSE_NOT_ACTIVE: &str = "Course is not active";
pub const COURSE_NOT_FOUND: &str = "Course not found";
pub const STUDENT_NOT_FOUND: &str = "Student not found";

define_string_enum! {
    /// 选课状态
    EnrollmentStatus, export_to = "../frontend/src/types/generated/enrollment.ts" {
        Enrolled => "ENROLLED",
        Dropped => "DROPPED",
        Completed => "COMPLETED",
    }
}

define_string_enum! {
    /// 选课列表排序字段
    EnrollmentSortBy, export_to = "../frontend/src/types/generated/enrollment.ts" {
        EnrollmentDate => "enrollmentDate",
        CreatedAt => "createdAt",
    }
}

impl Default for EnrollmentSortBy {
    fn default() -> Self {
        EnrollmentSortBy::EnrollmentDate
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub student: Option<Box<Student>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub course: Option<Box<Course>>,
    pub enrollment_date: chrono::DateTime<chrono::Utc>,
    pub status: EnrollmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_status_values() {
        assert_eq!(EnrollmentStatus::Enrolled.as_str(), "ENROLLED");
        assert_eq!(
            "COMPLETED".parse::<EnrollmentStatus>(),
            Ok(EnrollmentStatus::Completed)
        );
        assert!("enrolled".parse::<EnrollmentStatus>().is_err());
    }

    #[test]
    fn test_relations_are_omitted_when_not_loaded() {
        let now = chrono::Utc::now();
        let enrollment = Enrollment {
            id: 1,
            student_id: 2,
            course_id: 3,
            student: None,
            course: None,
            enrollment_date: now,
            status: EnrollmentStatus::Enrolled,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&enrollment).unwrap();
        assert_eq!(value["studentId"], 2);
        assert_eq!(value["status"], "ENROLLED");
        assert!(value.get("student").is_none());
        assert!(value.get("course").is_none());
    }
}
