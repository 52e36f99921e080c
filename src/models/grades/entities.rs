use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;

/// 及格线
pub const PASSING_GRADE: f64 = 6.0;
/// 单次考试满分
pub const MAX_SCORE: f64 = 10.0;

define_string_enum! {
    /// 成绩状态
    GradeStatus, export_to = "../frontend/src/types/generated/grade.ts" {
        Pending => "PENDING",
        Approved => "APPROVED",
        Failed => "FAILED",
    }
}

define_string_enum! {
    /// 成绩列表排序字段
    GradeSortBy, export_to = "../frontend/src/types/generated/grade.ts" {
        CreatedAt => "createdAt",
        FinalGrade => "finalGrade",
    }
}

impl Default for GradeSortBy {
    fn default() -> Self {
        GradeSortBy::CreatedAt
    }
}

impl GradeStatus {
    /// 根据总评判定是否通过
    pub fn from_final_grade(final_grade: f64) -> Self {
        if final_grade >= PASSING_GRADE {
            GradeStatus::Approved
        } else {
            GradeStatus::Failed
        }
    }
}

/// 计算总评：三次考试成绩齐全时取平均值，否则仍为待定
pub fn compute_final_grade(
    partial1: Option<f64>,
    partial2: Option<f64>,
    partial3: Option<f64>,
) -> (Option<f64>, GradeStatus) {
    match (partial1, partial2, partial3) {
        (Some(p1), Some(p2), Some(p3)) => {
            let mean = (p1 + p2 + p3) / 3.0;
            (Some(mean), GradeStatus::from_final_grade(mean))
        }
        _ => (None, GradeStatus::Pending),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub student: Option<Box<Student>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub course: Option<Box<Course>>,
    pub partial1: Option<f64>,
    pub partial2: Option<f64>,
    pub partial3: Option<f64>,
    pub final_grade: Option<f64>,
    pub status: GradeStatus,
    pub comments: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_grade_is_mean_of_partials() {
        let (final_grade, status) = compute_final_grade(Some(7.0), Some(8.0), Some(9.0));
        assert_eq!(final_grade, Some(8.0));
        assert_eq!(status, GradeStatus::Approved);
    }

    #[test]
    fn test_failing_mean() {
        let (final_grade, status) = compute_final_grade(Some(5.0), Some(6.0), Some(4.0));
        assert_eq!(final_grade, Some(5.0));
        assert_eq!(status, GradeStatus::Failed);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let (final_grade, status) = compute_final_grade(Some(6.0), Some(6.0), Some(6.0));
        assert_eq!(final_grade, Some(6.0));
        assert_eq!(status, GradeStatus::Approved);

        let (_, status) = compute_final_grade(Some(5.0), Some(6.0), Some(6.5));
        assert_eq!(status, GradeStatus::Failed);
    }

    #[test]
    fn test_incomplete_partials_stay_pending() {
        assert_eq!(
            compute_final_grade(Some(9.0), Some(9.0), None),
            (None, GradeStatus::Pending)
        );
        assert_eq!(
            compute_final_grade(None, None, None),
            (None, GradeStatus::Pending)
        );
    }

    #[test]
    fn test_status_from_final_grade() {
        assert_eq!(GradeStatus::from_final_grade(10.0), GradeStatus::Approved);
        assert_eq!(GradeStatus::from_final_grade(5.99), GradeStatus::Failed);
    }
}
