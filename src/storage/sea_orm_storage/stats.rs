//! 统计查询

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::Entity as Enrollments;
use crate::entity::professors::Entity as Professors;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, UniAdminError};
use crate::models::{
    courses::entities::CourseStatus, stats::responses::UniversityStats,
    students::entities::StudentStatus,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 系统概览统计
    pub async fn get_stats_impl(&self) -> Result<UniversityStats> {
        let total_students = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("统计学生总数失败: {e}")))?;

        let total_professors = Professors::find()
            .count(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("统计教师总数失败: {e}")))?;

        let total_courses = Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("统计课程总数失败: {e}")))?;

        let total_enrollments = Enrollments::find()
            .count(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("统计选课总数失败: {e}")))?;

        let active_courses = Courses::find()
            .filter(CourseColumn::Status.eq(CourseStatus::Active.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("统计开放课程失败: {e}")))?;

        let graduated_students = Students::find()
            .filter(StudentColumn::Status.eq(StudentStatus::Graduated.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("统计毕业学生失败: {e}")))?;

        Ok(UniversityStats {
            total_students: total_students as i64,
            total_professors: total_professors as i64,
            total_courses: total_courses as i64,
            total_enrollments: total_enrollments as i64,
            active_courses: active_courses as i64,
            graduated_students: graduated_students as i64,
        })
    }
}
