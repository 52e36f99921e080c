//! 成绩存储操作

use super::{Include, SeaOrmStorage, write_error};
use crate::entity::grades::{ActiveModel, Column, Entity as Grades, Model};
use crate::errors::{Result, UniAdminError};
use crate::models::{
    PaginationInfo,
    grades::{
        entities::{Grade, GradeSortBy},
        requests::{GradeListQuery, GradeRecord},
        responses::GradeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 录入成绩
    pub async fn create_grade_impl(
        &self,
        student_id: i64,
        course_id: i64,
        record: GradeRecord,
    ) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            partial1: Set(record.partial1),
            partial2: Set(record.partial2),
            partial3: Set(record.partial3),
            final_grade: Set(record.final_grade),
            status: Set(record.status.to_string()),
            comments: Set(record.comments),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("录入成绩失败", e))?;

        self.attach_grade_relations(vec![result], Include::STUDENT_AND_COURSE)
            .await?
            .pop()
            .ok_or_else(|| UniAdminError::database_operation("录入成绩后读取失败"))
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let Some(model) = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询成绩失败: {e}")))?
        else {
            return Ok(None);
        };

        Ok(self
            .attach_grade_relations(vec![model], Include::STUDENT_AND_COURSE)
            .await?
            .pop())
    }

    /// 获取学生在指定课程的成绩
    pub async fn get_grade_by_student_and_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 分页列出成绩
    pub async fn list_grades_with_pagination_impl(
        &self,
        query: GradeListQuery,
    ) -> Result<GradeListResponse> {
        let page = query.page;
        let size = query.limit;

        let mut select = Grades::find();

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            let student_ids = self.find_student_ids_matching(keyword).await?;
            let course_ids = self.find_course_ids_matching(keyword).await?;
            select = select.filter(
                Condition::any()
                    .add(Column::StudentId.is_in(student_ids))
                    .add(Column::CourseId.is_in(course_ids)),
            );
        }

        let sort_column = match query.sort_by {
            GradeSortBy::CreatedAt => Column::CreatedAt,
            GradeSortBy::FinalGrade => Column::FinalGrade,
        };
        select = select
            .order_by(sort_column, query.order.into())
            .order_by(Column::Id, query.order.into());

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询成绩总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询成绩页数失败: {e}")))?;

        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(GradeListResponse {
            grades: self
                .attach_grade_relations(models, Include::STUDENT_AND_COURSE)
                .await?,
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: size as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出学生的成绩（含课程及授课教师）
    pub async fn list_student_grades_impl(&self, student_id: i64) -> Result<Vec<Grade>> {
        let models = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生成绩失败: {e}")))?;

        self.attach_grade_relations(models, Include::COURSE_WITH_PROFESSOR)
            .await
    }

    /// 列出课程的成绩（含学生）
    pub async fn list_course_grades_impl(&self, course_id: i64) -> Result<Vec<Grade>> {
        let models = Grades::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程成绩失败: {e}")))?;

        self.attach_grade_relations(models, Include::STUDENT).await
    }

    /// 更新成绩
    pub async fn update_grade_impl(&self, id: i64, record: GradeRecord) -> Result<Option<Grade>> {
        let existing = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询成绩失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            partial1: Set(record.partial1),
            partial2: Set(record.partial2),
            partial3: Set(record.partial3),
            final_grade: Set(record.final_grade),
            status: Set(record.status.to_string()),
            comments: Set(record.comments),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 为成绩附加学生与课程信息
    async fn attach_grade_relations(
        &self,
        models: Vec<Model>,
        include: Include,
    ) -> Result<Vec<Grade>> {
        let student_map = if include.student {
            self.load_student_map(models.iter().map(|m| m.student_id).collect())
                .await?
        } else {
            Default::default()
        };
        let course_map = if include.course {
            self.load_course_map(
                models.iter().map(|m| m.course_id).collect(),
                include.professor,
            )
            .await?
        } else {
            Default::default()
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let mut grade = m.into_grade();
                grade.student = student_map.get(&grade.student_id).cloned().map(Box::new);
                grade.course = course_map.get(&grade.course_id).cloned().map(Box::new);
                grade
            })
            .collect())
    }
}
