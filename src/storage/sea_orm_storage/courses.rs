//! 课程存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, write_error};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Model as CourseModel};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::grades::{Column as GradeColumn, Entity as Grades};
use crate::errors::{Result, UniAdminError};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, CourseSortBy, CourseStatus},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::like_contains;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课程，初始选课人数为 0
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let status = req.status.unwrap_or(CourseStatus::Active);

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            description: Set(req.description),
            credits: Set(req.credits),
            professor_id: Set(req.professor_id),
            max_capacity: Set(req.max_capacity),
            current_enrollment: Set(0),
            schedule: Set(req.schedule),
            semester: Set(req.semester),
            status: Set(status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建课程失败", e))?;

        let mut courses = self.attach_professors(vec![result]).await?;
        courses
            .pop()
            .ok_or_else(|| UniAdminError::database_operation("创建课程后读取失败"))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 获取课程详情，附带授课教师与选课学生
    pub async fn get_course_detail_impl(&self, id: i64) -> Result<Option<Course>> {
        let Some(model) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let Some(mut course) = self.attach_professors(vec![model]).await?.pop() else {
            return Ok(None);
        };

        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::CourseId.eq(id))
            .order_by_desc(EnrollmentColumn::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程选课失败: {e}")))?;

        let student_ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();
        let student_map = self.load_student_map(student_ids).await?;

        course.enrollments = Some(
            enrollments
                .into_iter()
                .map(|m| {
                    let mut enrollment = m.into_enrollment();
                    enrollment.student = student_map
                        .get(&enrollment.student_id)
                        .cloned()
                        .map(Box::new);
                    enrollment
                })
                .collect(),
        );

        Ok(Some(course))
    }

    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程（含授课教师）
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page;
        let size = query.limit;

        let mut select = Courses::find();

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(professor_id) = query.professor_id {
            select = select.filter(Column::ProfessorId.eq(professor_id));
        }

        if let Some(ref semester) = query.semester
            && !semester.trim().is_empty()
        {
            select = select.filter(Column::Semester.eq(semester.trim()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(like_contains(keyword)))
                    .add(Column::Code.like(like_contains(keyword))),
            );
        }

        let sort_column = match query.sort_by {
            CourseSortBy::CreatedAt => Column::CreatedAt,
            CourseSortBy::Name => Column::Name,
            CourseSortBy::Code => Column::Code,
            CourseSortBy::Semester => Column::Semester,
        };
        select = select
            .order_by(sort_column, query.order.into())
            .order_by(Column::Id, query.order.into());

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程页数失败: {e}")))?;

        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            courses: self.attach_professors(models).await?,
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: size as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出开放且仍有名额的课程
    pub async fn list_available_courses_impl(&self) -> Result<Vec<Course>> {
        let models = Courses::find()
            .filter(Column::Status.eq(CourseStatus::Active.as_str()))
            .filter(Expr::col(Column::CurrentEnrollment).lt(Expr::col(Column::MaxCapacity)))
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询可选课程失败: {e}")))?;

        self.attach_professors(models).await
    }

    /// 更新课程信息
    ///
    /// 修改容量时附带 `current_enrollment <= 新容量` 条件，
    /// 条件不满足则不更新并返回校验错误。
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(credits) = update.credits {
            model.credits = Set(credits);
        }
        if let Some(professor_id) = update.professor_id {
            model.professor_id = Set(professor_id);
        }
        if let Some(max_capacity) = update.max_capacity {
            model.max_capacity = Set(max_capacity);
        }
        if let Some(schedule) = update.schedule {
            model.schedule = Set(schedule);
        }
        if let Some(semester) = update.semester {
            model.semester = Set(semester);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        let mut statement = Courses::update_many().set(model).filter(Column::Id.eq(id));
        if let Some(max_capacity) = update.max_capacity {
            statement = statement.filter(Column::CurrentEnrollment.lte(max_capacity));
        }

        let result = statement
            .exec(&self.db)
            .await
            .map_err(|e| write_error("更新课程失败", e))?;

        if result.rows_affected == 0 {
            return Err(UniAdminError::validation(
                "Max capacity cannot be lower than current enrollment",
            ));
        }

        let Some(model) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        Ok(self.attach_professors(vec![model]).await?.pop())
    }

    /// 删除课程，同时删除其选课与成绩记录
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("开启事务失败: {e}")))?;

        Enrollments::delete_many()
            .filter(EnrollmentColumn::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除课程选课失败: {e}")))?;

        Grades::delete_many()
            .filter(GradeColumn::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除课程成绩失败: {e}")))?;

        let result = Courses::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除课程失败: {e}")))?;

        // 课程不存在时回滚
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 为课程附加授课教师
    pub(super) async fn attach_professors(&self, models: Vec<CourseModel>) -> Result<Vec<Course>> {
        let professor_ids: Vec<i64> = models.iter().map(|m| m.professor_id).collect();
        let professor_map = self.load_professor_map(professor_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let mut course = m.into_course();
                course.professor = professor_map.get(&course.professor_id).cloned();
                course
            })
            .collect())
    }

    /// 批量加载课程，返回 ID 到课程的映射
    pub(super) async fn load_course_map(
        &self,
        ids: Vec<i64>,
        with_professor: bool,
    ) -> Result<HashMap<i64, Course>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Courses::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程信息失败: {e}")))?;

        let courses = if with_professor {
            self.attach_professors(models).await?
        } else {
            models.into_iter().map(|m| m.into_course()).collect()
        };

        Ok(courses.into_iter().map(|c| (c.id, c)).collect())
    }

    /// 按关键字匹配课程 ID（名称或代码）
    pub(super) async fn find_course_ids_matching(&self, keyword: &str) -> Result<Vec<i64>> {
        let courses = Courses::find()
            .filter(
                Condition::any()
                    .add(Column::Name.like(like_contains(keyword)))
                    .add(Column::Code.like(like_contains(keyword))),
            )
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("搜索课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.id).collect())
    }
}
