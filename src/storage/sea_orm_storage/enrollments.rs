//! 选课存储操作
//!
//! 课程的 `current_enrollment` 与选课记录数在同一事务内同步维护：
//! 选课时以 `current_enrollment < max_capacity` 为条件原子加一，
//! 退课时以 `current_enrollment > 0` 为条件原子减一。

use super::{Include, SeaOrmStorage, write_error};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments, Model};
use crate::entity::students::Entity as Students;
use crate::errors::{Result, UniAdminError};
use crate::models::{
    PaginationInfo,
    courses::entities::CourseStatus,
    enrollments::{
        entities::{
            ALREADY_ENROLLED, COURSE_NOT_ACTIVE, COURSE_NOT_FOUND, Enrollment, EnrollmentSortBy,
            EnrollmentStatus, NO_SEATS_AVAILABLE, STUDENT_NOT_FOUND,
        },
        requests::{CreateEnrollmentRequest, EnrollmentListQuery},
        responses::EnrollmentListResponse,
    },
};
use sea_orm::sea_query::{Expr, ExprTrait, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 选课
    ///
    /// 事务以条件加一开头，先拿到写锁再做校验；
    /// 任何校验失败都直接返回，事务随之回滚。
    pub async fn create_enrollment_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        // 名额占用：课程不存在、未开课或已满时影响行数为 0
        let claimed = Courses::update_many()
            .col_expr(
                CourseColumn::CurrentEnrollment,
                Expr::col(CourseColumn::CurrentEnrollment).add(1),
            )
            .col_expr(CourseColumn::UpdatedAt, Expr::value(now))
            .filter(CourseColumn::Id.eq(req.course_id))
            .filter(CourseColumn::Status.eq(CourseStatus::Active.as_str()))
            .filter(
                Expr::col(CourseColumn::CurrentEnrollment).lt(Expr::col(CourseColumn::MaxCapacity)),
            )
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("更新课程人数失败: {e}")))?
            .rows_affected
            > 0;

        let course = Courses::find_by_id(req.course_id)
            .one(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程失败: {e}")))?
            .ok_or_else(|| UniAdminError::not_found(COURSE_NOT_FOUND))?;

        Students::find_by_id(req.student_id)
            .one(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生失败: {e}")))?
            .ok_or_else(|| UniAdminError::not_found(STUDENT_NOT_FOUND))?;

        if course.status != CourseStatus::Active.as_str() {
            return Err(UniAdminError::validation(COURSE_NOT_ACTIVE));
        }

        let duplicate = Enrollments::find()
            .filter(Column::StudentId.eq(req.student_id))
            .filter(Column::CourseId.eq(req.course_id))
            .one(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询选课记录失败: {e}")))?;
        if duplicate.is_some() {
            return Err(UniAdminError::conflict(ALREADY_ENROLLED));
        }

        if !claimed {
            debug!(
                "课程 {} 名额已满，拒绝学生 {} 的选课",
                req.course_id, req.student_id
            );
            return Err(UniAdminError::validation(NO_SEATS_AVAILABLE));
        }

        let status = req.status.unwrap_or(EnrollmentStatus::Enrolled);
        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            enrollment_date: Set(now),
            status: Set(status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| write_error("创建选课记录失败", e))?;

        txn.commit()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_enrollment_by_id_impl(inserted.id)
            .await?
            .ok_or_else(|| UniAdminError::database_operation("创建选课记录后读取失败"))
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let Some(model) = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询选课记录失败: {e}")))?
        else {
            return Ok(None);
        };

        Ok(self
            .attach_enrollment_relations(vec![model], Include::STUDENT_AND_COURSE)
            .await?
            .pop())
    }

    /// 分页列出选课记录
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let page = query.page;
        let size = query.limit;

        let mut select = Enrollments::find();

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 按学生姓名/学号或课程名称/代码搜索
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
            EnrollmentSortBy::EnrollmentDate => Column::EnrollmentDate,
            EnrollmentSortBy::CreatedAt => Column::CreatedAt,
        };
        select = select
            .order_by(sort_column, query.order.into())
            .order_by(Column::Id, query.order.into());

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询选课总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询选课页数失败: {e}")))?;

        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(EnrollmentListResponse {
            enrollments: self
                .attach_enrollment_relations(models, Include::STUDENT_AND_COURSE)
                .await?,
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: size as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出学生的选课记录（含课程及授课教师）
    pub async fn list_student_enrollments_impl(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        let models = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生选课失败: {e}")))?;

        self.attach_enrollment_relations(models, Include::COURSE_WITH_PROFESSOR)
            .await
    }

    /// 列出课程的选课记录（含学生）
    pub async fn list_course_enrollments_impl(&self, course_id: i64) -> Result<Vec<Enrollment>> {
        let models = Enrollments::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询课程选课失败: {e}")))?;

        self.attach_enrollment_relations(models, Include::STUDENT)
            .await
    }

    /// 更新选课状态，不影响课程人数
    pub async fn update_enrollment_status_impl(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        let existing = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询选课记录失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("更新选课状态失败: {e}")))?;

        self.get_enrollment_by_id_impl(id).await
    }

    /// 退课
    ///
    /// 先按子查询回退课程人数，再删除记录；记录不存在时回滚。
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("开启事务失败: {e}")))?;

        let course_of_enrollment = Query::select()
            .column(Column::CourseId)
            .from(Enrollments)
            .and_where(Column::Id.eq(id))
            .to_owned();

        Courses::update_many()
            .col_expr(
                CourseColumn::CurrentEnrollment,
                Expr::col(CourseColumn::CurrentEnrollment).sub(1),
            )
            .col_expr(
                CourseColumn::UpdatedAt,
                Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(CourseColumn::Id.in_subquery(course_of_enrollment))
            .filter(CourseColumn::CurrentEnrollment.gt(0))
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("回退课程人数失败: {e}")))?;

        let result = Enrollments::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除选课记录失败: {e}")))?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 为选课记录附加学生与课程信息
    async fn attach_enrollment_relations(
        &self,
        models: Vec<Model>,
        include: Include,
    ) -> Result<Vec<Enrollment>> {
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
                let mut enrollment = m.into_enrollment();
                enrollment.student = student_map
                    .get(&enrollment.student_id)
                    .cloned()
                    .map(Box::new);
                enrollment.course = course_map.get(&enrollment.course_id).cloned().map(Box::new);
                enrollment
            })
            .collect())
    }
}
