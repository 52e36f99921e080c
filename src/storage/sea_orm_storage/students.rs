//! 学生存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, write_error};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::grades::{Column as GradeColumn, Entity as Grades};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, UniAdminError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentSortBy, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::like_contains;
use sea_orm::sea_query::{Expr, ExprTrait, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let enrollment_date = req.enrollment_date.map(|d| d.timestamp()).unwrap_or(now);
        let status = req.status.unwrap_or(StudentStatus::Active);

        let model = ActiveModel {
            carnet: Set(req.carnet),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            phone: Set(req.phone),
            career: Set(req.career),
            enrollment_date: Set(enrollment_date),
            status: Set(status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 获取学生详情，附带选课记录与成绩（均含课程信息）
    pub async fn get_student_detail_impl(&self, id: i64) -> Result<Option<Student>> {
        let Some(mut student) = self.get_student_by_id_impl(id).await? else {
            return Ok(None);
        };

        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::StudentId.eq(id))
            .order_by_desc(EnrollmentColumn::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生选课失败: {e}")))?;

        let grades = Grades::find()
            .filter(GradeColumn::StudentId.eq(id))
            .order_by_desc(GradeColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生成绩失败: {e}")))?;

        let course_ids: Vec<i64> = enrollments
            .iter()
            .map(|e| e.course_id)
            .chain(grades.iter().map(|g| g.course_id))
            .collect();
        let course_map = self.load_course_map(course_ids, false).await?;

        student.enrollments = Some(
            enrollments
                .into_iter()
                .map(|m| {
                    let mut enrollment = m.into_enrollment();
                    enrollment.course = course_map.get(&enrollment.course_id).cloned().map(Box::new);
                    enrollment
                })
                .collect(),
        );
        student.grades = Some(
            grades
                .into_iter()
                .map(|m| {
                    let mut grade = m.into_grade();
                    grade.course = course_map.get(&grade.course_id).cloned().map(Box::new);
                    grade
                })
                .collect(),
        );

        Ok(Some(student))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_carnet_impl(&self, carnet: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Carnet.eq(carnet))
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page;
        let size = query.limit;

        let mut select = Students::find();

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        // 专业筛选
        if let Some(ref career) = query.career
            && !career.trim().is_empty()
        {
            select = select.filter(Column::Career.eq(career.trim()));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.like(like_contains(keyword)))
                    .add(Column::LastName.like(like_contains(keyword)))
                    .add(Column::Carnet.like(like_contains(keyword)))
                    .add(Column::Email.like(like_contains(keyword))),
            );
        }

        // 排序
        let sort_column = match query.sort_by {
            StudentSortBy::CreatedAt => Column::CreatedAt,
            StudentSortBy::FirstName => Column::FirstName,
            StudentSortBy::LastName => Column::LastName,
            StudentSortBy::Carnet => Column::Carnet,
        };
        select = select
            .order_by(sort_column, query.order.into())
            .order_by(Column::Id, query.order.into());

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            students: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: size as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 按姓名或学号搜索学生
    pub async fn search_students_impl(&self, keyword: &str) -> Result<Vec<Student>> {
        let keyword = keyword.trim();

        let results = Students::find()
            .filter(
                Condition::any()
                    .add(Column::FirstName.like(like_contains(keyword)))
                    .add(Column::LastName.like(like_contains(keyword)))
                    .add(Column::Carnet.like(like_contains(keyword))),
            )
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("搜索学生失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(carnet) = update.carnet {
            model.carnet = Set(carnet);
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }
        if let Some(career) = update.career {
            model.career = Set(career);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    ///
    /// 在同一事务中回退该学生所选课程的人数，再删除其选课、成绩和学生本身。
    /// 事务以写操作开头，学生不存在时回滚。
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("开启事务失败: {e}")))?;

        let enrolled_courses = Query::select()
            .column(EnrollmentColumn::CourseId)
            .from(Enrollments)
            .and_where(EnrollmentColumn::StudentId.eq(id))
            .to_owned();

        // (student_id, course_id) 唯一，每门课程只需减一
        Courses::update_many()
            .col_expr(
                CourseColumn::CurrentEnrollment,
                Expr::col(CourseColumn::CurrentEnrollment).sub(1),
            )
            .col_expr(
                CourseColumn::UpdatedAt,
                Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(CourseColumn::Id.in_subquery(enrolled_courses))
            .filter(CourseColumn::CurrentEnrollment.gt(0))
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("回退课程人数失败: {e}")))?;

        Enrollments::delete_many()
            .filter(EnrollmentColumn::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除学生选课失败: {e}")))?;

        Grades::delete_many()
            .filter(GradeColumn::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除学生成绩失败: {e}")))?;

        let result = Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("删除学生失败: {e}")))?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 批量加载学生，返回 ID 到学生的映射
    pub(super) async fn load_student_map(&self, ids: Vec<i64>) -> Result<HashMap<i64, Student>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let students = Students::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询学生信息失败: {e}")))?;

        Ok(students
            .into_iter()
            .map(|m| (m.id, m.into_student()))
            .collect())
    }

    /// 按关键字匹配学生 ID（姓名或学号）
    pub(super) async fn find_student_ids_matching(&self, keyword: &str) -> Result<Vec<i64>> {
        let students = Students::find()
            .filter(
                Condition::any()
                    .add(Column::FirstName.like(like_contains(keyword)))
                    .add(Column::LastName.like(like_contains(keyword)))
                    .add(Column::Carnet.like(like_contains(keyword))),
            )
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("搜索学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.id).collect())
    }
}
