//! 教师存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, write_error};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::professors::{ActiveModel, Column, Entity as Professors};
use crate::errors::{Result, UniAdminError};
use crate::models::{
    PaginationInfo,
    professors::{
        entities::{Professor, ProfessorSortBy, ProfessorStatus},
        requests::{CreateProfessorRequest, ProfessorListQuery, UpdateProfessorRequest},
        responses::ProfessorListResponse,
    },
};
use crate::utils::like_contains;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_professor_impl(&self, req: CreateProfessorRequest) -> Result<Professor> {
        let now = chrono::Utc::now().timestamp();
        let hire_date = req.hire_date.map(|d| d.timestamp()).unwrap_or(now);
        let status = req.status.unwrap_or(ProfessorStatus::Active);

        let model = ActiveModel {
            employee_id: Set(req.employee_id),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            phone: Set(req.phone),
            specialty: Set(req.specialty),
            department: Set(req.department),
            hire_date: Set(hire_date),
            status: Set(status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建教师失败", e))?;

        Ok(result.into_professor())
    }

    /// 通过 ID 获取教师
    pub async fn get_professor_by_id_impl(&self, id: i64) -> Result<Option<Professor>> {
        let result = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 获取教师详情，附带其授课列表
    pub async fn get_professor_detail_impl(&self, id: i64) -> Result<Option<Professor>> {
        let Some(mut professor) = self.get_professor_by_id_impl(id).await? else {
            return Ok(None);
        };

        let courses = Courses::find()
            .filter(CourseColumn::ProfessorId.eq(id))
            .order_by_asc(CourseColumn::Code)
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师课程失败: {e}")))?;

        professor.courses = Some(courses.into_iter().map(|m| m.into_course()).collect());

        Ok(Some(professor))
    }

    /// 通过工号获取教师
    pub async fn get_professor_by_employee_id_impl(
        &self,
        employee_id: &str,
    ) -> Result<Option<Professor>> {
        let result = Professors::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 通过邮箱获取教师
    pub async fn get_professor_by_email_impl(&self, email: &str) -> Result<Option<Professor>> {
        let result = Professors::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 分页列出教师
    pub async fn list_professors_with_pagination_impl(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse> {
        let page = query.page;
        let size = query.limit;

        let mut select = Professors::find();

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(ref department) = query.department
            && !department.trim().is_empty()
        {
            select = select.filter(Column::Department.eq(department.trim()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.like(like_contains(keyword)))
                    .add(Column::LastName.like(like_contains(keyword)))
                    .add(Column::EmployeeId.like(like_contains(keyword)))
                    .add(Column::Email.like(like_contains(keyword))),
            );
        }

        let sort_column = match query.sort_by {
            ProfessorSortBy::CreatedAt => Column::CreatedAt,
            ProfessorSortBy::FirstName => Column::FirstName,
            ProfessorSortBy::LastName => Column::LastName,
            ProfessorSortBy::EmployeeId => Column::EmployeeId,
        };
        select = select
            .order_by(sort_column, query.order.into())
            .order_by(Column::Id, query.order.into());

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师页数失败: {e}")))?;

        let professors = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(ProfessorListResponse {
            professors: professors.into_iter().map(|m| m.into_professor()).collect(),
            pagination: PaginationInfo {
                total: total as i64,
                page: page as i64,
                limit: size as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师信息
    pub async fn update_professor_impl(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<Professor>> {
        let existing = self.get_professor_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(employee_id) = update.employee_id {
            model.employee_id = Set(employee_id);
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
        if let Some(specialty) = update.specialty {
            model.specialty = Set(specialty);
        }
        if let Some(department) = update.department {
            model.department = Set(department);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新教师失败", e))?;

        self.get_professor_by_id_impl(id).await
    }

    /// 删除教师（仍有课程时由外键约束拒绝）
    pub async fn delete_professor_impl(&self, id: i64) -> Result<bool> {
        let result = Professors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除教师失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教师名下课程数
    pub async fn count_professor_courses_impl(&self, professor_id: i64) -> Result<u64> {
        Courses::find()
            .filter(CourseColumn::ProfessorId.eq(professor_id))
            .count(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("统计教师课程失败: {e}")))
    }

    /// 批量加载教师，返回 ID 到教师的映射
    pub(super) async fn load_professor_map(
        &self,
        ids: Vec<i64>,
    ) -> Result<HashMap<i64, Professor>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let professors = Professors::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| UniAdminError::database_operation(format!("查询教师信息失败: {e}")))?;

        Ok(professors
            .into_iter()
            .map(|m| (m.id, m.into_professor()))
            .collect())
    }
}
