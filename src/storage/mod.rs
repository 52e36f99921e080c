use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::{CreateEnrollmentRequest, EnrollmentListQuery},
        responses::EnrollmentListResponse,
    },
    grades::{
        entities::Grade,
        requests::{GradeListQuery, GradeRecord},
        responses::GradeListResponse,
    },
    professors::{
        entities::Professor,
        requests::{CreateProfessorRequest, ProfessorListQuery, UpdateProfessorRequest},
        responses::ProfessorListResponse,
    },
    stats::responses::UniversityStats,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 获取学生详情（含选课与成绩）
    async fn get_student_detail(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_carnet(&self, carnet: &str) -> Result<Option<Student>>;
    // 通过邮箱获取学生信息
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 按姓名或学号快速搜索
    async fn search_students(&self, keyword: &str) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生，同时回退其所选课程的人数
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor>;
    // 通过ID获取教师信息
    async fn get_professor_by_id(&self, id: i64) -> Result<Option<Professor>>;
    // 获取教师详情（含授课列表）
    async fn get_professor_detail(&self, id: i64) -> Result<Option<Professor>>;
    // 通过工号获取教师信息
    async fn get_professor_by_employee_id(&self, employee_id: &str) -> Result<Option<Professor>>;
    // 通过邮箱获取教师信息
    async fn get_professor_by_email(&self, email: &str) -> Result<Option<Professor>>;
    // 列出教师
    async fn list_professors_with_pagination(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse>;
    // 更新教师信息
    async fn update_professor(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Option<Professor>>;
    // 删除教师
    async fn delete_professor(&self, id: i64) -> Result<bool>;
    // 统计教师名下课程数
    async fn count_professor_courses(&self, professor_id: i64) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 获取课程详情（含教师与选课学生）
    async fn get_course_detail(&self, id: i64) -> Result<Option<Course>>;
    // 通过课程代码获取课程信息
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 列出仍有名额的开放课程
    async fn list_available_courses(&self) -> Result<Vec<Course>>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest)
    -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    // 选课（事务内校验并占用名额）
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 通过ID获取选课记录（含学生与课程）
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    // 列出选课记录
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    // 列出学生的选课记录
    async fn list_student_enrollments(&self, student_id: i64) -> Result<Vec<Enrollment>>;
    // 列出课程的选课记录
    async fn list_course_enrollments(&self, course_id: i64) -> Result<Vec<Enrollment>>;
    // 更新选课状态
    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    // 退课（事务内释放名额）
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 录入成绩
    async fn create_grade(
        &self,
        student_id: i64,
        course_id: i64,
        record: GradeRecord,
    ) -> Result<Grade>;
    // 通过ID获取成绩（含学生与课程）
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 获取学生在某课程的成绩
    async fn get_grade_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Grade>>;
    // 列出成绩
    async fn list_grades_with_pagination(&self, query: GradeListQuery)
    -> Result<GradeListResponse>;
    // 列出学生的成绩
    async fn list_student_grades(&self, student_id: i64) -> Result<Vec<Grade>>;
    // 列出课程的成绩
    async fn list_course_grades(&self, course_id: i64) -> Result<Vec<Grade>>;
    // 更新成绩
    async fn update_grade(&self, id: i64, record: GradeRecord) -> Result<Option<Grade>>;
    // 删除成绩
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 统计
    async fn get_stats(&self) -> Result<UniversityStats>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
