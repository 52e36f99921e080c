pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod professors;
pub mod stats;
pub mod students;

pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use professors::ProfessorService;
pub use stats::StatsService;
pub use students::StudentService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::UniAdminError;
use crate::models::{ErrorCode, ErrorResponse};

/// 记录错误日志并返回 500
pub(crate) fn internal_error(context: &str, err: &UniAdminError) -> HttpResponse {
    error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        ErrorCode::InternalServerError,
        context,
    ))
}

pub(crate) fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(code, message))
}

pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(code, message))
}
