use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::services::{bad_request, internal_error, not_found};

const HAS_COURSES_MESSAGE: &str = "Professor has assigned courses and cannot be deleted";

pub async fn delete_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    professor_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_professor_courses(professor_id).await {
        Ok(0) => {}
        Ok(_) => return Ok(bad_request(ErrorCode::ProfessorHasCourses, HAS_COURSES_MESSAGE)),
        Err(e) => return Ok(internal_error("Error deleting professor", &e)),
    }

    match storage.delete_professor(professor_id).await {
        Ok(true) => {
            info!("Professor {} deleted", professor_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        // 检查之后新分配了课程，由外键约束拦截
        Err(UniAdminError::Validation(_)) => {
            Ok(bad_request(ErrorCode::ProfessorHasCourses, HAS_COURSES_MESSAGE))
        }
        Err(e) => Ok(internal_error("Error deleting professor", &e)),
    }
}
