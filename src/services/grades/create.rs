use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{GradeService, normalize_comments, validate_partials};
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::grades::entities::compute_final_grade;
use crate::models::grades::requests::{CreateGradeRequest, GradeRecord};
use crate::services::{bad_request, internal_error, not_found};

const GRADE_EXISTS: &str = "Grade already exists for this student and course";

pub async fn create_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_partials(
        grade_data.partial1,
        grade_data.partial2,
        grade_data.partial3,
    ) {
        return Ok(bad_request(ErrorCode::GradeInvalid, msg));
    }

    let storage = service.get_storage(request);

    match storage.get_student_by_id(grade_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(internal_error("Error creating grade", &e)),
    }

    match storage.get_course_by_id(grade_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => return Ok(internal_error("Error creating grade", &e)),
    }

    let (final_grade, status) = compute_final_grade(
        grade_data.partial1,
        grade_data.partial2,
        grade_data.partial3,
    );
    let record = GradeRecord {
        partial1: grade_data.partial1,
        partial2: grade_data.partial2,
        partial3: grade_data.partial3,
        final_grade,
        status,
        comments: normalize_comments(grade_data.comments),
    };

    // (student_id, course_id) 唯一索引冲突即为重复录入
    match storage
        .create_grade(grade_data.student_id, grade_data.course_id, record)
        .await
    {
        Ok(grade) => {
            info!(
                "Grade {} created for student {} in course {} ({})",
                grade.id, grade.student_id, grade.course_id, grade.status
            );
            Ok(HttpResponse::Created().json(grade))
        }
        Err(UniAdminError::Conflict(_)) => {
            Ok(bad_request(ErrorCode::GradeAlreadyExists, GRADE_EXISTS))
        }
        Err(UniAdminError::Validation(msg)) => Ok(bad_request(ErrorCode::GradeInvalid, msg)),
        Err(e) => Ok(internal_error("Error creating grade", &e)),
    }
}
