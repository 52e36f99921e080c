use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::EnrollmentService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::enrollments::entities::{
    ALREADY_ENROLLED, NO_SEATS_AVAILABLE, STUDENT_NOT_FOUND,
};
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::services::{bad_request, internal_error, not_found};

pub async fn create_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_data: CreateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course_id = enrollment_data.course_id;

    // 课程、学生、开课状态、重复与名额均在存储层同一事务内校验
    match storage.create_enrollment(enrollment_data).await {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in course {}",
                enrollment.student_id, enrollment.course_id
            );
            Ok(HttpResponse::Created().json(enrollment))
        }
        Err(UniAdminError::NotFound(msg)) => {
            let code = if msg == STUDENT_NOT_FOUND {
                ErrorCode::StudentNotFound
            } else {
                ErrorCode::CourseNotFound
            };
            Ok(not_found(code, msg))
        }
        Err(UniAdminError::Conflict(_)) => Ok(bad_request(
            ErrorCode::EnrollmentAlreadyExists,
            ALREADY_ENROLLED,
        )),
        Err(UniAdminError::Validation(msg)) if msg == NO_SEATS_AVAILABLE => {
            warn!("Course {} is full", course_id);
            Ok(bad_request(ErrorCode::NoSeatsAvailable, msg))
        }
        Err(UniAdminError::Validation(msg)) => Ok(bad_request(ErrorCode::CourseInvalid, msg)),
        Err(e) => Ok(internal_error("Error creating enrollment", &e)),
    }
}
