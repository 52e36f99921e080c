use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::models::ErrorCode;
use crate::models::enrollments::requests::UpdateEnrollmentRequest;
use crate::services::{internal_error, not_found};

pub async fn update_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
    update_data: UpdateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_enrollment_status(enrollment_id, update_data.status)
        .await
    {
        Ok(Some(enrollment)) => {
            info!(
                "Enrollment {} status changed to {}",
                enrollment.id, enrollment.status
            );
            Ok(HttpResponse::Ok().json(enrollment))
        }
        Ok(None) => Ok(not_found(ErrorCode::EnrollmentNotFound, "Enrollment not found")),
        Err(e) => Ok(internal_error("Error updating enrollment", &e)),
    }
}
