use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::enrollments::requests::{EnrollmentListParams, EnrollmentListQuery};
use crate::models::{ErrorCode, parse_status_filter};
use crate::services::{bad_request, internal_error};

pub async fn list_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    params: EnrollmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let status = match parse_status_filter::<EnrollmentStatus>(params.status.as_deref()) {
        Ok(status) => status,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let (page, limit) = params.pagination.normalized();
    let query = EnrollmentListQuery {
        page,
        limit,
        sort_by: params.sort_by.unwrap_or_default(),
        order: params.order.unwrap_or_default(),
        search: params.search,
        status,
        student_id: params.student_id,
        course_id: params.course_id,
    };

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(internal_error("Error fetching enrollments", &e)),
    }
}

pub async fn list_student_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_student_enrollments(student_id).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(enrollments)),
        Err(e) => Ok(internal_error("Error fetching student enrollments", &e)),
    }
}

pub async fn list_course_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_course_enrollments(course_id).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(enrollments)),
        Err(e) => Ok(internal_error("Error fetching course enrollments", &e)),
    }
}
