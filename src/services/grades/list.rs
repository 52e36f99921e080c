use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::grades::entities::GradeStatus;
use crate::models::grades::requests::{GradeListParams, GradeListQuery};
use crate::models::{ErrorCode, parse_status_filter};
use crate::services::{bad_request, internal_error};

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    params: GradeListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let status = match parse_status_filter::<GradeStatus>(params.status.as_deref()) {
        Ok(status) => status,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let (page, limit) = params.pagination.normalized();
    let query = GradeListQuery {
        page,
        limit,
        sort_by: params.sort_by.unwrap_or_default(),
        order: params.order.unwrap_or_default(),
        search: params.search,
        status,
        student_id: params.student_id,
        course_id: params.course_id,
    };

    match storage.list_grades_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(internal_error("Error fetching grades", &e)),
    }
}

pub async fn list_student_grades(
    service: &GradeService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_student_grades(student_id).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(grades)),
        Err(e) => Ok(internal_error("Error fetching student grades", &e)),
    }
}

pub async fn list_course_grades(
    service: &GradeService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_course_grades(course_id).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(grades)),
        Err(e) => Ok(internal_error("Error fetching course grades", &e)),
    }
}
