use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::entities::CourseStatus;
use crate::models::courses::requests::{CourseListParams, CourseListQuery};
use crate::models::{ErrorCode, parse_status_filter};
use crate::services::{bad_request, internal_error};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    params: CourseListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let status = match parse_status_filter::<CourseStatus>(params.status.as_deref()) {
        Ok(status) => status,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let (page, limit) = params.pagination.normalized();
    let query = CourseListQuery {
        page,
        limit,
        sort_by: params.sort_by.unwrap_or_default(),
        order: params.order.unwrap_or_default(),
        search: params.search,
        status,
        professor_id: params.professor_id,
        semester: params.semester,
    };

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(internal_error("Error fetching courses", &e)),
    }
}

pub async fn list_available_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_available_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(courses)),
        Err(e) => Ok(internal_error("Error fetching available courses", &e)),
    }
}
