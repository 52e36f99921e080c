use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::entities::{Student, StudentStatus};
use crate::models::students::requests::{StudentListParams, StudentListQuery};
use crate::models::{ErrorCode, parse_status_filter};
use crate::services::{bad_request, internal_error};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let status = match parse_status_filter::<StudentStatus>(params.status.as_deref()) {
        Ok(status) => status,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let (page, limit) = params.pagination.normalized();
    let query = StudentListQuery {
        page,
        limit,
        sort_by: params.sort_by.unwrap_or_default(),
        order: params.order.unwrap_or_default(),
        search: params.search,
        status,
        career: params.career,
    };

    match storage.list_students_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(internal_error("Error fetching students", &e)),
    }
}

pub async fn search_students(
    service: &StudentService,
    request: &HttpRequest,
    keyword: Option<String>,
) -> ActixResult<HttpResponse> {
    let keyword = keyword.unwrap_or_default();
    let keyword = keyword.trim();
    // 空关键字不做全表扫描
    if keyword.is_empty() {
        return Ok(HttpResponse::Ok().json(Vec::<Student>::new()));
    }

    let storage = service.get_storage(request);
    match storage.search_students(keyword).await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => Ok(internal_error("Error searching students", &e)),
    }
}
