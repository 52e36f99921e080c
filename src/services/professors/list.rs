use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::professors::entities::ProfessorStatus;
use crate::models::professors::requests::{ProfessorListParams, ProfessorListQuery};
use crate::models::{ErrorCode, parse_status_filter};
use crate::services::{bad_request, internal_error};

pub async fn list_professors(
    service: &ProfessorService,
    request: &HttpRequest,
    params: ProfessorListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let status = match parse_status_filter::<ProfessorStatus>(params.status.as_deref()) {
        Ok(status) => status,
        Err(msg) => return Ok(bad_request(ErrorCode::BadRequest, msg)),
    };

    let (page, limit) = params.pagination.normalized();
    let query = ProfessorListQuery {
        page,
        limit,
        sort_by: params.sort_by.unwrap_or_default(),
        order: params.order.unwrap_or_default(),
        search: params.search,
        status,
        department: params.department,
    };

    match storage.list_professors_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(internal_error("Error fetching professors", &e)),
    }
}
