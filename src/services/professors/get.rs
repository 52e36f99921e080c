use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::ErrorCode;
use crate::services::{internal_error, not_found};

pub async fn get_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    professor_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_professor_detail(professor_id).await {
        Ok(Some(professor)) => Ok(HttpResponse::Ok().json(professor)),
        Ok(None) => Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        Err(e) => Ok(internal_error("Error fetching professor", &e)),
    }
}
