use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::professors::requests::{
    CreateProfessorRequest, ProfessorListParams, UpdateProfessorRequest,
};
use crate::services::ProfessorService;
use crate::utils::SafeIDI64;

static PROFESSOR_SERVICE: Lazy<ProfessorService> = Lazy::new(ProfessorService::new_lazy);

pub async fn list_professors(
    req: HttpRequest,
    query: web::Query<ProfessorListParams>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .list_professors(&req, query.into_inner())
        .await
}

pub async fn get_professor(
    req: HttpRequest,
    professor_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.get_professor(&req, professor_id.0).await
}

pub async fn create_professor(
    req: HttpRequest,
    professor_data: web::Json<CreateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .create_professor(&req, professor_data.into_inner())
        .await
}

pub async fn update_professor(
    req: HttpRequest,
    professor_id: SafeIDI64,
    update_data: web::Json<UpdateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .update_professor(&req, professor_id.0, update_data.into_inner())
        .await
}

pub async fn delete_professor(
    req: HttpRequest,
    professor_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .delete_professor(&req, professor_id.0)
        .await
}

// 配置路由
pub fn configure_professors_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/professors")
            .service(
                web::resource("")
                    .route(web::get().to(list_professors))
                    .route(web::post().to(create_professor)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_professor))
                    .route(web::put().to(update_professor))
                    .route(web::delete().to(delete_professor)),
            ),
    );
}
