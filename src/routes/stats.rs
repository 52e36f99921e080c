use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::MessageResponse;
use crate::services::StatsService;

// 懒加载的全局 StatsService 实例
static STATS_SERVICE: Lazy<StatsService> = Lazy::new(StatsService::new_lazy);

pub async fn get_stats(request: HttpRequest) -> ActixResult<HttpResponse> {
    STATS_SERVICE.get_stats(&request).await
}

// 服务存活检查
pub async fn api_root() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(MessageResponse::new("University Management API - Running")))
}

// 配置路由
pub fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api", web::get().to(api_root))
        .route("/api/stats", web::get().to(get_stats));
}
