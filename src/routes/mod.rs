pub mod courses;

pub mod enrollments;

pub mod grades;

pub mod professors;

pub mod stats;

pub mod students;

pub mod frontend;

pub use courses::configure_courses_routes;
pub use enrollments::configure_enrollments_routes;
pub use frontend::configure_frontend_routes;
pub use grades::configure_grades_routes;
pub use professors::configure_professors_routes;
pub use stats::configure_stats_routes;
pub use students::configure_students_routes;

use actix_web::web;

/// 注册全部 API 路由（不含前端 fallback）
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_stats_routes)
        .configure(configure_students_routes)
        .configure(configure_professors_routes)
        .configure(configure_courses_routes)
        .configure(configure_enrollments_routes)
        .configure(configure_grades_routes);
}
