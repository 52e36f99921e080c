#![allow(dead_code, unused_macros)]

use std::sync::Arc;
use tempfile::TempDir;

use rust_uniadmin::config::DatabaseConfig;
use rust_uniadmin::storage::Storage;
use rust_uniadmin::storage::sea_orm_storage::SeaOrmStorage;

/// 每个测试独占一个临时 SQLite 数据库
pub struct TestContext {
    _dir: TempDir,
    pub storage: Arc<dyn Storage>,
}

pub async fn setup() -> TestContext {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = dir.path().join("university.db");
    let config = DatabaseConfig {
        url: url.to_string_lossy().into_owned(),
        pool_size: 5,
        timeout: 30,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("connect test database");

    TestContext {
        _dir: dir,
        storage: Arc::new(storage),
    }
}

/// 构建挂载全部 API 路由的测试服务
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.storage.clone()))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_uniadmin::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(rust_uniadmin::utils::query_error_handler),
                )
                .configure(rust_uniadmin::routes::configure_api_routes),
        )
        .await
    };
}

/// 发送请求，返回状态码与 JSON 响应体（空响应体为 Null）
macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        let json: serde_json::Value = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).expect("response body is JSON")
        };
        (status, json)
    }};
}

macro_rules! get {
    ($app:expr, $uri:expr) => {
        call!($app, actix_web::test::TestRequest::get().uri(&$uri))
    };
}

macro_rules! post {
    ($app:expr, $uri:expr, $body:expr) => {
        call!(
            $app,
            actix_web::test::TestRequest::post()
                .uri(&$uri)
                .set_json(&$body)
        )
    };
}

macro_rules! put {
    ($app:expr, $uri:expr, $body:expr) => {
        call!(
            $app,
            actix_web::test::TestRequest::put()
                .uri(&$uri)
                .set_json(&$body)
        )
    };
}

macro_rules! delete {
    ($app:expr, $uri:expr) => {
        call!($app, actix_web::test::TestRequest::delete().uri(&$uri))
    };
}

/// 创建资源并返回新记录的 id
macro_rules! create {
    ($app:expr, $uri:expr, $body:expr) => {{
        let (status, json) = post!($app, $uri, $body);
        assert_eq!(status, actix_web::http::StatusCode::CREATED, "{}", json);
        json["id"].as_i64().expect("created resource has id")
    }};
}

pub fn student_body(carnet: &str) -> serde_json::Value {
    serde_json::json!({
        "carnet": carnet,
        "firstName": "Ana",
        "lastName": "Lopez",
        "email": format!("{}@uni.edu", carnet.to_lowercase()),
        "phone": "555-0100",
        "career": "Computer Science"
    })
}

pub fn professor_body(employee_id: &str) -> serde_json::Value {
    serde_json::json!({
        "employeeId": employee_id,
        "firstName": "Luis",
        "lastName": "Martinez",
        "email": format!("{}@uni.edu", employee_id.to_lowercase()),
        "phone": "555-0200",
        "specialty": "Databases",
        "department": "Engineering"
    })
}

pub fn course_body(code: &str, professor_id: i64, max_capacity: i32) -> serde_json::Value {
    serde_json::json!({
        "code": code,
        "name": format!("Course {code}"),
        "description": "Introductory course",
        "credits": 4,
        "professorId": professor_id,
        "maxCapacity": max_capacity,
        "schedule": "Mon/Wed 10:00-12:00",
        "semester": "2025-1"
    })
}
