#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::{course_body, professor_body, setup};

#[actix_web::test]
async fn test_professor_crud() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let id = create!(app, "/api/professors", professor_body("E-100"));

    let (status, professor) = get!(app, format!("/api/professors/{id}"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(professor["employeeId"], "E-100");
    assert_eq!(professor["status"], "ACTIVE");
    assert_eq!(professor["courses"], json!([]));

    let (status, updated) = put!(
        app,
        format!("/api/professors/{id}"),
        json!({ "department": "Mathematics", "status": "INACTIVE" })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["department"], "Mathematics");
    assert_eq!(updated["status"], "INACTIVE");
    assert_eq!(updated["firstName"], "Luis");

    let (status, _) = put!(app, "/api/professors/999", json!({ "department": "Physics" }));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete!(app, format!("/api/professors/{id}"));
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get!(app, format!("/api/professors/{id}"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Professor not found");
    assert_eq!(body["code"], 1100);
}

#[actix_web::test]
async fn test_professor_detail_lists_courses() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let id = create!(app, "/api/professors", professor_body("E-110"));
    create!(app, "/api/courses", course_body("SYS2", id, 20));
    create!(app, "/api/courses", course_body("SYS1", id, 20));

    let (status, professor) = get!(app, format!("/api/professors/{id}"));
    assert_eq!(status, StatusCode::OK);
    let courses = professor["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["code"], "SYS1");
    assert_eq!(courses[1]["code"], "SYS2");

    // 列表接口不加载授课信息
    let (_, page) = get!(app, "/api/professors");
    assert!(page["professors"][0].get("courses").is_none());
}

#[actix_web::test]
async fn test_duplicate_professor_identity_is_rejected() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    create!(app, "/api/professors", professor_body("E-120"));
    let other_id = create!(app, "/api/professors", professor_body("E-121"));

    let mut same_employee_id = professor_body("E-120");
    same_employee_id["email"] = json!("someone@uni.edu");
    let (status, body) = post!(app, "/api/professors", same_employee_id);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Employee ID or email already exists");
    assert_eq!(body["code"], 1101);

    let mut same_email = professor_body("E-122");
    same_email["email"] = json!("e-120@uni.edu");
    let (status, body) = post!(app, "/api/professors", same_email);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Employee ID or email already exists");

    let (status, body) = put!(
        app,
        format!("/api/professors/{other_id}"),
        json!({ "employeeId": "E-120" })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Employee ID already exists");

    let (status, body) = put!(
        app,
        format!("/api/professors/{other_id}"),
        json!({ "email": "e-120@uni.edu" })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");

    // 保持自身工号与邮箱不视为冲突
    let (status, _) = put!(
        app,
        format!("/api/professors/{other_id}"),
        json!({ "employeeId": "E-121", "email": "e-121@uni.edu" })
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_invalid_professor_payloads() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let mut blank = professor_body("E-130");
    blank["department"] = json!("   ");
    let (status, body) = post!(app, "/api/professors", blank);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1102);

    let mut bad_email = professor_body("E-131");
    bad_email["email"] = json!("nobody");
    let (status, _) = post!(app, "/api/professors", bad_email);
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_status = professor_body("E-132");
    bad_status["status"] = json!("RETIRED");
    let (status, _) = post!(app, "/api/professors", bad_status);
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_professors_with_filters() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    create!(app, "/api/professors", professor_body("E-303"));
    create!(app, "/api/professors", professor_body("E-301"));
    let mut physics = professor_body("E-302");
    physics["firstName"] = json!("Elena");
    physics["department"] = json!("Physics");
    physics["status"] = json!("INACTIVE");
    create!(app, "/api/professors", physics);

    let (status, page) = get!(app, "/api/professors?sortBy=employeeId&order=asc");
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = page["professors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["employeeId"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["E-301", "E-302", "E-303"]);
    assert_eq!(page["pagination"]["total"], 3);

    let (_, page) = get!(app, "/api/professors?department=Physics");
    assert_eq!(page["pagination"]["total"], 1);
    assert_eq!(page["professors"][0]["firstName"], "Elena");

    let (_, page) = get!(app, "/api/professors?status=ACTIVE");
    assert_eq!(page["pagination"]["total"], 2);

    let (_, page) = get!(app, "/api/professors?status=all");
    assert_eq!(page["pagination"]["total"], 3);

    let (status, _) = get!(app, "/api/professors?status=RETIRED");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, page) = get!(app, "/api/professors?search=elen");
    assert_eq!(page["pagination"]["total"], 1);
    assert_eq!(page["professors"][0]["employeeId"], "E-302");

    let (_, page) = get!(
        app,
        "/api/professors?search=E-30&limit=2&page=2&sortBy=employeeId&order=asc"
    );
    assert_eq!(page["professors"].as_array().unwrap().len(), 1);
    assert_eq!(page["professors"][0]["employeeId"], "E-303");
    assert_eq!(page["pagination"]["totalPages"], 2);
}
