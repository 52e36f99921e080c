#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::{course_body, professor_body, setup, student_body};

#[actix_web::test]
async fn test_student_crud() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let id = create!(app, "/api/students", student_body("C-1001"));

    let (status, student) = get!(app, format!("/api/students/{id}"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["carnet"], "C-1001");
    assert_eq!(student["status"], "ACTIVE");
    assert_eq!(student["enrollments"], json!([]));
    assert_eq!(student["grades"], json!([]));

    let (status, updated) = put!(
        app,
        format!("/api/students/{id}"),
        json!({ "status": "GRADUATED", "phone": "555-9999" })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "GRADUATED");
    assert_eq!(updated["phone"], "555-9999");
    assert_eq!(updated["firstName"], "Ana");

    let (status, body) = delete!(app, format!("/api/students/{id}"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = get!(app, format!("/api/students/{id}"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");

    let (status, _) = delete!(app, format!("/api/students/{id}"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_duplicate_carnet_is_rejected() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    create!(app, "/api/students", student_body("C-2001"));

    let mut duplicate = student_body("C-2001");
    duplicate["email"] = json!("other@uni.edu");
    let (status, body) = post!(app, "/api/students", duplicate);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Carnet or email already exists");
}

#[actix_web::test]
async fn test_invalid_student_payloads() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let mut bad_email = student_body("C-3001");
    bad_email["email"] = json!("not-an-email");
    let (status, _) = post!(app, "/api/students", bad_email);
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post!(app, "/api/students", json!({ "carnet": "C-3002" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get!(app, "/api/students/abc");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_and_search_students() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    for carnet in ["C-4001", "C-4002", "C-4003"] {
        create!(app, "/api/students", student_body(carnet));
    }
    let mut maria = student_body("X-9000");
    maria["firstName"] = json!("Maria");
    let maria_id = create!(app, "/api/students", maria);
    put!(
        app,
        format!("/api/students/{maria_id}"),
        json!({ "status": "INACTIVE" })
    );

    let (status, page) = get!(app, "/api/students?page=1&limit=2&sortBy=carnet&order=asc");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["students"].as_array().unwrap().len(), 2);
    assert_eq!(page["students"][0]["carnet"], "C-4001");
    assert_eq!(page["pagination"]["total"], 4);
    assert_eq!(page["pagination"]["totalPages"], 2);

    let (_, inactive) = get!(app, "/api/students?status=INACTIVE");
    assert_eq!(inactive["pagination"]["total"], 1);
    assert_eq!(inactive["students"][0]["firstName"], "Maria");

    let (status, _) = get!(app, "/api/students?status=EXPELLED");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, found) = get!(app, "/api/students/search?q=mar");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);

    let (_, found) = get!(app, "/api/students/search?q=C-400");
    assert_eq!(found.as_array().unwrap().len(), 3);

    let (_, empty) = get!(app, "/api/students/search?q=");
    assert_eq!(empty, json!([]));
}

#[actix_web::test]
async fn test_search_treats_wildcards_literally() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    create!(app, "/api/students", student_body("C-5001"));

    let (_, found) = get!(app, "/api/students/search?q=%25");
    assert_eq!(found, json!([]));
    let (_, found) = get!(app, "/api/students/search?q=_");
    assert_eq!(found, json!([]));
}

#[actix_web::test]
async fn test_huge_page_returns_empty_list() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    create!(app, "/api/students", student_body("C-5101"));

    let (status, page) = get!(app, "/api/students?page=9223372036854775807&limit=100");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["students"], json!([]));
    assert_eq!(page["pagination"]["total"], 1);

    let (status, page) = get!(app, "/api/courses?page=9223372036854775807");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["courses"], json!([]));
}

#[actix_web::test]
async fn test_deleting_student_releases_seats() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-1"));
    let course_id = create!(app, "/api/courses", course_body("CS101", professor_id, 2));
    let student_id = create!(app, "/api/students", student_body("C-6001"));

    create!(
        app,
        "/api/enrollments",
        json!({ "studentId": student_id, "courseId": course_id })
    );
    create!(
        app,
        "/api/grades",
        json!({ "studentId": student_id, "courseId": course_id, "partial1": 8.0 })
    );

    let (_, course) = get!(app, format!("/api/courses/{course_id}"));
    assert_eq!(course["currentEnrollment"], 1);

    let (status, _) = delete!(app, format!("/api/students/{student_id}"));
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, course) = get!(app, format!("/api/courses/{course_id}"));
    assert_eq!(course["currentEnrollment"], 0);
    assert_eq!(course["enrollments"], json!([]));

    let (_, grades) = get!(app, format!("/api/grades/course/{course_id}"));
    assert_eq!(grades, json!([]));
}
