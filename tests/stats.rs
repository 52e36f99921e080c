#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::{course_body, professor_body, setup, student_body};

#[actix_web::test]
async fn test_api_root() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let (status, body) = get!(app, "/api");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "University Management API - Running");
}

#[actix_web::test]
async fn test_stats_counts() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let (status, empty) = get!(app, "/api/stats");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        empty,
        json!({
            "totalStudents": 0,
            "totalProfessors": 0,
            "totalCourses": 0,
            "totalEnrollments": 0,
            "activeCourses": 0,
            "graduatedStudents": 0
        })
    );

    let professor_id = create!(app, "/api/professors", professor_body("E-40"));
    let course_id = create!(app, "/api/courses", course_body("STAT1", professor_id, 10));
    let mut archived = course_body("STAT0", professor_id, 10);
    archived["status"] = json!("INACTIVE");
    create!(app, "/api/courses", archived);

    let student_id = create!(app, "/api/students", student_body("C-40"));
    let mut graduate = student_body("C-41");
    graduate["status"] = json!("GRADUATED");
    create!(app, "/api/students", graduate);

    create!(
        app,
        "/api/enrollments",
        json!({ "studentId": student_id, "courseId": course_id })
    );

    let (_, stats) = get!(app, "/api/stats");
    assert_eq!(stats["totalStudents"], 2);
    assert_eq!(stats["totalProfessors"], 1);
    assert_eq!(stats["totalCourses"], 2);
    assert_eq!(stats["totalEnrollments"], 1);
    assert_eq!(stats["activeCourses"], 1);
    assert_eq!(stats["graduatedStudents"], 1);
}
