#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::{course_body, professor_body, setup, student_body};

#[actix_web::test]
async fn test_final_grade_is_computed_from_partials() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-30"));
    let course_id = create!(app, "/api/courses", course_body("ALG1", professor_id, 10));
    let student_id = create!(app, "/api/students", student_body("C-30"));

    let (status, grade) = post!(
        app,
        "/api/grades",
        json!({
            "studentId": student_id,
            "courseId": course_id,
            "partial1": 7.0,
            "partial2": 8.0,
            "partial3": 9.0,
            "comments": "Consistent work"
        })
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(grade["finalGrade"], 8.0);
    assert_eq!(grade["status"], "APPROVED");
    assert_eq!(grade["student"]["carnet"], "C-30");
    assert_eq!(grade["course"]["code"], "ALG1");

    let grade_id = grade["id"].as_i64().unwrap();
    let (status, updated) = put!(
        app,
        format!("/api/grades/{grade_id}"),
        json!({ "partial1": 3.0, "partial2": 3.0 })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["finalGrade"], 5.0);
    assert_eq!(updated["status"], "FAILED");
    assert_eq!(updated["partial3"], 9.0);
    assert_eq!(updated["comments"], "Consistent work");

    let (status, cleared) = put!(
        app,
        format!("/api/grades/{grade_id}"),
        json!({ "comments": "" })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["comments"], serde_json::Value::Null);
    assert_eq!(cleared["finalGrade"], 5.0);
}

#[actix_web::test]
async fn test_incomplete_grade_stays_pending() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-31"));
    let course_id = create!(app, "/api/courses", course_body("GEO1", professor_id, 10));
    let student_id = create!(app, "/api/students", student_body("C-31"));

    let (_, grade) = post!(
        app,
        "/api/grades",
        json!({ "studentId": student_id, "courseId": course_id, "partial1": 9.5 })
    );
    assert_eq!(grade["finalGrade"], json!(null));
    assert_eq!(grade["status"], "PENDING");
    let grade_id = grade["id"].as_i64().unwrap();

    let (_, grade) = put!(
        app,
        format!("/api/grades/{grade_id}"),
        json!({ "partial2": 6.0 })
    );
    assert_eq!(grade["status"], "PENDING");

    let (_, grade) = put!(
        app,
        format!("/api/grades/{grade_id}"),
        json!({ "partial3": 6.0 })
    );
    assert_eq!(grade["finalGrade"], 7.166666666666667);
    assert_eq!(grade["status"], "APPROVED");
}

#[actix_web::test]
async fn test_manual_final_grade_while_partials_missing() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-32"));
    let course_id = create!(app, "/api/courses", course_body("LIT1", professor_id, 10));
    let student_id = create!(app, "/api/students", student_body("C-32"));
    let grade_id = create!(
        app,
        "/api/grades",
        json!({ "studentId": student_id, "courseId": course_id })
    );

    let (status, grade) = put!(
        app,
        format!("/api/grades/{grade_id}"),
        json!({ "finalGrade": 5.5 })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(grade["finalGrade"], 5.5);
    assert_eq!(grade["status"], "FAILED");
}

#[actix_web::test]
async fn test_grade_validation_and_uniqueness() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-33"));
    let course_id = create!(app, "/api/courses", course_body("ECO1", professor_id, 10));
    let student_id = create!(app, "/api/students", student_body("C-33"));

    let (status, _) = post!(
        app,
        "/api/grades",
        json!({ "studentId": student_id, "courseId": course_id, "partial1": 11.0 })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post!(
        app,
        "/api/grades",
        json!({ "studentId": 999, "courseId": course_id })
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");

    create!(
        app,
        "/api/grades",
        json!({ "studentId": student_id, "courseId": course_id })
    );
    let (status, body) = post!(
        app,
        "/api/grades",
        json!({ "studentId": student_id, "courseId": course_id, "partial1": 5.0 })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Grade already exists for this student and course"
    );
    assert_eq!(body["code"], 1401);
}

#[actix_web::test]
async fn test_grade_listing_and_delete() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-34"));
    let course_id = create!(app, "/api/courses", course_body("SOC1", professor_id, 10));
    let passing = create!(app, "/api/students", student_body("C-34"));
    let failing = create!(app, "/api/students", student_body("C-35"));

    for (student_id, score) in [(passing, 9.0), (failing, 2.0)] {
        create!(
            app,
            "/api/grades",
            json!({
                "studentId": student_id,
                "courseId": course_id,
                "partial1": score,
                "partial2": score,
                "partial3": score
            })
        );
    }

    let (_, approved) = get!(app, "/api/grades?status=APPROVED");
    assert_eq!(approved["pagination"]["total"], 1);
    assert_eq!(approved["grades"][0]["studentId"], passing);

    let (_, sorted) = get!(app, "/api/grades?sortBy=finalGrade&order=asc");
    assert_eq!(sorted["grades"][0]["studentId"], failing);

    let (_, searched) = get!(app, "/api/grades?search=C-35");
    assert_eq!(searched["pagination"]["total"], 1);

    let (_, by_student) = get!(app, format!("/api/grades/student/{passing}"));
    assert_eq!(by_student[0]["course"]["professor"]["employeeId"], "E-34");

    let (_, by_course) = get!(app, format!("/api/grades/course/{course_id}"));
    assert_eq!(by_course.as_array().unwrap().len(), 2);

    let grade_id = by_student[0]["id"].as_i64().unwrap();
    let (status, _) = delete!(app, format!("/api/grades/{grade_id}"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = get!(app, format!("/api/grades/{grade_id}"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Grade not found");
}
