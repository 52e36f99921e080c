#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::{course_body, professor_body, setup, student_body};

#[actix_web::test]
async fn test_enrollment_fills_course_to_capacity() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-20"));
    let course_id = create!(app, "/api/courses", course_body("NET1", professor_id, 2));
    let mut ids = Vec::new();
    for carnet in ["C-a", "C-b", "C-c"] {
        ids.push(create!(app, "/api/students", student_body(carnet)));
    }

    let (status, enrollment) = post!(
        app,
        "/api/enrollments",
        json!({ "studentId": ids[0], "courseId": course_id })
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(enrollment["status"], "ENROLLED");
    assert_eq!(enrollment["student"]["carnet"], "C-a");
    assert_eq!(enrollment["course"]["code"], "NET1");

    create!(
        app,
        "/api/enrollments",
        json!({ "studentId": ids[1], "courseId": course_id })
    );

    let (status, body) = post!(
        app,
        "/api/enrollments",
        json!({ "studentId": ids[2], "courseId": course_id })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No seats available");

    let (_, course) = get!(app, format!("/api/courses/{course_id}"));
    assert_eq!(course["currentEnrollment"], 2);
    assert_eq!(course["enrollments"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_duplicate_enrollment_is_rejected() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-21"));
    let course_id = create!(app, "/api/courses", course_body("OS1", professor_id, 10));
    let student_id = create!(app, "/api/students", student_body("C-d"));

    let body = json!({ "studentId": student_id, "courseId": course_id });
    create!(app, "/api/enrollments", body);
    let (status, err) = post!(app, "/api/enrollments", body);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Student already enrolled in this course");

    let (_, course) = get!(app, format!("/api/courses/{course_id}"));
    assert_eq!(course["currentEnrollment"], 1);
}

#[actix_web::test]
async fn test_enrollment_preconditions() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-22"));
    let mut closed = course_body("ART1", professor_id, 10);
    closed["status"] = json!("INACTIVE");
    let closed_id = create!(app, "/api/courses", closed);
    let student_id = create!(app, "/api/students", student_body("C-e"));

    let (status, body) = post!(
        app,
        "/api/enrollments",
        json!({ "studentId": student_id, "courseId": 999 })
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");
    assert_eq!(body["code"], 1200);

    let (status, body) = post!(
        app,
        "/api/enrollments",
        json!({ "studentId": 999, "courseId": closed_id })
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
    assert_eq!(body["code"], 1000);

    let (status, body) = post!(
        app,
        "/api/enrollments",
        json!({ "studentId": student_id, "courseId": closed_id })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Course is not active");
    assert_eq!(body["code"], 1202);

    // 被拒绝的选课不占用名额
    let (_, course) = get!(app, format!("/api/courses/{closed_id}"));
    assert_eq!(course["currentEnrollment"], 0);
}

#[actix_web::test]
async fn test_deleting_enrollment_frees_seat() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-23"));
    let course_id = create!(app, "/api/courses", course_body("DB1", professor_id, 1));
    let first = create!(app, "/api/students", student_body("C-f"));
    let second = create!(app, "/api/students", student_body("C-g"));

    let enrollment_id = create!(
        app,
        "/api/enrollments",
        json!({ "studentId": first, "courseId": course_id })
    );

    let (status, _) = delete!(app, format!("/api/enrollments/{enrollment_id}"));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = delete!(app, format!("/api/enrollments/{enrollment_id}"));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, course) = get!(app, format!("/api/courses/{course_id}"));
    assert_eq!(course["currentEnrollment"], 0);

    create!(
        app,
        "/api/enrollments",
        json!({ "studentId": second, "courseId": course_id })
    );
}

#[actix_web::test]
async fn test_enrollment_listing_and_status_update() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let professor_id = create!(app, "/api/professors", professor_body("E-24"));
    let course_a = create!(app, "/api/courses", course_body("AI1", professor_id, 10));
    let course_b = create!(app, "/api/courses", course_body("ML1", professor_id, 10));
    let student_id = create!(app, "/api/students", student_body("C-h"));

    let enrollment_id = create!(
        app,
        "/api/enrollments",
        json!({ "studentId": student_id, "courseId": course_a })
    );
    create!(
        app,
        "/api/enrollments",
        json!({ "studentId": student_id, "courseId": course_b })
    );

    let (status, updated) = put!(
        app,
        format!("/api/enrollments/{enrollment_id}"),
        json!({ "status": "COMPLETED" })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "COMPLETED");

    let (status, _) = put!(
        app,
        format!("/api/enrollments/{enrollment_id}"),
        json!({ "status": "PAUSED" })
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, mine) = get!(app, format!("/api/enrollments/student/{student_id}"));
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0]["course"]["professor"]["employeeId"], "E-24");

    let (_, roster) = get!(app, format!("/api/enrollments/course/{course_b}"));
    assert_eq!(roster[0]["student"]["carnet"], "C-h");

    let (_, completed) = get!(app, "/api/enrollments?status=COMPLETED");
    assert_eq!(completed["pagination"]["total"], 1);
    assert_eq!(completed["enrollments"][0]["courseId"], course_a);

    let (_, by_course) = get!(app, format!("/api/enrollments?courseId={course_b}"));
    assert_eq!(by_course["pagination"]["total"], 1);

    let (_, nobody) = get!(app, "/api/enrollments/student/4242");
    assert_eq!(nobody, json!([]));

    let (status, _) = get!(app, "/api/enrollments/student/0");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_enrollments_for_last_seat() {
    use rust_uniadmin::errors::UniAdminError;
    use rust_uniadmin::models::enrollments::{
        entities::NO_SEATS_AVAILABLE, requests::CreateEnrollmentRequest,
    };
    use rust_uniadmin::storage::Storage;

    let ctx = setup().await;
    let storage = ctx.storage.clone();

    let professor = storage
        .create_professor(serde_json::from_value(professor_body("E-90")).unwrap())
        .await
        .unwrap();
    let course = storage
        .create_course(serde_json::from_value(course_body("RACE1", professor.id, 1)).unwrap())
        .await
        .unwrap();
    let mut student_ids = Vec::new();
    for i in 0..8 {
        let student = storage
            .create_student(serde_json::from_value(student_body(&format!("R-{i}"))).unwrap())
            .await
            .unwrap();
        student_ids.push(student.id);
    }

    let handles: Vec<_> = student_ids
        .into_iter()
        .map(|student_id| {
            let storage = storage.clone();
            let course_id = course.id;
            tokio::spawn(async move {
                storage
                    .create_enrollment(CreateEnrollmentRequest {
                        student_id,
                        course_id,
                        status: None,
                    })
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(UniAdminError::Validation(msg)) => assert_eq!(msg, NO_SEATS_AVAILABLE),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(accepted, 1);

    let course = storage.get_course_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(course.current_enrollment, 1);
    let rows = storage.list_course_enrollments(course.id).await.unwrap();
    assert_eq!(rows.len(), 1);
}
