use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::courses::requests::CreateCourseRequest;
use crate::services::{bad_request, internal_error, not_found};
use crate::utils::validate::{validate_positive, validate_required};

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    mut course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = normalize_create_request(&mut course_data) {
        return Ok(bad_request(ErrorCode::CourseInvalid, msg));
    }

    let storage = service.get_storage(request);

    // 授课教师必须存在
    match storage.get_professor_by_id(course_data.professor_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        Err(e) => return Ok(internal_error("Error creating course", &e)),
    }

    match storage.get_course_by_code(&course_data.code).await {
        Ok(None) => {}
        Ok(Some(_)) => {
            return Ok(bad_request(
                ErrorCode::CourseAlreadyExists,
                "Course code already exists",
            ));
        }
        Err(e) => return Ok(internal_error("Error creating course", &e)),
    }

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "Course {} created with capacity {}",
                course.code, course.max_capacity
            );
            Ok(HttpResponse::Created().json(course))
        }
        Err(UniAdminError::Conflict(_)) => Ok(bad_request(
            ErrorCode::CourseAlreadyExists,
            "Course code already exists",
        )),
        Err(e) => Ok(internal_error("Error creating course", &e)),
    }
}

fn normalize_create_request(data: &mut CreateCourseRequest) -> Result<(), String> {
    data.code = validate_required(&data.code, "code")?.to_string();
    data.name = validate_required(&data.name, "name")?.to_string();
    data.schedule = validate_required(&data.schedule, "schedule")?.to_string();
    data.semester = validate_required(&data.semester, "semester")?.to_string();
    data.description = data
        .description
        .take()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    validate_positive(data.credits, "credits")?;
    validate_positive(data.max_capacity, "maxCapacity")?;
    Ok(())
}
