use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::services::{bad_request, internal_error, not_found};
use crate::utils::validate::{validate_positive, validate_required};

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    mut update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = normalize_update_request(&mut update_data) {
        return Ok(bad_request(ErrorCode::CourseInvalid, msg));
    }

    let storage = service.get_storage(request);

    let existing = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => return Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => return Ok(internal_error("Error updating course", &e)),
    };

    if let Some(max_capacity) = update_data.max_capacity
        && max_capacity < existing.current_enrollment
    {
        return Ok(bad_request(
            ErrorCode::CourseInvalid,
            format!(
                "Max capacity cannot be lower than current enrollment ({})",
                existing.current_enrollment
            ),
        ));
    }

    if let Some(professor_id) = update_data.professor_id
        && professor_id != existing.professor_id
    {
        match storage.get_professor_by_id(professor_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
            Err(e) => return Ok(internal_error("Error updating course", &e)),
        }
    }

    if let Some(ref code) = update_data.code
        && *code != existing.code
    {
        match storage.get_course_by_code(code).await {
            Ok(Some(_)) => {
                return Ok(bad_request(
                    ErrorCode::CourseAlreadyExists,
                    "Course code already exists",
                ));
            }
            Ok(None) => {}
            Err(e) => return Ok(internal_error("Error updating course", &e)),
        }
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course {} updated", course.code);
            Ok(HttpResponse::Ok().json(course))
        }
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        // 并发选课导致容量条件不再满足
        Err(UniAdminError::Validation(msg)) => Ok(bad_request(ErrorCode::CourseInvalid, msg)),
        Err(UniAdminError::Conflict(_)) => Ok(bad_request(
            ErrorCode::CourseAlreadyExists,
            "Course code already exists",
        )),
        Err(e) => Ok(internal_error("Error updating course", &e)),
    }
}

fn normalize_update_request(data: &mut UpdateCourseRequest) -> Result<(), String> {
    let fields = [
        (&mut data.code, "code"),
        (&mut data.name, "name"),
        (&mut data.schedule, "schedule"),
        (&mut data.semester, "semester"),
    ];
    for (value, name) in fields {
        if let Some(v) = value.as_mut() {
            *v = validate_required(v, name)?.to_string();
        }
    }
    if let Some(description) = data.description.as_mut() {
        *description = description.trim().to_string();
    }
    if let Some(credits) = data.credits {
        validate_positive(credits, "credits")?;
    }
    if let Some(max_capacity) = data.max_capacity {
        validate_positive(max_capacity, "maxCapacity")?;
    }
    Ok(())
}
