use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::students::requests::UpdateStudentRequest;
use crate::services::{bad_request, internal_error, not_found};
use crate::utils::validate::{validate_email, validate_required};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = normalize_update_request(&mut update_data) {
        return Ok(bad_request(ErrorCode::StudentInvalid, msg));
    }

    let storage = service.get_storage(request);

    let existing = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(internal_error("Error updating student", &e)),
    };

    // 修改学号或邮箱时检查是否与其他学生冲突
    if let Some(ref carnet) = update_data.carnet
        && *carnet != existing.carnet
    {
        match storage.get_student_by_carnet(carnet).await {
            Ok(Some(_)) => {
                return Ok(bad_request(
                    ErrorCode::StudentAlreadyExists,
                    "Carnet already exists",
                ));
            }
            Ok(None) => {}
            Err(e) => return Ok(internal_error("Error updating student", &e)),
        }
    }
    if let Some(ref email) = update_data.email
        && *email != existing.email
    {
        match storage.get_student_by_email(email).await {
            Ok(Some(_)) => {
                return Ok(bad_request(
                    ErrorCode::StudentAlreadyExists,
                    "Email already exists",
                ));
            }
            Ok(None) => {}
            Err(e) => return Ok(internal_error("Error updating student", &e)),
        }
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student.id);
            Ok(HttpResponse::Ok().json(student))
        }
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(UniAdminError::Conflict(_)) => Ok(bad_request(
            ErrorCode::StudentAlreadyExists,
            "Carnet or email already exists",
        )),
        Err(e) => Ok(internal_error("Error updating student", &e)),
    }
}

fn normalize_update_request(data: &mut UpdateStudentRequest) -> Result<(), String> {
    let fields = [
        (&mut data.carnet, "carnet"),
        (&mut data.first_name, "firstName"),
        (&mut data.last_name, "lastName"),
        (&mut data.email, "email"),
        (&mut data.phone, "phone"),
        (&mut data.career, "career"),
    ];
    for (value, name) in fields {
        if let Some(v) = value.as_mut() {
            *v = validate_required(v, name)?.to_string();
        }
    }
    if let Some(ref email) = data.email {
        validate_email(email)?;
    }
    Ok(())
}
