use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::students::requests::CreateStudentRequest;
use crate::services::{bad_request, internal_error};
use crate::storage::Storage;
use crate::utils::validate::{validate_email, validate_required};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = normalize_create_request(&mut student_data) {
        return Ok(bad_request(ErrorCode::StudentInvalid, msg));
    }

    let storage = service.get_storage(request);

    // 学号、邮箱唯一
    match check_identity_available(&storage, &student_data.carnet, &student_data.email).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(bad_request(
                ErrorCode::StudentAlreadyExists,
                "Carnet or email already exists",
            ));
        }
        Err(e) => return Ok(internal_error("Error creating student", &e)),
    }

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} ({}) created", student.carnet, student.full_name());
            Ok(HttpResponse::Created().json(student))
        }
        Err(UniAdminError::Conflict(_)) => Ok(bad_request(
            ErrorCode::StudentAlreadyExists,
            "Carnet or email already exists",
        )),
        Err(e) => Ok(internal_error("Error creating student", &e)),
    }
}

fn normalize_create_request(data: &mut CreateStudentRequest) -> Result<(), String> {
    data.carnet = validate_required(&data.carnet, "carnet")?.to_string();
    data.first_name = validate_required(&data.first_name, "firstName")?.to_string();
    data.last_name = validate_required(&data.last_name, "lastName")?.to_string();
    data.email = validate_required(&data.email, "email")?.to_string();
    data.phone = validate_required(&data.phone, "phone")?.to_string();
    data.career = validate_required(&data.career, "career")?.to_string();
    validate_email(&data.email)?;
    Ok(())
}

async fn check_identity_available(
    storage: &Arc<dyn Storage>,
    carnet: &str,
    email: &str,
) -> crate::errors::Result<bool> {
    if storage.get_student_by_carnet(carnet).await?.is_some() {
        return Ok(false);
    }
    Ok(storage.get_student_by_email(email).await?.is_none())
}
