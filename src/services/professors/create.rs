use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::professors::requests::CreateProfessorRequest;
use crate::services::{bad_request, internal_error};
use crate::utils::validate::{validate_email, validate_required};

pub async fn create_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    mut professor_data: CreateProfessorRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = normalize_create_request(&mut professor_data) {
        return Ok(bad_request(ErrorCode::ProfessorInvalid, msg));
    }

    let storage = service.get_storage(request);

    let employee_taken = storage
        .get_professor_by_employee_id(&professor_data.employee_id)
        .await;
    let email_taken = storage.get_professor_by_email(&professor_data.email).await;
    match (employee_taken, email_taken) {
        (Ok(None), Ok(None)) => {}
        (Ok(_), Ok(_)) => {
            return Ok(bad_request(
                ErrorCode::ProfessorAlreadyExists,
                "Employee ID or email already exists",
            ));
        }
        (Err(e), _) | (_, Err(e)) => return Ok(internal_error("Error creating professor", &e)),
    }

    match storage.create_professor(professor_data).await {
        Ok(professor) => {
            info!(
                "Professor {} ({} {}) created",
                professor.employee_id, professor.first_name, professor.last_name
            );
            Ok(HttpResponse::Created().json(professor))
        }
        Err(UniAdminError::Conflict(_)) => Ok(bad_request(
            ErrorCode::ProfessorAlreadyExists,
            "Employee ID or email already exists",
        )),
        Err(e) => Ok(internal_error("Error creating professor", &e)),
    }
}

fn normalize_create_request(data: &mut CreateProfessorRequest) -> Result<(), String> {
    data.employee_id = validate_required(&data.employee_id, "employeeId")?.to_string();
    data.first_name = validate_required(&data.first_name, "firstName")?.to_string();
    data.last_name = validate_required(&data.last_name, "lastName")?.to_string();
    data.email = validate_required(&data.email, "email")?.to_string();
    data.phone = validate_required(&data.phone, "phone")?.to_string();
    data.specialty = validate_required(&data.specialty, "specialty")?.to_string();
    data.department = validate_required(&data.department, "department")?.to_string();
    validate_email(&data.email)?;
    Ok(())
}
