use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::errors::UniAdminError;
use crate::models::ErrorCode;
use crate::models::professors::requests::UpdateProfessorRequest;
use crate::services::{bad_request, internal_error, not_found};
use crate::utils::validate::{validate_email, validate_required};

pub async fn update_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    professor_id: i64,
    mut update_data: UpdateProfessorRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = normalize_update_request(&mut update_data) {
        return Ok(bad_request(ErrorCode::ProfessorInvalid, msg));
    }

    let storage = service.get_storage(request);

    let existing = match storage.get_professor_by_id(professor_id).await {
        Ok(Some(professor)) => professor,
        Ok(None) => return Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        Err(e) => return Ok(internal_error("Error updating professor", &e)),
    };

    if let Some(ref employee_id) = update_data.employee_id
        && *employee_id != existing.employee_id
    {
        match storage.get_professor_by_employee_id(employee_id).await {
            Ok(Some(_)) => {
                return Ok(bad_request(
                    ErrorCode::ProfessorAlreadyExists,
                    "Employee ID already exists",
                ));
            }
            Ok(None) => {}
            Err(e) => return Ok(internal_error("Error updating professor", &e)),
        }
    }
    if let Some(ref email) = update_data.email
        && *email != existing.email
    {
        match storage.get_professor_by_email(email).await {
            Ok(Some(_)) => {
                return Ok(bad_request(
                    ErrorCode::ProfessorAlreadyExists,
                    "Email already exists",
                ));
            }
            Ok(None) => {}
            Err(e) => return Ok(internal_error("Error updating professor", &e)),
        }
    }

    match storage.update_professor(professor_id, update_data).await {
        Ok(Some(professor)) => {
            info!("Professor {} updated", professor.id);
            Ok(HttpResponse::Ok().json(professor))
        }
        Ok(None) => Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        Err(UniAdminError::Conflict(_)) => Ok(bad_request(
            ErrorCode::ProfessorAlreadyExists,
            "Employee ID or email already exists",
        )),
        Err(e) => Ok(internal_error("Error updating professor", &e)),
    }
}

fn normalize_update_request(data: &mut UpdateProfessorRequest) -> Result<(), String> {
    let fields = [
        (&mut data.employee_id, "employeeId"),
        (&mut data.first_name, "firstName"),
        (&mut data.last_name, "lastName"),
        (&mut data.email, "email"),
        (&mut data.phone, "phone"),
        (&mut data.specialty, "specialty"),
        (&mut data.department, "department"),
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
