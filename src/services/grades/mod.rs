pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{CreateGradeRequest, GradeListParams, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_grades(
        &self,
        request: &HttpRequest,
        query: GradeListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, request, query).await
    }

    pub async fn list_student_grades(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_student_grades(self, request, student_id).await
    }

    pub async fn list_course_grades(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_course_grades(self, request, course_id).await
    }

    pub async fn get_grade(&self, request: &HttpRequest, grade_id: i64) -> ActixResult<HttpResponse> {
        get::get_grade(self, request, grade_id).await
    }

    pub async fn create_grade(
        &self,
        request: &HttpRequest,
        grade_data: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, request, grade_data).await
    }

    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
        update_data: UpdateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, request, grade_id, update_data).await
    }

    pub async fn delete_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, request, grade_id).await
    }
}

/// 评语去除首尾空白，空串视为未填写
pub(crate) fn normalize_comments(comments: Option<String>) -> Option<String> {
    comments
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// 校验请求中出现的考试成绩
pub(crate) fn validate_partials(
    partial1: Option<f64>,
    partial2: Option<f64>,
    partial3: Option<f64>,
) -> Result<(), String> {
    use crate::utils::validate::validate_score;

    for (score, field) in [
        (partial1, "partial1"),
        (partial2, "partial2"),
        (partial3, "partial3"),
    ] {
        if let Some(score) = score {
            validate_score(score, field)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_comments() {
        assert_eq!(normalize_comments(None), None);
        assert_eq!(normalize_comments(Some("   ".into())), None);
        assert_eq!(
            normalize_comments(Some(" Good work ".into())),
            Some("Good work".to_string())
        );
    }

    #[test]
    fn test_validate_partials() {
        assert!(validate_partials(Some(0.0), None, Some(10.0)).is_ok());
        assert!(validate_partials(Some(10.5), None, None).is_err());
        assert!(validate_partials(None, Some(-1.0), None).is_err());
        assert!(validate_partials(None, None, Some(f64::NAN)).is_err());
    }
}
