pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::professors::requests::{
    CreateProfessorRequest, ProfessorListParams, UpdateProfessorRequest,
};
use crate::storage::Storage;

pub struct ProfessorService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfessorService {
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

    pub async fn list_professors(
        &self,
        request: &HttpRequest,
        query: ProfessorListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_professors(self, request, query).await
    }

    pub async fn get_professor(
        &self,
        request: &HttpRequest,
        professor_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_professor(self, request, professor_id).await
    }

    pub async fn create_professor(
        &self,
        request: &HttpRequest,
        professor_data: CreateProfessorRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_professor(self, request, professor_data).await
    }

    pub async fn update_professor(
        &self,
        request: &HttpRequest,
        professor_id: i64,
        update_data: UpdateProfessorRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_professor(self, request, professor_id, update_data).await
    }

    // 仍有课程的教师不允许删除
    pub async fn delete_professor(
        &self,
        request: &HttpRequest,
        professor_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_professor(self, request, professor_id).await
    }
}
