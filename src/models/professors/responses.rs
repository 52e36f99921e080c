use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Professor;
use crate::models::common::PaginationInfo;

// 教师列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/professor.ts")]
pub struct ProfessorListResponse {
    pub professors: Vec<Professor>,
    pub pagination: PaginationInfo,
}
