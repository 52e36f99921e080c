use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Enrollment;
use crate::models::common::PaginationInfo;

// 选课列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListResponse {
    pub enrollments: Vec<Enrollment>,
    pub pagination: PaginationInfo,
}
