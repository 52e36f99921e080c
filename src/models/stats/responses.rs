use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 系统概览统计
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct UniversityStats {
    pub total_students: i64,
    pub total_professors: i64,
    pub total_courses: i64,
    pub total_enrollments: i64,
    pub active_courses: i64,
    pub graduated_students: i64,
}
