use serde::Serialize;
use ts_rs::TS;

/// 业务错误码
///
/// 通用错误码与 HTTP 状态码保持一致，资源相关错误码按百位分段：
/// 学生 10xx、教师 11xx、课程 12xx、选课 13xx、成绩 14xx。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 400,
    NotFound = 404,
    InternalServerError = 500,

    // 学生
    StudentNotFound = 1000,
    StudentAlreadyExists = 1001,
    StudentInvalid = 1002,
    StudentCreationFailed = 1003,
    StudentUpdateFailed = 1004,
    StudentDeleteFailed = 1005,

    // 教师
    ProfessorNotFound = 1100,
    ProfessorAlreadyExists = 1101,
    ProfessorInvalid = 1102,
    ProfessorCreationFailed = 1103,
    ProfessorUpdateFailed = 1104,
    ProfessorDeleteFailed = 1105,
    ProfessorHasCourses = 1106,

    // 课程
    CourseNotFound = 1200,
    CourseAlreadyExists = 1201,
    CourseInvalid = 1202,
    CourseCreationFailed = 1203,
    CourseUpdateFailed = 1204,
    CourseDeleteFailed = 1205,

    // 选课
    EnrollmentNotFound = 1300,
    EnrollmentAlreadyExists = 1301,
    EnrollmentCreationFailed = 1302,
    EnrollmentUpdateFailed = 1303,
    EnrollmentDeleteFailed = 1304,
    NoSeatsAvailable = 1305,

    // 成绩
    GradeNotFound = 1400,
    GradeAlreadyExists = 1401,
    GradeInvalid = 1402,
    GradeCreationFailed = 1403,
    GradeUpdateFailed = 1404,
    GradeDeleteFailed = 1405,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_codes_match_http_status() {
        assert_eq!(ErrorCode::BadRequest as i32, 400);
        assert_eq!(ErrorCode::NotFound as i32, 404);
        assert_eq!(ErrorCode::InternalServerError as i32, 500);
    }

    #[test]
    fn test_resource_code_ranges() {
        assert_eq!(ErrorCode::StudentNotFound as i32 / 100, 10);
        assert_eq!(ErrorCode::ProfessorHasCourses as i32 / 100, 11);
        assert_eq!(ErrorCode::CourseInvalid as i32 / 100, 12);
        assert_eq!(ErrorCode::NoSeatsAvailable as i32 / 100, 13);
        assert_eq!(ErrorCode::GradeInvalid as i32 / 100, 14);
    }
}
