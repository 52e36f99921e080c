use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{GradeService, normalize_comments, validate_partials};
use crate::models::ErrorCode;
use crate::models::grades::entities::{Grade, GradeStatus, compute_final_grade};
use crate::models::grades::requests::{GradeRecord, UpdateGradeRequest};
use crate::services::{bad_request, internal_error, not_found};
use crate::utils::validate::validate_score;

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
    update_data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_partials(
        update_data.partial1,
        update_data.partial2,
        update_data.partial3,
    ) {
        return Ok(bad_request(ErrorCode::GradeInvalid, msg));
    }
    if let Some(final_grade) = update_data.final_grade
        && let Err(msg) = validate_score(final_grade, "finalGrade")
    {
        return Ok(bad_request(ErrorCode::GradeInvalid, msg));
    }

    let storage = service.get_storage(request);

    let existing = match storage.get_grade_by_id(grade_id).await {
        Ok(Some(grade)) => grade,
        Ok(None) => return Ok(not_found(ErrorCode::GradeNotFound, "Grade not found")),
        Err(e) => return Ok(internal_error("Error updating grade", &e)),
    };

    let record = merge_grade(&existing, update_data);

    match storage.update_grade(grade_id, record).await {
        Ok(Some(grade)) => {
            info!("Grade {} updated ({})", grade.id, grade.status);
            Ok(HttpResponse::Ok().json(grade))
        }
        Ok(None) => Ok(not_found(ErrorCode::GradeNotFound, "Grade not found")),
        Err(e) => Ok(internal_error("Error updating grade", &e)),
    }
}

/// 合并已有成绩与更新内容，并重新判定总评
///
/// 三次考试齐全时总评一律取平均值；不齐全时保留手动录入的总评。
fn merge_grade(existing: &Grade, update: UpdateGradeRequest) -> GradeRecord {
    let partial1 = update.partial1.or(existing.partial1);
    let partial2 = update.partial2.or(existing.partial2);
    let partial3 = update.partial3.or(existing.partial3);

    let (final_grade, status) = match compute_final_grade(partial1, partial2, partial3) {
        (Some(mean), status) => (Some(mean), status),
        (None, _) => match update.final_grade.or(existing.final_grade) {
            Some(manual) => (Some(manual), GradeStatus::from_final_grade(manual)),
            None => (None, GradeStatus::Pending),
        },
    };

    // 未提供时保留原备注，空字符串表示清除
    let comments = match update.comments {
        Some(comments) => normalize_comments(Some(comments)),
        None => existing.comments.clone(),
    };

    GradeRecord {
        partial1,
        partial2,
        partial3,
        final_grade,
        status,
        comments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(partials: (Option<f64>, Option<f64>, Option<f64>)) -> Grade {
        let now = chrono::Utc::now();
        Grade {
            id: 1,
            student_id: 1,
            course_id: 1,
            student: None,
            course: None,
            partial1: partials.0,
            partial2: partials.1,
            partial3: partials.2,
            final_grade: None,
            status: GradeStatus::Pending,
            comments: Some("first term".into()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_last_partial_completes_grade() {
        let existing = grade((Some(7.0), Some(8.0), None));
        let record = merge_grade(
            &existing,
            UpdateGradeRequest {
                partial3: Some(9.0),
                ..Default::default()
            },
        );
        assert_eq!(record.final_grade, Some(8.0));
        assert_eq!(record.status, GradeStatus::Approved);
        assert_eq!(record.comments.as_deref(), Some("first term"));
    }

    #[test]
    fn test_mean_overrides_manual_final_grade() {
        let existing = grade((Some(4.0), Some(5.0), Some(6.0)));
        let record = merge_grade(
            &existing,
            UpdateGradeRequest {
                final_grade: Some(9.0),
                ..Default::default()
            },
        );
        assert_eq!(record.final_grade, Some(5.0));
        assert_eq!(record.status, GradeStatus::Failed);
    }

    #[test]
    fn test_manual_final_grade_when_incomplete() {
        let existing = grade((Some(4.0), None, None));
        let record = merge_grade(
            &existing,
            UpdateGradeRequest {
                final_grade: Some(6.0),
                comments: Some("  makeup exam ".into()),
                ..Default::default()
            },
        );
        assert_eq!(record.final_grade, Some(6.0));
        assert_eq!(record.status, GradeStatus::Approved);
        assert_eq!(record.comments.as_deref(), Some("makeup exam"));
    }

    #[test]
    fn test_incomplete_stays_pending() {
        let existing = grade((None, None, None));
        let record = merge_grade(
            &existing,
            UpdateGradeRequest {
                partial1: Some(10.0),
                ..Default::default()
            },
        );
        assert_eq!(record.partial1, Some(10.0));
        assert_eq!(record.final_grade, None);
        assert_eq!(record.status, GradeStatus::Pending);
    }

    #[test]
    fn test_blank_comments_clear_existing() {
        let existing = grade((Some(7.0), None, None));
        let record = merge_grade(
            &existing,
            UpdateGradeRequest {
                comments: Some("   ".into()),
                ..Default::default()
            },
        );
        assert_eq!(record.comments, None);

        let record = merge_grade(
            &existing,
            UpdateGradeRequest {
                comments: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(record.comments, None);
    }
}
