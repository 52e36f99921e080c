use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::grades::entities::MAX_SCORE;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 必填字段校验，返回去除首尾空白后的值
pub fn validate_required<'a>(value: &'a str, field: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(trimmed)
}

/// 考试成绩校验：必须为 0 到满分之间的有限数
pub fn validate_score(score: f64, field: &str) -> Result<(), String> {
    if !score.is_finite() || !(0.0..=MAX_SCORE).contains(&score) {
        return Err(format!("{field} must be between 0 and {MAX_SCORE}"));
    }
    Ok(())
}

/// 正整数校验（学分、容量等）
pub fn validate_positive(value: i32, field: &str) -> Result<(), String> {
    if value < 1 {
        return Err(format!("{field} must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("ana.lopez@uni.edu").is_ok());
        assert!(validate_email("ana@uni").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_required() {
        assert_eq!(validate_required("  Ana ", "firstName"), Ok("Ana"));
        assert_eq!(
            validate_required("   ", "firstName"),
            Err("firstName is required".to_string())
        );
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(0.0, "partial1").is_ok());
        assert!(validate_score(10.0, "partial1").is_ok());
        assert!(validate_score(7.25, "partial1").is_ok());
        assert!(validate_score(-0.5, "partial1").is_err());
        assert!(validate_score(10.5, "partial1").is_err());
        assert!(validate_score(f64::NAN, "partial1").is_err());
        assert!(validate_score(f64::INFINITY, "partial1").is_err());
    }

    #[test]
    fn test_positive() {
        assert!(validate_positive(1, "credits").is_ok());
        assert_eq!(
            validate_positive(0, "maxCapacity"),
            Err("maxCapacity must be at least 1".to_string())
        );
    }
}
