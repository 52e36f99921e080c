//! 路径参数提取器
//!
//! 将路径中的 ID 解析为正整数，失败时返回 400 与标准错误体，
//! 而不是 actix-web 默认的 404 纯文本响应。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};

use crate::models::{ErrorCode, ErrorResponse};

fn parse_path_i64(req: &HttpRequest, name: &str) -> Result<i64, Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let message = format!("Invalid {name}: '{raw}'");
            let response = HttpResponse::BadRequest()
                .json(ErrorResponse::new(ErrorCode::BadRequest, message.clone()));
            Err(InternalError::from_response(message, response).into())
        }
    }
}

macro_rules! define_safe_i64_extractor {
    ($($(#[$meta:meta])* $name:ident => $param:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    ready(parse_path_i64(req, $param).map($name))
                }
            }
        )+
    };
}

define_safe_i64_extractor! {
    /// `{id}`
    SafeIDI64 => "id",
    /// `{studentId}`
    SafeStudentIdI64 => "studentId",
    /// `{courseId}`
    SafeCourseIdI64 => "courseId",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id() {
        let req = TestRequest::default().param("id", "42").to_http_request();
        let id = SafeIDI64::extract(&req).await.unwrap();
        assert_eq!(id, SafeIDI64(42));
    }

    #[actix_web::test]
    async fn test_named_params() {
        let req = TestRequest::default()
            .param("studentId", "7")
            .param("courseId", "9")
            .to_http_request();
        assert_eq!(SafeStudentIdI64::extract(&req).await.unwrap().0, 7);
        assert_eq!(SafeCourseIdI64::extract(&req).await.unwrap().0, 9);
    }

    #[actix_web::test]
    async fn test_invalid_ids_are_bad_request() {
        for raw in ["abc", "0", "-3", "1.5"] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            let err = SafeIDI64::extract(&req).await.unwrap_err();
            assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
