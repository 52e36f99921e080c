use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 默认每页条数
pub const DEFAULT_LIMIT: i64 = 10;
/// 每页条数上限
pub const MAX_LIMIT: i64 = 100;
/// 页码上限，保证偏移量 `(page - 1) * limit` 不溢出
pub const MAX_PAGE: i64 = i64::MAX / MAX_LIMIT;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(default = "default_page", with = "string_i64")]
    #[ts(type = "number")]
    pub page: i64,
    #[serde(default = "default_limit", with = "string_i64")]
    #[ts(type = "number")]
    pub limit: i64,
}

impl PaginationQuery {
    /// 规范化分页参数：页码限制在 1..=MAX_PAGE，每页条数限制在 1..=MAX_LIMIT
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.clamp(1, MAX_PAGE) as u64;
        let limit = self.limit.clamp(1, MAX_LIMIT) as u64;
        (page, limit)
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

define_string_enum! {
    /// 排序方向
    SortOrder, export_to = "../frontend/src/types/generated/pagination.ts" {
        Asc => "asc",
        Desc => "desc",
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

impl From<SortOrder> for sea_orm::Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}

/// 解析状态筛选参数，`all` 或空字符串表示不筛选
pub fn parse_status_filter<T>(raw: Option<&str>) -> Result<Option<T>, String>
where
    T: std::str::FromStr<Err = String>,
{
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => value.parse::<T>().map(Some),
    }
}

/// 整数参数，支持字符串到 i64 的转换
pub mod string_i64 {
    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(super::I64Visitor)
    }
}

/// 可选 ID 参数，空字符串视为未提供
pub mod optional_string_i64 {
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(super::OptionalI64Visitor)
    }
}

struct I64Visitor;

impl<'de> Visitor<'de> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value <= i64::MAX as u64 {
            Ok(value as i64)
        } else {
            Err(E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
        }
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

struct OptionalI64Visitor;

impl<'de> Visitor<'de> for OptionalI64Visitor {
    type Value = Option<i64>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an optional integer or a string containing an integer")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        I64Visitor.visit_i64(value).map(Some)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        I64Visitor.visit_u64(value).map(Some)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.trim().is_empty() {
            return Ok(None);
        }
        I64Visitor.visit_str(value).map(Some)
    }
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::StudentStatus;
    use actix_web::web::Query;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        #[serde(flatten)]
        pagination: PaginationQuery,
        #[serde(default, with = "optional_string_i64")]
        course_id: Option<i64>,
        order: Option<SortOrder>,
    }

    #[test]
    fn test_query_string_numbers_are_parsed() {
        let params = Query::<Params>::from_query("page=3&limit=25&courseId=7&order=asc")
            .unwrap()
            .into_inner();
        assert_eq!(params.pagination.page, 3);
        assert_eq!(params.pagination.limit, 25);
        assert_eq!(params.course_id, Some(7));
        assert_eq!(params.order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_query_defaults() {
        let params = Query::<Params>::from_query("").unwrap().into_inner();
        assert_eq!(params.pagination.page, 1);
        assert_eq!(params.pagination.limit, DEFAULT_LIMIT);
        assert_eq!(params.course_id, None);
        assert_eq!(params.order, None);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(Query::<Params>::from_query("page=abc").is_err());
        assert!(Query::<Params>::from_query("order=sideways").is_err());
    }

    #[test]
    fn test_normalized_bounds() {
        let query = PaginationQuery { page: 0, limit: 1000 };
        assert_eq!(query.normalized(), (1, MAX_LIMIT as u64));

        let query = PaginationQuery { page: 4, limit: 0 };
        assert_eq!(query.normalized(), (4, 1));
    }

    #[test]
    fn test_huge_page_offset_fits() {
        let query = PaginationQuery {
            page: i64::MAX,
            limit: MAX_LIMIT,
        };
        let (page, limit) = query.normalized();
        assert_eq!(page, MAX_PAGE as u64);
        assert!((page - 1).checked_mul(limit).is_some());
        assert!(page * limit <= i64::MAX as u64);
    }

    #[test]
    fn test_query_params_export_as_numbers() {
        use crate::models::enrollments::requests::EnrollmentListParams;

        let decl = PaginationQuery::decl();
        assert!(decl.contains("page: number"), "{decl}");
        assert!(decl.contains("limit: number"), "{decl}");

        let decl = EnrollmentListParams::decl();
        assert!(decl.contains("studentId?: number"), "{decl}");
        assert!(decl.contains("courseId?: number"), "{decl}");
        assert!(decl.contains("page: number"), "{decl}");
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter::<StudentStatus>(None), Ok(None));
        assert_eq!(parse_status_filter::<StudentStatus>(Some("all")), Ok(None));
        assert_eq!(parse_status_filter::<StudentStatus>(Some("")), Ok(None));
        assert_eq!(
            parse_status_filter::<StudentStatus>(Some("GRADUATED")),
            Ok(Some(StudentStatus::Graduated))
        );
        assert!(parse_status_filter::<StudentStatus>(Some("EXPELLED")).is_err());
    }
}
