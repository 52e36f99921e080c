pub mod error_code;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use pagination::{PaginationInfo, PaginationQuery, SortOrder, parse_status_filter};
pub use response::{ErrorResponse, MessageResponse};
