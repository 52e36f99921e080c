//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_uniadmin_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum UniAdminError {
            $($variant(String),)*
        }

        impl UniAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(UniAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(UniAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(UniAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl UniAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        UniAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_uniadmin_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Resource Conflict"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
}

impl UniAdminError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for UniAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for UniAdminError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for UniAdminError {
    fn from(err: sea_orm::DbErr) -> Self {
        UniAdminError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for UniAdminError {
    fn from(err: std::io::Error) -> Self {
        UniAdminError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for UniAdminError {
    fn from(err: serde_json::Error) -> Self {
        UniAdminError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for UniAdminError {
    fn from(err: chrono::ParseError) -> Self {
        UniAdminError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UniAdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(UniAdminError::database_config("test").code(), "E001");
        assert_eq!(UniAdminError::validation("test").code(), "E005");
        assert_eq!(UniAdminError::not_found("test").code(), "E006");
        assert_eq!(UniAdminError::conflict("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            UniAdminError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            UniAdminError::conflict("test").error_type(),
            "Resource Conflict"
        );
    }

    #[test]
    fn test_error_message() {
        let err = UniAdminError::validation("No seats available");
        assert_eq!(err.message(), "No seats available");
    }

    #[test]
    fn test_format_simple() {
        let err = UniAdminError::conflict("Carnet already exists");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Conflict"));
        assert!(formatted.contains("Carnet already exists"));
    }
}
