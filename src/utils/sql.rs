use sea_orm::sea_query::LikeExpr;

/// LIKE 模式中使用的转义字符
const LIKE_ESCAPE: char = '\\';

/// 转义 LIKE 通配符，使用户输入按字面量匹配
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 构造“包含”匹配的 LIKE 表达式，并声明转义字符
pub fn like_contains(keyword: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(keyword))).escape(LIKE_ESCAPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_like_pattern("Garcia"), "Garcia");
        assert_eq!(escape_like_pattern(""), "");
    }

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(escape_like_pattern("50%"), "50\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("c:\\dir"), "c:\\\\dir");
    }
}
