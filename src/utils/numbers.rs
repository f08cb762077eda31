//! 数字列表解析

use anyhow::{Context, Result};

fn parse_all<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<i64>> {
    tokens
        .map(|token| {
            token
                .trim()
                .parse::<i64>()
                .with_context(|| format!("无法解析数字: {:?}", token))
        })
        .collect()
}

/// 解析以空白分隔的整数
pub fn parse_numbers_split(s: &str) -> Result<Vec<i64>> {
    parse_all(s.split_whitespace())
}

/// 解析以逗号分隔的整数
pub fn parse_numbers_comma(s: &str) -> Result<Vec<i64>> {
    parse_all(s.trim().split(','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_split() {
        assert_eq!(parse_numbers_split("1 -2\n 30\t4\n").unwrap(), vec![1, -2, 30, 4]);
        assert!(parse_numbers_split("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_numbers_comma() {
        assert_eq!(parse_numbers_comma("3,4,-5\n").unwrap(), vec![3, 4, -5]);
    }

    #[test]
    fn test_parse_numbers_reports_bad_token() {
        let err = parse_numbers_comma("1,x,3").unwrap_err();
        assert!(err.to_string().contains("\"x\""));
    }
}
