//! 题目描述处理 - 业务能力层
//!
//! 从题目页面提取描述文本，并写入源文件开头的 `//!` 文档块

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

const DOC_PREFIX: &str = "//!";

/// 从题目页面中提取描述
///
/// 从第一个 `---` 开始截取，到 `To begin, ` 之前结束，去掉 HTML 标签并还原常见实体
pub fn extract_description(page: &str) -> String {
    let body = match page.split_once("---") {
        Some((_, rest)) => format!("---{}", rest),
        None => page.to_string(),
    };
    let body = body.split("To begin, ").next().unwrap_or_default();
    let text = TAG.replace_all(body, "");
    decode_entities(&text).trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// 用描述替换源文件开头的文档块，保留其余内容
///
/// 其余行原样保留（包括 `\r\n` 行尾），新文档块沿用源文件的行尾风格
pub fn rewrite_doc_block(source: &str, description: &str) -> String {
    let eol = if source.contains("\r\n") { "\r\n" } else { "\n" };

    let mut out: String = description
        .lines()
        .map(|line| {
            if line.is_empty() {
                format!("{}{}", DOC_PREFIX, eol)
            } else {
                format!("{} {}{}", DOC_PREFIX, line, eol)
            }
        })
        .collect();

    for line in source
        .split_inclusive('\n')
        .skip_while(|line| line.trim_start().starts_with(DOC_PREFIX))
    {
        out.push_str(line);
    }
    if !out.ends_with('\n') {
        out.push_str(eol);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><head><title>Day 1 - Advent of Code</title></head><body><main>\
<article class=\"day-desc\"><h2>--- Day 1: Trebuchet?! ---</h2>\n<p>Something is wrong with &quot;global&quot; snow &amp; ice.</p>\n<p>To begin, <a href=\"1/input\">get your puzzle input</a>.</p></article></main></body></html>";

    #[test]
    fn test_extract_description() {
        let text = extract_description(PAGE);
        assert_eq!(
            text,
            "--- Day 1: Trebuchet?! ---\nSomething is wrong with \"global\" snow & ice."
        );
    }

    #[test]
    fn test_extract_description_without_marker() {
        assert_eq!(extract_description("<p>plain</p>"), "plain");
    }

    #[test]
    fn test_rewrite_replaces_existing_block() {
        let source = "//! old text\n//! more\nfn main() {}\n";
        let out = rewrite_doc_block(source, "--- Day 2 ---\n\nnew");
        assert_eq!(out, "//! --- Day 2 ---\n//!\n//! new\nfn main() {}\n");
    }

    #[test]
    fn test_rewrite_without_existing_block() {
        let out = rewrite_doc_block("fn main() {}", "desc");
        assert_eq!(out, "//! desc\nfn main() {}\n");
    }

    #[test]
    fn test_rewrite_keeps_crlf_endings() {
        let source = "//! old\r\nfn main() {\r\n}\r\n";
        let out = rewrite_doc_block(source, "new\n\nmore");
        assert_eq!(out, "//! new\r\n//!\r\n//! more\r\nfn main() {\r\n}\r\n");
    }

    #[test]
    fn test_rewrite_empty_source() {
        assert_eq!(rewrite_doc_block("", "desc"), "//! desc\n");
    }
}
