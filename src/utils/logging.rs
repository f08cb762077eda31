/// 日志工具模块
///
/// 初始化 tracing 并提供输出辅助函数
use tracing_subscriber::EnvFilter;

/// 初始化日志，输出到 stderr，保持 stdout 只包含结果
///
/// 默认级别为 `info`，可通过 `RUST_LOG` 覆盖
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// 截断长文本用于显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回前 `max_len` 个字符
pub fn truncate_text(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}
