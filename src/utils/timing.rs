//! 计时工具
//!
//! 作用域结束时把耗时写到 stderr，不受日志级别影响

use std::io::Write;
use std::time::{Duration, Instant};
use tracing::debug;

/// 计时守卫，drop 时记录耗时
pub struct Timing {
    name: String,
    start: Instant,
}

/// 开始计时，`name` 为空时不附加名称
pub fn timing(name: impl Into<String>) -> Timing {
    Timing {
        name: name.into(),
        start: Instant::now(),
    }
}

impl Timing {
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Timing {
    /// 把耗时写入指定输出
    pub fn report(&self, out: &mut impl Write) -> std::io::Result<()> {
        let elapsed = self.elapsed();
        debug!(name = %self.name, ?elapsed, "计时结束");
        writeln!(out, "{}", format_elapsed(elapsed, &self.name))?;
        out.flush()
    }
}

impl Drop for Timing {
    fn drop(&mut self) {
        let _ = self.report(&mut std::io::stderr());
    }
}

/// 格式化耗时：不足 100 毫秒时使用微秒
pub fn format_elapsed(elapsed: Duration, name: &str) -> String {
    let millis = elapsed.as_secs_f64() * 1000.0;
    let (value, unit) = if millis < 100.0 {
        (millis * 1000.0, "μs")
    } else {
        (millis, "ms")
    };
    let suffix = if name.is_empty() {
        String::new()
    } else {
        format!(" ({})", name)
    };
    format!("> {} {}{}", value as u64, unit, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_micros() {
        assert_eq!(format_elapsed(Duration::from_micros(1500), ""), "> 1500 μs");
    }

    #[test]
    fn test_format_elapsed_millis_with_name() {
        assert_eq!(
            format_elapsed(Duration::from_millis(250), "part1"),
            "> 250 ms (part1)"
        );
    }

    #[test]
    fn test_timing_guard_measures() {
        let guard = timing("guard");
        std::thread::sleep(Duration::from_millis(2));
        assert!(guard.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn test_report_writes_plain_line() {
        let guard = timing("");
        let mut out = Vec::new();
        guard.report(&mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with("> "), "{}", line);
        assert!(line.ends_with(" μs\n") || line.ends_with(" ms\n"), "{}", line);
        assert!(!line.contains("INFO"));
    }
}
