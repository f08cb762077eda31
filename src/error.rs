use std::path::PathBuf;

use thiserror::Error;

use crate::grid::GridError;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 环境变量不存在
    #[error("环境变量 {var_name} 不存在")]
    MissingEnvVar { var_name: String },

    /// Cookie 含有不能放进请求头的字符
    #[error("Cookie 不是合法的请求头值")]
    InvalidCookie,

    /// 服务器返回非成功状态码，body 原样保留以便打印
    #[error("请求 {url} 失败 (状态码 {status})")]
    Http {
        url: String,
        status: u16,
        body: String,
    },

    /// 网络请求本身失败
    #[error("网络请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 工作目录不符合 aoc<年份>/day<日期> 的约定
    #[error("unexpected working dir: {}", path.display())]
    WorkingDir { path: PathBuf },

    /// 日期从 1 开始，day00 无效
    #[error("days are one-indexed, so day{day:02} is invalid")]
    InvalidDay { day: u8 },

    /// 只有第 25 天才有收尾提交
    #[error("只有第 25 天可以提交收尾请求，当前为第 {day} 天")]
    NotFinalDay { day: u8 },

    /// 标准输入中的答案不是整数
    #[error("无法把 {input:?} 解析为整数答案")]
    InvalidAnswer {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// 网格解析错误
    #[error(transparent)]
    Grid(#[from] GridError),

    /// 文件读写错误
    #[error("文件操作失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// 创建文件读写错误
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::parse_coords_int;

    fn load_grid(s: &str) -> AppResult<usize> {
        Ok(parse_coords_int(s)?.len())
    }

    #[test]
    fn test_grid_error_converts() {
        assert_eq!(load_grid("12\n34").unwrap(), 4);
        assert!(matches!(load_grid("1a"), Err(AppError::Grid(_))));
    }

    #[test]
    fn test_invalid_day_message() {
        let err = AppError::InvalidDay { day: 0 };
        assert_eq!(err.to_string(), "days are one-indexed, so day00 is invalid");
    }
}
