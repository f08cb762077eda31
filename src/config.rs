use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppError, AppResult};

/// 保存会话 Cookie 的环境变量名
pub const COOKIE_ENV_VAR: &str = "ADVENT_OF_CODE_COOKIE";

/// 从当前目录（或上级目录）的 `.env` 加载环境变量，已存在的变量不会被覆盖
///
/// # 返回
/// 返回被加载的文件路径，没有找到时返回 `None`
pub fn load_dotenv() -> Option<PathBuf> {
    let path = dotenvy::dotenv().ok()?;
    debug!("已加载 {}", path.display());
    Some(path)
}

/// 加载指定的 `.env` 文件，文件不存在或无法解析时返回 `false`
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("已加载 {}", path.display());
            true
        }
        Err(e) => {
            debug!("未加载 {}: {}", path.display(), e);
            false
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 会话 Cookie（原样放进 Cookie 请求头）
    pub session_cookie: String,
    /// 站点根地址
    pub base_url: String,
    /// 题目输入保存路径
    pub input_file: String,
    /// 写入题目描述的源文件
    pub source_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_cookie: String::new(),
            base_url: "https://adventofcode.com".to_string(),
            input_file: "input.txt".to_string(),
            source_file: "part1.rs".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量读取配置，Cookie 缺失时报错
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let session_cookie = std::env::var(COOKIE_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::MissingEnvVar {
                var_name: COOKIE_ENV_VAR.to_string(),
            })?;

        Ok(Self {
            session_cookie,
            base_url: std::env::var("AOC_BASE_URL").unwrap_or(default.base_url),
            input_file: std::env::var("AOC_INPUT_FILE").unwrap_or(default.input_file),
            source_file: std::env::var("AOC_SOURCE_FILE").unwrap_or(default.source_file),
        })
    }

    /// 构造指向指定站点的配置（测试与本地调试用）
    pub fn with_base_url(session_cookie: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            session_cookie: session_cookie.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }
}
