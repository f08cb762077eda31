//! 题目定位：年份、日期与提交的部分

use std::fmt;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// 一道题目，由年份和日期确定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub year: u16,
    pub day: u8,
}

impl Puzzle {
    pub fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// 从目录结构推断题目，约定为 `.../aoc<年份>/day<日期>`
    pub fn from_dir(dir: &Path) -> AppResult<Self> {
        let malformed = || AppError::WorkingDir {
            path: dir.to_path_buf(),
        };

        let day_s = dir
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(malformed)?;
        let year_s = dir
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .ok_or_else(malformed)?;

        let day = day_s
            .strip_prefix("day")
            .and_then(|d| d.parse().ok())
            .ok_or_else(malformed)?;
        let year = year_s
            .strip_prefix("aoc")
            .and_then(|y| y.parse().ok())
            .ok_or_else(malformed)?;

        Ok(Self { year, day })
    }

    /// 从当前工作目录推断题目
    pub fn from_cwd() -> AppResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| AppError::io(".", e))?;
        Self::from_dir(&cwd)
    }

    /// 题目页面路径
    pub fn path(&self) -> String {
        format!("/{}/day/{}", self.year, self.day)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} 第 {} 天]", self.year, self.day)
    }
}

/// 提交的部分（服务器称为 level）
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl Part {
    pub fn level(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}
