//! # AoC Helper
//!
//! 每日谜题的个人辅助工具：下载题目与输入、提交答案，以及解题常用的网格工具
//!
//! ## 模块结构
//!
//! - `clients/` - 站点 HTTP 客户端（Cookie 认证）
//! - `services/` - 提交响应分类、题目描述提取
//! - `workflow/` - 下载与提交流程
//! - `grid/` - 坐标网格解析、邻域、四方向
//! - `utils/` - 日志、计时、数字列表解析

pub mod clients;
pub mod config;
pub mod error;
pub mod grid;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::AocClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use grid::{Coord, Direction4};
pub use models::{FinaleOutcome, Part, Puzzle, SubmissionOutcome};
