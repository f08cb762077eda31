//! 进程退出处理
//!
//! 非成功的 HTTP 响应不算程序错误：打印正文后以 1 退出

use std::io::Write;

use tracing::error;

use crate::error::AppError;

/// 出错时的退出码
pub const FAILURE: u8 = 1;

/// 把终止性错误转换为退出码
///
/// # 返回
/// `AppError::Http` 时打印响应正文并返回 `Some(1)`，其余错误返回 `None` 交给调用方
pub fn exit_for_error(err: &anyhow::Error, out: &mut impl Write) -> Option<u8> {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Http { url, status, body }) => {
            error!("{} 返回状态码 {}", url, status);
            let _ = writeln!(out, "{}", body);
            Some(FAILURE)
        }
        _ => None,
    }
}
