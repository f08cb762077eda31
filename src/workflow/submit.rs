//! 提交流程 - 流程层
//!
//! 读取答案 → 提交 → 分类 → 输出，返回进程退出码

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::clients::AocClient;
use crate::error::AppError;
use crate::models::{FinaleOutcome, Part, Puzzle, SubmissionOutcome};
use crate::services::{classify, classify_finale};

/// 把标准输入中的文本解析为整数答案
pub fn parse_answer(raw: &str) -> Result<i64, AppError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|source| AppError::InvalidAnswer {
        input: trimmed.to_string(),
        source,
    })
}

/// 提交答案并输出结果
///
/// # 参数
/// - `client`: 站点客户端
/// - `puzzle`: 题目
/// - `part`: 第几部分
/// - `raw_answer`: 标准输入读取到的原始文本
/// - `out`: 结果输出
///
/// # 返回
/// 返回分类后的提交结果
pub async fn submit_solution(
    client: &AocClient,
    puzzle: Puzzle,
    part: Part,
    raw_answer: &str,
    out: &mut impl Write,
) -> Result<SubmissionOutcome> {
    let answer = parse_answer(raw_answer)?;
    writeln!(out, "answer: {}", answer)?;

    let contents = client
        .post_answer(puzzle, part, &answer.to_string())
        .await?;
    let outcome = classify(&contents);
    info!("{} 提交结果: {}", puzzle, outcome_label(&outcome));

    writeln!(out, "{}", outcome.render())?;
    Ok(outcome)
}

/// 第 25 天第二部分的收尾提交
pub async fn submit_final_day(
    client: &AocClient,
    puzzle: Puzzle,
    out: &mut impl Write,
) -> Result<FinaleOutcome> {
    if puzzle.day != 25 {
        return Err(AppError::NotFinalDay { day: puzzle.day }.into());
    }

    let contents = client.post_answer(puzzle, Part::Two, "0").await?;
    let outcome = classify_finale(&contents);

    writeln!(out, "{}", outcome.render())?;
    Ok(outcome)
}

fn outcome_label(outcome: &SubmissionOutcome) -> &'static str {
    match outcome {
        SubmissionOutcome::Correct => "✅ 正确",
        SubmissionOutcome::Incorrect(_) => "❌ 错误",
        SubmissionOutcome::RateLimited(_) => "⏳ 提交过于频繁",
        SubmissionOutcome::AlreadySolved(_) => "⚠️ 已完成或部分不对",
        SubmissionOutcome::Unrecognized(_) => "❓ 无法识别的响应",
    }
}
