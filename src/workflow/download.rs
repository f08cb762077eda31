//! 下载流程 - 流程层
//!
//! 输入写入输入文件并打印预览，题目描述写入源文件文档块

use std::io::Write;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::info;

use crate::clients::AocClient;
use crate::config::Config;
use crate::error::AppError;
use crate::models::Puzzle;
use crate::services::{extract_description, rewrite_doc_block};
use crate::utils::logging::truncate_text;

const PREVIEW_LINES: usize = 10;
const PREVIEW_WIDTH: usize = 80;

/// 下载输入和题目描述
pub async fn download_challenge(
    client: &AocClient,
    config: &Config,
    puzzle: Puzzle,
    out: &mut impl Write,
) -> Result<()> {
    download_input(client, config, puzzle, out).await?;
    download_problem(client, config, puzzle).await?;
    Ok(())
}

/// 下载题目输入，写入文件并打印预览
pub async fn download_input(
    client: &AocClient,
    config: &Config,
    puzzle: Puzzle,
    out: &mut impl Write,
) -> Result<()> {
    if puzzle.day == 0 {
        return Err(AppError::InvalidDay { day: puzzle.day }.into());
    }

    let input = client.get_input(puzzle).await?;

    fs::write(&config.input_file, &input)
        .await
        .map_err(|e| AppError::io(config.input_file.as_str(), e))?;
    info!("✓ 输入已保存至: {}", config.input_file);

    write!(out, "{}", preview(&input))?;
    Ok(())
}

/// 下载题目描述并写入源文件开头
pub async fn download_problem(client: &AocClient, config: &Config, puzzle: Puzzle) -> Result<()> {
    let page = client.get_problem(puzzle).await?;
    let description = extract_description(&page);

    let source = match fs::read_to_string(&config.source_file).await {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("无法读取源文件: {}", config.source_file))
        }
    };

    fs::write(&config.source_file, rewrite_doc_block(&source, &description))
        .await
        .map_err(|e| AppError::io(config.source_file.as_str(), e))?;
    info!("✓ 题目描述已写入: {}", config.source_file);

    Ok(())
}

/// 输入预览：超过 10 行时显示前 10 行，否则显示第一行的前 80 个字符
pub fn preview(input: &str) -> String {
    let lines: Vec<&str> = input.lines().collect();
    let mut text = String::new();

    if lines.len() > PREVIEW_LINES {
        for line in &lines[..PREVIEW_LINES] {
            text.push_str(line);
            text.push('\n');
        }
    } else if let Some(first) = lines.first() {
        text.push_str(&truncate_text(first, PREVIEW_WIDTH));
        text.push('\n');
    }
    text.push_str("...\n");
    text
}
