/// 谜题站点 API 客户端
///
/// 封装所有与站点的 HTTP 交互，Cookie 在构造时写入默认请求头
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Part, Puzzle};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::{debug, info};

/// 答案提交表单
#[derive(Debug, Serialize)]
struct AnswerForm<'a> {
    level: u8,
    answer: &'a str,
}

/// 站点客户端
pub struct AocClient {
    client: Client,
    base_url: String,
}

impl AocClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let cookie =
            HeaderValue::from_str(&config.session_cookie).map_err(|_| AppError::InvalidCookie)?;
        headers.insert(COOKIE, cookie);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取题目输入
    pub async fn get_input(&self, puzzle: Puzzle) -> AppResult<String> {
        let url = format!("{}{}/input", self.base_url, puzzle.path());
        info!("{} 📥 下载输入", puzzle);
        self.send(self.client.get(&url), &url).await
    }

    /// 获取题目页面
    pub async fn get_problem(&self, puzzle: Puzzle) -> AppResult<String> {
        let url = format!("{}{}", self.base_url, puzzle.path());
        info!("{} 📄 下载题目描述", puzzle);
        self.send(self.client.get(&url), &url).await
    }

    /// 提交答案
    ///
    /// # 参数
    /// - `puzzle`: 题目
    /// - `part`: 第几部分
    /// - `answer`: 答案文本
    ///
    /// # 返回
    /// 返回服务器响应正文
    pub async fn post_answer(&self, puzzle: Puzzle, part: Part, answer: &str) -> AppResult<String> {
        let url = format!("{}{}/answer", self.base_url, puzzle.path());
        let form = AnswerForm {
            level: part.level(),
            answer,
        };
        info!("{} 📤 提交第 {} 部分答案", puzzle, part);
        self.send(self.client.post(&url).form(&form), &url).await
    }

    /// 发送请求，非成功状态码返回 `AppError::Http` 并保留正文
    async fn send(&self, request: RequestBuilder, url: &str) -> AppResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{} -> {} ({} 字节)", url, status, body.len());

        if !status.is_success() {
            return Err(AppError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
