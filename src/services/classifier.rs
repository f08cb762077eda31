//! 提交响应分类 - 业务能力层
//!
//! 按固定优先级匹配服务器返回的文本，第一个命中的规则生效

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{FinaleOutcome, SubmissionOutcome, CONGRATULATIONS, RIGHT_ANSWER};

static WRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"That's not the right answer.*?\.").expect("valid regex"));
static TOO_QUICK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"You gave an answer too recently.*to wait.").expect("valid regex")
});
static ALREADY_DONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"You don't seem to be solving.*\?").expect("valid regex"));

/// 对答案提交的响应分类
pub fn classify(contents: &str) -> SubmissionOutcome {
    type Rule = (&'static Regex, fn(String) -> SubmissionOutcome);
    let rules: [Rule; 3] = [
        (&*WRONG, SubmissionOutcome::Incorrect as fn(String) -> SubmissionOutcome),
        (&*TOO_QUICK, SubmissionOutcome::RateLimited),
        (&*ALREADY_DONE, SubmissionOutcome::AlreadySolved),
    ];

    for (re, outcome) in rules {
        if let Some(m) = re.find(contents) {
            debug!("响应命中规则: {}", re.as_str());
            return outcome(m.as_str().to_string());
        }
    }

    if contents.contains(RIGHT_ANSWER) {
        SubmissionOutcome::Correct
    } else {
        debug!("响应未命中任何规则，长度 {}", contents.len());
        SubmissionOutcome::Unrecognized(contents.to_string())
    }
}

/// 对第 25 天收尾请求的响应分类
pub fn classify_finale(contents: &str) -> FinaleOutcome {
    if contents.contains(CONGRATULATIONS) {
        FinaleOutcome::Congratulations
    } else {
        FinaleOutcome::Unrecognized(contents.to_string())
    }
}
