//! 提交结果

/// 成功提示语
pub const RIGHT_ANSWER: &str = "That's the right answer!";

/// 收尾请求成功提示语
pub const CONGRATULATIONS: &str = "Congratulations!";

const RED: &str = "\x1b[41m";
const GREEN: &str = "\x1b[42m";
const RESET: &str = "\x1b[m";

/// 答案提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Correct,
    /// 答案错误，附带服务器提示
    Incorrect(String),
    /// 提交过于频繁，附带等待提示
    RateLimited(String),
    /// 该部分已经完成
    AlreadySolved(String),
    /// 无法识别的响应，保留原文
    Unrecognized(String),
}

impl SubmissionOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmissionOutcome::Correct)
    }

    /// 进程退出码：正确为 0，其余为 1
    pub fn exit_code(&self) -> i32 {
        if self.is_correct() {
            0
        } else {
            1
        }
    }

    /// 渲染为终端输出（带 ANSI 颜色）
    pub fn render(&self) -> String {
        match self {
            SubmissionOutcome::Correct => format!("{GREEN}{RIGHT_ANSWER}{RESET}"),
            SubmissionOutcome::Incorrect(msg)
            | SubmissionOutcome::RateLimited(msg)
            | SubmissionOutcome::AlreadySolved(msg) => format!("{RED}{msg}{RESET}"),
            SubmissionOutcome::Unrecognized(raw) => raw.clone(),
        }
    }
}

/// 第 25 天第二部分收尾请求的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinaleOutcome {
    Congratulations,
    Unrecognized(String),
}

impl FinaleOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            FinaleOutcome::Congratulations => 0,
            FinaleOutcome::Unrecognized(_) => 1,
        }
    }

    pub fn render(&self) -> String {
        match self {
            FinaleOutcome::Congratulations => format!("{GREEN}{CONGRATULATIONS}{RESET}"),
            FinaleOutcome::Unrecognized(raw) => raw.clone(),
        }
    }
}
