//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("书名无效: {0}")]
    InvalidName(&'static str),

    #[error("作者无效: {0}")]
    InvalidAuthor(&'static str),

    #[error("出版年份超出允许范围: {0}")]
    YearOutOfRange(i32),

    #[error("无效的借阅期限: {0}")]
    InvalidLoanPeriod(String),

    #[error("无效的馆藏状态: {0}")]
    InvalidStatus(String),
}
