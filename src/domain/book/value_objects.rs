//! Book Context - Value Objects

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::BookError;
use crate::domain::text_guard::{screen_text, GuardConfig};

/// 可接受的最早出版年份（活字印刷时代之前的年份视为录入错误）
pub const MIN_YEAR: i32 = 1450;

/// 图书唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书名
///
/// 约束: 非空、单行、不超过 255 字符、不含注入特征
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookName(String);

impl BookName {
    pub fn new(name: impl Into<String>) -> Result<Self, BookError> {
        let name = name.into();
        screen_text(&name, &GuardConfig::default())
            .map_err(|fault| BookError::InvalidName(fault.as_str()))?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者名
///
/// 约束与书名一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(author: impl Into<String>) -> Result<Self, BookError> {
        let author = author.into();
        screen_text(&author, &GuardConfig::default())
            .map_err(|fault| BookError::InvalidAuthor(fault.as_str()))?;
        Ok(Self(author))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 出版年份
///
/// 约束: [MIN_YEAR, 当前年份]，当前年份取校验时刻的墙钟
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearPublished(i32);

impl YearPublished {
    pub fn new(year: i32) -> Result<Self, BookError> {
        let current = Utc::now().year();
        if year < MIN_YEAR || year > current {
            return Err(BookError::YearOutOfRange(year));
        }
        Ok(Self(year))
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for YearPublished {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 借阅期限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPeriod {
    /// 短期借阅，2 天
    #[serde(rename = "2days")]
    TwoDays,
    /// 常规借阅，5 天
    #[serde(rename = "5days")]
    FiveDays,
    /// 长期借阅，10 天
    #[serde(rename = "10days")]
    TenDays,
}

impl LoanPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPeriod::TwoDays => "2days",
            LoanPeriod::FiveDays => "5days",
            LoanPeriod::TenDays => "10days",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "2days" => Some(LoanPeriod::TwoDays),
            "5days" => Some(LoanPeriod::FiveDays),
            "10days" => Some(LoanPeriod::TenDays),
            _ => None,
        }
    }

    /// 借阅天数
    pub fn days(&self) -> u32 {
        match self {
            LoanPeriod::TwoDays => 2,
            LoanPeriod::FiveDays => 5,
            LoanPeriod::TenDays => 10,
        }
    }
}

/// 馆藏状态
///
/// 目前仅有 available 一个合法取值。借出/归还的状态流转由馆员流程
/// 另行处理，这里不做猜测性扩展。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "available")]
    Available,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "available" => Some(BookStatus::Available),
            _ => None,
        }
    }
}

impl Default for BookStatus {
    fn default() -> Self {
        BookStatus::Available
    }
}
