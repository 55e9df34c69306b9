//! Book Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthorName, BookError, BookId, BookName, BookStatus, LoanPeriod, YearPublished};

/// Book 聚合根
///
/// 不变量:
/// - 所有字段在构造时完成校验，实例一旦存在即为合法记录
/// - 校验失败的记录不可能到达持久化层
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    name: BookName,
    author: AuthorName,
    year_published: YearPublished,
    loan_period: LoanPeriod,
    status: BookStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Book {
    /// 创建新图书（状态为默认的 available）
    pub fn new(
        name: BookName,
        author: AuthorName,
        year_published: YearPublished,
        loan_period: LoanPeriod,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BookId::new(),
            name,
            author,
            year_published,
            loan_period,
            status: BookStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 从原始表单字段构造图书
    ///
    /// 表单层传入的都是未经校验的字符串和整数，这里逐字段校验，
    /// 任何一个字段不合法都拒绝整条记录。
    pub fn try_from_fields(
        name: &str,
        author: &str,
        year_published: i32,
        book_type: &str,
        status: &str,
    ) -> Result<Self, BookError> {
        let name = BookName::new(name)?;
        let author = AuthorName::new(author)?;
        let year_published = YearPublished::new(year_published)?;
        let loan_period = LoanPeriod::from_str(book_type)
            .ok_or_else(|| BookError::InvalidLoanPeriod(book_type.to_string()))?;
        // 状态枚举当前只有 available 一个成员，from_str 校验之后
        // new() 填入的默认值即为该成员
        BookStatus::from_str(status).ok_or_else(|| BookError::InvalidStatus(status.to_string()))?;

        Ok(Self::new(name, author, year_published, loan_period))
    }

    // Getters
    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn name(&self) -> &BookName {
        &self.name
    }

    pub fn author(&self) -> &AuthorName {
        &self.author
    }

    pub fn year_published(&self) -> YearPublished {
        self.year_published
    }

    pub fn loan_period(&self) -> LoanPeriod {
        self.loan_period
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
