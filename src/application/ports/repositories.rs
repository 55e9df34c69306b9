//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::book::{Book, BookStatus, LoanPeriod};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 图书记录（用于持久化）
///
/// 文本字段在进入这里之前已经通过领域层校验；
/// 枚举字段保持封闭类型，到数据库边界才转成字符串。
#[derive(Debug, Clone)]
pub struct BookRecord {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: LoanPeriod,
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: *book.id().as_uuid(),
            name: book.name().as_str().to_string(),
            author: book.author().as_str().to_string(),
            year_published: book.year_published().as_i32(),
            book_type: book.loan_period(),
            status: book.status(),
            created_at: book.created_at(),
            updated_at: book.updated_at(),
        }
    }
}

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 保存新图书
    async fn save(&self, book: &BookRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找图书
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, RepositoryError>;

    /// 根据书名查找图书（同名时取最早入库的一条）
    async fn find_by_name(&self, name: &str) -> Result<Option<BookRecord>, RepositoryError>;

    /// 获取所有图书
    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError>;

    /// 更新图书
    async fn update(&self, book: &BookRecord) -> Result<(), RepositoryError>;

    /// 删除图书
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
