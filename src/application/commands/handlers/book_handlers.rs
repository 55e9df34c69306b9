//! Book Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::domain::book::Book;

// ============================================================================
// CreateBook
// ============================================================================

/// 创建图书响应
#[derive(Debug, Clone)]
pub struct CreateBookResponse {
    pub id: Uuid,
    pub name: String,
}

/// CreateBook Handler
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 校验严格先于持久化：聚合构造失败则记录不会触达仓储
    pub async fn handle(&self, command: CreateBook) -> Result<CreateBookResponse, ApplicationError> {
        let book = Book::try_from_fields(
            &command.name,
            &command.author,
            command.year_published,
            &command.book_type,
            &command.status,
        )?;

        let record = BookRecord::from(&book);
        self.book_repo.save(&record).await?;

        tracing::info!(
            book_id = %record.id,
            name = %record.name,
            book_type = record.book_type.as_str(),
            "Book created"
        );

        Ok(CreateBookResponse {
            id: record.id,
            name: record.name,
        })
    }
}

// ============================================================================
// UpdateBook
// ============================================================================

/// UpdateBook Handler
pub struct UpdateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    /// 全字段重新校验后覆盖写入，保留原 ID 和入库时间
    pub async fn handle(&self, command: UpdateBook) -> Result<(), ApplicationError> {
        let existing = self
            .book_repo
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", command.book_id))?;

        let book = Book::try_from_fields(
            &command.name,
            &command.author,
            command.year_published,
            &command.book_type,
            &command.status,
        )?;

        let record = BookRecord {
            id: existing.id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
            ..BookRecord::from(&book)
        };
        self.book_repo.update(&record).await?;

        tracing::info!(book_id = %record.id, name = %record.name, "Book updated");

        Ok(())
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        let book = self
            .book_repo
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", command.book_id))?;

        self.book_repo.delete(command.book_id).await?;

        tracing::info!(book_id = %command.book_id, name = %book.name, "Book deleted");

        Ok(())
    }
}
