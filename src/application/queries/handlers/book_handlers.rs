//! Book Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{BookRecord, BookRepositoryPort};
use crate::application::queries::{GetBook, ListBooks, SearchBooks};

// ============================================================================
// Response DTOs
// ============================================================================

/// 图书详情视图
#[derive(Debug, Clone)]
pub struct BookView {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
    pub status: String,
    pub created_at: String,
}

impl From<BookRecord> for BookView {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            author: record.author,
            year_published: record.year_published,
            book_type: record.book_type.as_str().to_string(),
            status: record.status.as_str().to_string(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<BookView, ApplicationError> {
        let book = self
            .book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id))?;

        Ok(BookView::from(book))
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, _query: ListBooks) -> Result<Vec<BookView>, ApplicationError> {
        let books = self.book_repo.find_all().await?;
        Ok(books.into_iter().map(BookView::from).collect())
    }
}

/// SearchBooks Handler
///
/// 按书名精确查找；未命中返回 None，由调用方决定如何呈现
pub struct SearchBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl SearchBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: SearchBooks) -> Result<Option<BookView>, ApplicationError> {
        let book = self.book_repo.find_by_name(&query.name).await?;
        Ok(book.map(BookView::from))
    }
}
