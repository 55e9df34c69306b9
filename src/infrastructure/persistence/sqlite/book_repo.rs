//! SQLite Book Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::error::ErrorKind;
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{BookRecord, BookRepositoryPort, RepositoryError};
use crate::domain::book::{BookStatus, LoanPeriod};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: String,
    name: String,
    author: String,
    year_published: i64,
    book_type: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<BookRow> for BookRecord {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(BookRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            name: row.name,
            author: row.author,
            year_published: row.year_published as i32,
            book_type: LoanPeriod::from_str(&row.book_type).ok_or_else(|| {
                RepositoryError::SerializationError(format!(
                    "unknown book_type in storage: {}",
                    row.book_type
                ))
            })?,
            status: BookStatus::from_str(&row.status).ok_or_else(|| {
                RepositoryError::SerializationError(format!(
                    "unknown status in storage: {}",
                    row.status
                ))
            })?,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
            updated_at: DateTime::parse_from_rfc3339(&row.updated_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

/// 区分约束违例与其他数据库错误，上层据此选择响应
fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation => RepositoryError::Duplicate(db.message().to_string()),
            ErrorKind::CheckViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::ForeignKeyViolation => {
                RepositoryError::ConstraintViolation(db.message().to_string())
            }
            _ => RepositoryError::DatabaseError(db.message().to_string()),
        },
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn save(&self, book: &BookRecord) -> Result<(), RepositoryError> {
        // 仅新增，不做 upsert：重复 ID 属于调用方错误
        sqlx::query(
            r#"
            INSERT INTO books (id, name, author, year_published, book_type, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(book.id.to_string())
        .bind(&book.name)
        .bind(&book.author)
        .bind(book.year_published as i64)
        .bind(book.book_type.as_str())
        .bind(book.status.as_str())
        .bind(book.created_at.to_rfc3339())
        .bind(book.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, name, author, year_published, book_type, status, created_at, updated_at FROM books WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(BookRecord::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<BookRecord>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, name, author, year_published, book_type, status, created_at, updated_at FROM books WHERE name = ? ORDER BY created_at LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(BookRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<BookRecord>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, name, author, year_published, book_type, status, created_at, updated_at FROM books ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(BookRecord::try_from).collect()
    }

    async fn update(&self, book: &BookRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET name = ?, author = ?, year_published = ?, book_type = ?, status = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.name)
        .bind(&book.author)
        .bind(book.year_published as i64)
        .bind(book.book_type.as_str())
        .bind(book.status.as_str())
        .bind(book.updated_at.to_rfc3339())
        .bind(book.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(book.id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn setup_repo() -> SqliteBookRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteBookRepository::new(pool)
    }

    fn make_record(name: &str) -> BookRecord {
        let now = Utc::now();
        BookRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            author: "Stanisław Lem".to_string(),
            year_published: 1961,
            book_type: LoanPeriod::FiveDays,
            status: BookStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = setup_repo().await;
        let record = make_record("Solaris");
        repo.save(&record).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.id, record.id);
        assert_eq!(found.name, "Solaris");
        assert_eq!(found.author, "Stanisław Lem");
        assert_eq!(found.year_published, 1961);
        assert_eq!(found.book_type, LoanPeriod::FiveDays);
        assert_eq!(found.status, BookStatus::Available);
    }

    #[tokio::test]
    async fn test_find_by_name_round_trip() {
        let repo = setup_repo().await;
        let record = make_record("Przedwiośnie");
        repo.save(&record).await.unwrap();

        let found = repo.find_by_name("Przedwiośnie").await.unwrap().unwrap();
        assert_eq!(found.id, record.id);
        assert_eq!(found.name, record.name);
        assert_eq!(found.author, record.author);
        assert_eq!(found.year_published, record.year_published);
        assert_eq!(found.book_type, record.book_type);
        assert_eq!(found.status, record.status);

        assert!(repo.find_by_name("Nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_duplicate_id_rejected() {
        let repo = setup_repo().await;
        let record = make_record("Solaris");
        repo.save(&record).await.unwrap();

        let err = repo.save(&record).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_find_all() {
        let repo = setup_repo().await;
        repo.save(&make_record("Lalka")).await.unwrap();
        repo.save(&make_record("Solaris")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_update() {
        let repo = setup_repo().await;
        let mut record = make_record("Solaris");
        repo.save(&record).await.unwrap();

        record.name = "Lalka".to_string();
        record.author = "Bolesław Prus".to_string();
        record.year_published = 1890;
        record.book_type = LoanPeriod::TwoDays;
        record.updated_at = Utc::now();
        repo.update(&record).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Lalka");
        assert_eq!(found.year_published, 1890);
        assert_eq!(found.book_type, LoanPeriod::TwoDays);

        let missing = make_record("Ghost");
        assert!(matches!(
            repo.update(&missing).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup_repo().await;
        let record = make_record("Solaris");
        repo.save(&record).await.unwrap();

        repo.delete(record.id).await.unwrap();
        assert!(repo.find_by_id(record.id).await.unwrap().is_none());

        assert!(matches!(
            repo.delete(record.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
