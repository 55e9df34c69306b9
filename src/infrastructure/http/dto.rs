//! Data Transfer Objects
//!
//! 请求/响应结构与统一响应包络。
//! 字段类型即第一道防线：serde 反序列化拒绝类型不符的 JSON
//! （文本字段给了数字、年份给了小数等）。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

fn default_status() -> String {
    "available".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBookRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct GetBookRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SearchBookRequest {
    pub name: String,
}

/// 创建结果响应
#[derive(Debug, Serialize)]
pub struct BookCreatedResponse {
    pub id: Uuid,
    pub name: String,
}

/// 图书详情响应
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
    pub status: String,
    pub created_at: String,
}

impl From<crate::application::BookView> for BookResponse {
    fn from(view: crate::application::BookView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            author: view.author,
            year_published: view.year_published,
            book_type: view.book_type,
            status: view.status,
            created_at: view.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses_well_formed_json() {
        let req: CreateBookRequest = serde_json::from_str(
            r#"{"name": "Solaris", "author": "Stanisław Lem", "year_published": 1961, "book_type": "5days", "status": "available"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Solaris");
        assert_eq!(req.year_published, 1961);
    }

    #[test]
    fn test_create_request_status_defaults_to_available() {
        let req: CreateBookRequest = serde_json::from_str(
            r#"{"name": "Solaris", "author": "Stanisław Lem", "year_published": 1961, "book_type": "5days"}"#,
        )
        .unwrap();
        assert_eq!(req.status, "available");
    }

    #[test]
    fn test_create_request_rejects_non_text_name() {
        // 文本字段给数字/浮点/null/对象/数组都在反序列化阶段拒绝
        for bad in [
            r#"{"name": 1000, "author": "a", "year_published": 1961, "book_type": "5days"}"#,
            r#"{"name": 10.0, "author": "a", "year_published": 1961, "book_type": "5days"}"#,
            r#"{"name": null, "author": "a", "year_published": 1961, "book_type": "5days"}"#,
            r#"{"name": {}, "author": "a", "year_published": 1961, "book_type": "5days"}"#,
            r#"{"name": [], "author": "a", "year_published": 1961, "book_type": "5days"}"#,
        ] {
            assert!(
                serde_json::from_str::<CreateBookRequest>(bad).is_err(),
                "should reject: {bad}"
            );
        }
    }

    #[test]
    fn test_create_request_rejects_non_text_author_and_enums() {
        for bad in [
            r#"{"name": "a", "author": 1000, "year_published": 1961, "book_type": "5days"}"#,
            r#"{"name": "a", "author": "b", "year_published": 1961, "book_type": 2002}"#,
            r#"{"name": "a", "author": "b", "year_published": 1961, "book_type": "5days", "status": 34.2}"#,
            r#"{"name": "a", "author": "b", "year_published": 1961, "book_type": "5days", "status": null}"#,
        ] {
            assert!(
                serde_json::from_str::<CreateBookRequest>(bad).is_err(),
                "should reject: {bad}"
            );
        }
    }

    #[test]
    fn test_create_request_rejects_non_integer_year() {
        for bad in [
            r#"{"name": "a", "author": "b", "year_published": 34.2, "book_type": "5days"}"#,
            r#"{"name": "a", "author": "b", "year_published": "1234", "book_type": "5days"}"#,
            r#"{"name": "a", "author": "b", "year_published": null, "book_type": "5days"}"#,
            r#"{"name": "a", "author": "b", "year_published": {}, "book_type": "5days"}"#,
            r#"{"name": "a", "author": "b", "year_published": 4294967295, "book_type": "5days"}"#,
        ] {
            assert!(
                serde_json::from_str::<CreateBookRequest>(bad).is_err(),
                "should reject: {bad}"
            );
        }
    }
}
