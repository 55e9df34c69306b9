//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping           GET   健康检查
//! - /api/book/create    POST  创建图书
//! - /api/book/update    POST  更新图书
//! - /api/book/delete    POST  删除图书
//! - /api/book/get       POST  获取图书详情
//! - /api/book/list      GET   列出所有图书
//! - /api/book/search    POST  按书名查找图书

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/book", book_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_book))
        .route("/update", post(handlers::update_book))
        .route("/delete", post(handlers::delete_book))
        .route("/get", post(handlers::get_book))
        .route("/list", get(handlers::list_books))
        .route("/search", post(handlers::search_book))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::BookRepositoryPort;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteBookRepository,
    };
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn test_app() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo: Arc<dyn BookRepositoryPort> = Arc::new(SqliteBookRepository::new(pool));
        create_routes().with_state(Arc::new(AppState::new(repo)))
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app().await;
        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_and_search_round_trip() {
        let app = test_app().await;

        let create = json!({
            "name": "Solaris",
            "author": "Stanisław Lem",
            "year_published": 1961,
            "book_type": "5days",
            "status": "available"
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/book/create", &create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["name"], "Solaris");

        let search = json!({"name": "Solaris"});
        let response = app
            .oneshot(post_json("/api/book/search", &search))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["name"], "Solaris");
        assert_eq!(body["data"]["author"], "Stanisław Lem");
        assert_eq!(body["data"]["year_published"], 1961);
        assert_eq!(body["data"]["book_type"], "5days");
        assert_eq!(body["data"]["status"], "available");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields_with_errno() {
        let app = test_app().await;

        // 注入载荷被领域校验拒绝，包络返回 errno 400
        let create = json!({
            "name": "Solaris",
            "author": "';DROP TABLE books; --'",
            "year_published": 1961,
            "book_type": "5days"
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/book/create", &create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["errno"], 400);

        // 被拒绝的记录不会出现在列表里
        let request = Request::builder()
            .uri("/api/book/list")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_wrong_json_types() {
        let app = test_app().await;

        // 类型不符在反序列化阶段拒绝（不进入业务包络）
        let create = json!({
            "name": 1000,
            "author": "Stanisław Lem",
            "year_published": 1961,
            "book_type": "5days"
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/book/create", &create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let create = json!({
            "name": "Solaris",
            "author": "Stanisław Lem",
            "year_published": 34.2,
            "book_type": "5days"
        });
        let response = app
            .oneshot(post_json("/api/book/create", &create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_missing_book_returns_not_found_errno() {
        let app = test_app().await;

        let request = json!({"id": "00000000-0000-0000-0000-000000000000"});
        let response = app
            .oneshot(post_json("/api/book/get", &request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["errno"], 404);
    }

    #[tokio::test]
    async fn test_update_and_delete_flow() {
        let app = test_app().await;

        let create = json!({
            "name": "Lalka",
            "author": "Bolesław Prus",
            "year_published": 1890,
            "book_type": "2days"
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/book/create", &create))
            .await
            .unwrap();
        let body = read_json(response).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let update = json!({
            "id": id,
            "name": "Lalka",
            "author": "Bolesław Prus",
            "year_published": 1890,
            "book_type": "10days"
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/book/update", &update))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);

        let get = json!({"id": id});
        let response = app
            .clone()
            .oneshot(post_json("/api/book/get", &get))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["data"]["book_type"], "10days");

        let delete = json!({"id": id});
        let response = app
            .clone()
            .oneshot(post_json("/api/book/delete", &delete))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["errno"], 0);

        let response = app
            .oneshot(post_json("/api/book/get", &get))
            .await
            .unwrap();
        let body = read_json(response).await;
        assert_eq!(body["errno"], 404);
    }
}
