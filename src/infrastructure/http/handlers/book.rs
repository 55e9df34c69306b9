//! Book HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks, SearchBooks, UpdateBook};
use crate::infrastructure::http::dto::{
    ApiResponse, BookCreatedResponse, BookResponse, CreateBookRequest, DeleteBookRequest, Empty,
    GetBookRequest, SearchBookRequest, UpdateBookRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建图书
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookRequest>,
) -> Result<Json<ApiResponse<BookCreatedResponse>>, ApiError> {
    let command = CreateBook {
        name: req.name,
        author: req.author,
        year_published: req.year_published,
        book_type: req.book_type,
        status: req.status,
    };

    let result = state.create_book_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(BookCreatedResponse {
        id: result.id,
        name: result.name,
    })))
}

/// 更新图书（全字段重新校验）
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateBookRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = UpdateBook {
        book_id: req.id,
        name: req.name,
        author: req.author,
        year_published: req.year_published,
        book_type: req.book_type,
        status: req.status,
    };

    state.update_book_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteBookRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .delete_book_handler
        .handle(DeleteBook { book_id: req.id })
        .await?;

    Ok(Json(ApiResponse::ok()))
}

/// 获取图书详情
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetBookRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let view = state
        .get_book_handler
        .handle(GetBook { book_id: req.id })
        .await?;

    Ok(Json(ApiResponse::success(BookResponse::from(view))))
}

/// 获取图书列表
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<BookResponse>>>, ApiError> {
    let views = state.list_books_handler.handle(ListBooks).await?;

    let responses: Vec<BookResponse> = views.into_iter().map(BookResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 按书名查找图书
pub async fn search_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchBookRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let view = state
        .search_books_handler
        .handle(SearchBooks {
            name: req.name.clone(),
        })
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Book not found: {}", req.name)))?;

    Ok(Json(ApiResponse::success(BookResponse::from(view))))
}
