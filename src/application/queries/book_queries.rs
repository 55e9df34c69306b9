//! Book Queries

use uuid::Uuid;

/// 获取图书详情查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: Uuid,
}

/// 列出所有图书查询
#[derive(Debug, Clone)]
pub struct ListBooks;

/// 按书名查找图书查询
#[derive(Debug, Clone)]
pub struct SearchBooks {
    pub name: String,
}
