//! Book Commands

use uuid::Uuid;

/// 创建图书命令
///
/// 字段保持表单层的原始形态，校验在领域层完成
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
    pub status: String,
}

/// 更新图书命令
///
/// 全字段重新校验，不做部分更新
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub book_id: Uuid,
    pub name: String,
    pub author: String,
    pub year_published: i32,
    pub book_type: String,
    pub status: String,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: Uuid,
}
