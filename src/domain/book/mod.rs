//! Book Context - 图书限界上下文
//!
//! 职责:
//! - Book 聚合管理
//! - 字段值对象与构造期校验
//! - 借阅期限与馆藏状态的封闭枚举

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Book;
pub use errors::BookError;
pub use value_objects::{
    AuthorName, BookId, BookName, BookStatus, LoanPeriod, YearPublished, MIN_YEAR,
};
