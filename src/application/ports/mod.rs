//! 应用层端口定义
//!
//! 六边形架构的出站端口，基础设施层提供实现

mod repositories;

pub use repositories::{BookRecord, BookRepositoryPort, RepositoryError};
