//! Libris - 图书馆藏书追踪服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 馆藏图书管理，字段值对象在构造时完成全部校验
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repository）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储（带 CHECK 约束作为第二道防线）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
