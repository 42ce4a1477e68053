//! # 用户数据契约
//!
//! 用户记录的校验与序列化模型：
//! - `UserBase`：共享字段
//! - `UserCreate`：创建用户时接受的输入
//! - `UserOut`：带持久化 id 的输出，可从任意属性来源构造（ORM 模式）

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod schema;

pub use app::user::{UserBase, UserCreate, UserOut, UserService};
pub use schema::{Attributes, FromOrm, Schema, SchemaConfig, ValidationError};
