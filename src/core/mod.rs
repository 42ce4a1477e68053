//! 核心层：请求层错误与提取器

pub mod error;
pub mod extract;
