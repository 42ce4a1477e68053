//! 用户数据契约

pub mod model;
pub mod service;

pub use model::{UserBase, UserCreate, UserOut};
pub use service::UserService;
