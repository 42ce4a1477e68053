//! 用户业务服务

use serde_json::Value;

use super::model::{UserCreate, UserOut};
use crate::schema::{Attributes, FromOrm, Schema, ValidationError};

/// 用户数据契约的两个入口：校验创建请求、序列化已存储记录
#[derive(Clone, Copy, Debug, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// 校验未受信任的请求数据
    pub fn validate_create(&self, raw: &Value) -> Result<UserCreate, ValidationError> {
        UserCreate::parse_obj(raw)
    }

    /// 将持久层记录转换为输出模型
    pub fn serialize_out<R: Attributes>(&self, record: &R) -> Result<UserOut, ValidationError> {
        UserOut::from_orm(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_create_coerces_age() {
        let service = UserService::new();
        let user = service
            .validate_create(&json!({"name": "Ann", "age": "30", "email": "ann@x.com"}))
            .unwrap();
        assert_eq!(user.age, 30);
    }

    #[test]
    fn test_serialize_out_from_mapping() {
        let service = UserService::new();
        let out = service
            .serialize_out(&json!({"id": 7, "name": "Ann", "age": 30, "email": "ann@x.com"}))
            .unwrap();
        assert_eq!(out.id, 7);
        assert_eq!(out.email, "ann@x.com");
    }
}
