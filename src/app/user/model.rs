//! 用户数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;

use crate::schema::{FieldDef, FieldReader, FromOrm, Schema, ValidationError};

const NAME_FIELD: FieldDef = FieldDef::str("name");
const AGE_FIELD: FieldDef = FieldDef::int("age");
const EMAIL_FIELD: FieldDef = FieldDef::str("email");
const ID_FIELD: FieldDef = FieldDef::int("id");

const BASE_FIELDS: &[FieldDef] = &[NAME_FIELD, AGE_FIELD, EMAIL_FIELD];
const OUT_FIELDS: &[FieldDef] = &[NAME_FIELD, AGE_FIELD, EMAIL_FIELD, ID_FIELD];

/// 用户共享字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct UserBase {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl UserBase {
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

impl TryFrom<Value> for UserBase {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, ValidationError> {
        Self::parse_obj(&value)
    }
}

impl Schema for UserBase {
    const NAME: &'static str = "UserBase";
    const FIELDS: &'static [FieldDef] = BASE_FIELDS;

    fn read(reader: &mut FieldReader<'_>) -> Option<Self> {
        let name = reader.str(NAME_FIELD.name);
        let age = reader.int(AGE_FIELD.name);
        let email = reader.str(EMAIL_FIELD.name);
        Some(Self {
            name: name?,
            age: age?,
            email: email?,
        })
    }
}

/// 创建用户时接受的请求数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct UserCreate {
    #[serde(flatten)]
    pub base: UserBase,
}

impl UserCreate {
    pub fn into_base(self) -> UserBase {
        self.base
    }
}

impl From<UserBase> for UserCreate {
    fn from(base: UserBase) -> Self {
        Self { base }
    }
}

impl Deref for UserCreate {
    type Target = UserBase;

    fn deref(&self) -> &UserBase {
        &self.base
    }
}

impl TryFrom<Value> for UserCreate {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, ValidationError> {
        Self::parse_obj(&value)
    }
}

impl Schema for UserCreate {
    const NAME: &'static str = "UserCreate";
    const FIELDS: &'static [FieldDef] = BASE_FIELDS;

    fn read(reader: &mut FieldReader<'_>) -> Option<Self> {
        UserBase::read(reader).map(Self::from)
    }
}

/// 已持久化的用户，附带存储层分配的 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct UserOut {
    #[serde(flatten)]
    pub base: UserBase,
    pub id: i64,
}

impl UserOut {
    pub fn new(id: i64, base: UserBase) -> Self {
        Self { base, id }
    }
}

impl Deref for UserOut {
    type Target = UserBase;

    fn deref(&self) -> &UserBase {
        &self.base
    }
}

impl TryFrom<Value> for UserOut {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, ValidationError> {
        Self::parse_obj(&value)
    }
}

impl Schema for UserOut {
    const NAME: &'static str = "UserOut";
    const FIELDS: &'static [FieldDef] = OUT_FIELDS;

    fn read(reader: &mut FieldReader<'_>) -> Option<Self> {
        let base = UserBase::read(reader);
        let id = reader.int(ID_FIELD.name);
        Some(Self { base: base?, id: id? })
    }
}

impl FromOrm for UserOut {}
