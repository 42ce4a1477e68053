//! 校验错误类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 字段级错误种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Missing,
    NoneNotAllowed,
    IntType,
    StrType,
    DictType,
    ExtraForbidden,
}

impl ErrorKind {
    /// 错误类型编码，例如 `type_error.integer`
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Missing => "value_error.missing",
            ErrorKind::NoneNotAllowed => "type_error.none.not_allowed",
            ErrorKind::IntType => "type_error.integer",
            ErrorKind::StrType => "type_error.str",
            ErrorKind::DictType => "type_error.dict",
            ErrorKind::ExtraForbidden => "value_error.extra",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Missing => "field required",
            ErrorKind::NoneNotAllowed => "none is not an allowed value",
            ErrorKind::IntType => "value is not a valid integer",
            ErrorKind::StrType => "str type expected",
            ErrorKind::DictType => "value is not a valid dict",
            ErrorKind::ExtraForbidden => "extra fields not permitted",
        }
    }
}

/// 单个字段的错误详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            loc: vec![field.into()],
            msg: kind.message().to_string(),
            kind: kind.code().to_string(),
        }
    }

    /// 错误位置的第一段，即字段名
    pub fn field(&self) -> &str {
        self.loc.first().map(String::as_str).unwrap_or_default()
    }
}

/// 模型校验失败，包含全部字段错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    model: &'static str,
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(model: &'static str, errors: Vec<FieldError>) -> Self {
        Self { model, errors }
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// 是否存在指定字段的错误
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }

    /// 摘要行，例如 `2 validation errors for UserCreate`
    pub fn summary(&self) -> String {
        let count = self.errors.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{} validation error{} for {}", count, plural, self.model)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())?;
        for error in &self.errors {
            write!(
                f,
                "\n{}\n  {} (type={})",
                error.loc.join(" -> "),
                error.msg,
                error.kind
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.errors.serialize(serializer)
    }
}
