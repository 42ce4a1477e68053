//! 声明式模型校验
//!
//! 每个模型声明字段表（名称与类型）、配置以及从 [`FieldReader`] 读取自身的方式，
//! 由 [`Schema`] 提供统一的解析、错误收集和 JSON Schema 导出。

pub mod attributes;
pub mod coerce;
pub mod error;

use serde_json::{json, Map, Value};
use tracing::debug;

pub use attributes::Attributes;
pub use coerce::FieldReader;
pub use error::{ErrorKind, FieldError, ValidationError};

/// 字段声明类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    Str,
}

impl FieldType {
    fn json_type(self) -> &'static str {
        match self {
            FieldType::Int => "integer",
            FieldType::Str => "string",
        }
    }
}

/// 字段定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldDef {
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Int,
        }
    }

    pub const fn str(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::Str,
        }
    }
}

/// 未声明字段的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extra {
    /// 忽略未声明字段
    #[default]
    Ignore,
    /// 拒绝未声明字段
    Forbid,
}

/// 模型配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaConfig {
    pub extra: Extra,
    /// 去除字符串字段首尾空白
    pub anystr_strip_whitespace: bool,
}

impl SchemaConfig {
    pub const DEFAULT: SchemaConfig = SchemaConfig {
        extra: Extra::Ignore,
        anystr_strip_whitespace: false,
    };
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 可校验的数据模型
pub trait Schema: Sized {
    /// 模型名称，用于错误信息和 JSON Schema 标题
    const NAME: &'static str;
    /// 按输出顺序排列的字段
    const FIELDS: &'static [FieldDef];
    const CONFIG: SchemaConfig = SchemaConfig::DEFAULT;

    /// 读取全部字段；任一字段失败时返回 `None`，错误记录在 reader 中
    fn read(reader: &mut FieldReader<'_>) -> Option<Self>;

    /// 从键值映射解析模型
    fn parse_obj(value: &Value) -> Result<Self, ValidationError> {
        let Some(map) = value.as_object() else {
            let error = FieldError::new("__root__", ErrorKind::DictType);
            return Err(reject::<Self>(vec![error]));
        };

        let mut reader = FieldReader::new(map, Self::CONFIG);
        let parsed = Self::read(&mut reader);

        if Self::CONFIG.extra == Extra::Forbid {
            for key in map.keys() {
                if !Self::FIELDS.iter().any(|field| field.name == key.as_str()) {
                    reader.push(FieldError::new(key.clone(), ErrorKind::ExtraForbidden));
                }
            }
        }

        finish::<Self>(parsed, reader)
    }

    /// 导出 JSON Schema 描述
    fn schema() -> Value {
        let mut properties = Map::new();
        for field in Self::FIELDS {
            properties.insert(
                field.name.to_string(),
                json!({
                    "title": title_case(field.name),
                    "type": field.ty.json_type(),
                }),
            );
        }
        let required: Vec<&str> = Self::FIELDS.iter().map(|field| field.name).collect();

        json!({
            "title": Self::NAME,
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// 声明的字段名
    fn field_names() -> Vec<&'static str> {
        Self::FIELDS.iter().map(|field| field.name).collect()
    }
}

/// 支持从任意属性来源构造的模型（ORM 模式）
pub trait FromOrm: Schema {
    fn from_orm<A: Attributes>(source: &A) -> Result<Self, ValidationError> {
        let mut reader = FieldReader::new(source, Self::CONFIG);
        let parsed = Self::read(&mut reader);
        finish::<Self>(parsed, reader)
    }
}

fn finish<S: Schema>(parsed: Option<S>, reader: FieldReader<'_>) -> Result<S, ValidationError> {
    let errors = reader.into_errors();
    match parsed {
        Some(model) if errors.is_empty() => Ok(model),
        _ => Err(reject::<S>(errors)),
    }
}

fn reject<S: Schema>(errors: Vec<FieldError>) -> ValidationError {
    debug!(model = S::NAME, errors = errors.len(), "validation failed");
    ValidationError::new(S::NAME, errors)
}

fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Tag {
        label: String,
        weight: i64,
    }

    impl Schema for Tag {
        const NAME: &'static str = "Tag";
        const FIELDS: &'static [FieldDef] = &[FieldDef::str("label"), FieldDef::int("weight")];
        const CONFIG: SchemaConfig = SchemaConfig {
            extra: Extra::Forbid,
            anystr_strip_whitespace: true,
        };

        fn read(reader: &mut FieldReader<'_>) -> Option<Self> {
            let label = reader.str("label");
            let weight = reader.int("weight");
            Some(Self {
                label: label?,
                weight: weight?,
            })
        }
    }

    #[test]
    fn test_parse_obj_applies_config() {
        let tag = Tag::parse_obj(&json!({"label": " rust ", "weight": "3"})).unwrap();
        assert_eq!(
            tag,
            Tag {
                label: "rust".to_string(),
                weight: 3
            }
        );
    }

    #[test]
    fn test_forbidden_extra_fields_are_reported_after_field_errors() {
        let err = Tag::parse_obj(&json!({"label": "x", "weight": "heavy", "colour": "red"}))
            .unwrap_err();
        let fields: Vec<&str> = err.errors().iter().map(FieldError::field).collect();
        assert_eq!(fields, vec!["weight", "colour"]);
        assert_eq!(err.errors()[1].kind, "value_error.extra");
    }

    #[test]
    fn test_extra_field_alone_fails_parse() {
        let err = Tag::parse_obj(&json!({"label": "x", "weight": 1, "colour": "red"})).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert!(err.has_field("colour"));
    }

    #[test]
    fn test_non_mapping_input_is_rejected_at_root() {
        let err = Tag::parse_obj(&json!(["label", "weight"])).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].loc, vec!["__root__".to_string()]);
        assert_eq!(err.errors()[0].kind, "type_error.dict");
    }

    #[test]
    fn test_schema_document() {
        assert_eq!(
            Tag::schema(),
            json!({
                "title": "Tag",
                "type": "object",
                "properties": {
                    "label": {"title": "Label", "type": "string"},
                    "weight": {"title": "Weight", "type": "integer"}
                },
                "required": ["label", "weight"]
            })
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("id"), "Id");
        assert_eq!(title_case("created_at"), "Created At");
    }
}
