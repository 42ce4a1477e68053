//! 字段类型转换与读取

use serde_json::{Number, Value};

use super::attributes::Attributes;
use super::error::{ErrorKind, FieldError};
use super::SchemaConfig;

/// 将 JSON 值转换为整数
///
/// 接受整数、小数部分为零的浮点数以及可解析为整数的字符串（去除首尾空白）。
pub fn coerce_int(value: &Value) -> Result<i64, ErrorKind> {
    match value {
        Value::Null => Err(ErrorKind::NoneNotAllowed),
        Value::Number(number) => number_to_int(number),
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| ErrorKind::IntType),
        _ => Err(ErrorKind::IntType),
    }
}

fn number_to_int(number: &Number) -> Result<i64, ErrorKind> {
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    match number.as_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 => {
            // i64::MAX 无法精确表示为 f64，上界使用开区间
            if float >= i64::MIN as f64 && float < i64::MAX as f64 {
                Ok(float as i64)
            } else {
                Err(ErrorKind::IntType)
            }
        }
        _ => Err(ErrorKind::IntType),
    }
}

/// 将 JSON 值转换为字符串，数字转为其十进制文本
pub fn coerce_str(value: &Value) -> Result<String, ErrorKind> {
    match value {
        Value::Null => Err(ErrorKind::NoneNotAllowed),
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(ErrorKind::StrType),
    }
}

/// 从属性来源逐个读取字段，并累积所有字段错误
pub struct FieldReader<'a> {
    source: &'a dyn Attributes,
    config: SchemaConfig,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(source: &'a dyn Attributes, config: SchemaConfig) -> Self {
        Self {
            source,
            config,
            errors: Vec::new(),
        }
    }

    pub fn int(&mut self, name: &'static str) -> Option<i64> {
        self.read(name, coerce_int)
    }

    pub fn str(&mut self, name: &'static str) -> Option<String> {
        let config = self.config;
        self.read(name, |value| {
            coerce_str(value).map(|text| {
                if config.anystr_strip_whitespace {
                    text.trim().to_string()
                } else {
                    text
                }
            })
        })
    }

    fn read<T>(
        &mut self,
        name: &'static str,
        coerce: impl FnOnce(&Value) -> Result<T, ErrorKind>,
    ) -> Option<T> {
        let Some(value) = self.source.attribute(name) else {
            self.errors.push(FieldError::new(name, ErrorKind::Missing));
            return None;
        };
        match coerce(&value) {
            Ok(parsed) => Some(parsed),
            Err(kind) => {
                self.errors.push(FieldError::new(name, kind));
                None
            }
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}
