//! 数据库基础设施
//!
//! 让宿主应用查询得到的 `PgRow` 直接作为模型的属性来源，
//! 例如 `UserOut::from_orm(&row)`。

use serde_json::Value;
use sqlx::{postgres::PgRow, Column, Row, TypeInfo};
use std::borrow::Cow;

use crate::schema::Attributes;

/// 列值解码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Bool,
    Text,
}

/// 按 Postgres 类型名选择解码方式；TEXT、VARCHAR、BPCHAR、NAME 及其他类型按文本解码
fn column_kind(type_name: &str) -> ColumnKind {
    match type_name {
        "INT2" => ColumnKind::Int2,
        "INT4" => ColumnKind::Int4,
        "INT8" => ColumnKind::Int8,
        "FLOAT4" => ColumnKind::Float4,
        "FLOAT8" => ColumnKind::Float8,
        "BOOL" => ColumnKind::Bool,
        _ => ColumnKind::Text,
    }
}

fn decode<'r, T>(row: &'r PgRow, name: &str) -> Option<Value>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres> + Into<Value>,
{
    let value: Option<T> = row.try_get(name).ok()?;
    Some(value.map_or(Value::Null, Into::into))
}

impl Attributes for PgRow {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        let column = self.try_column(name).ok()?;
        let value = match column_kind(column.type_info().name()) {
            ColumnKind::Int2 => decode::<i16>(self, name),
            ColumnKind::Int4 => decode::<i32>(self, name),
            ColumnKind::Int8 => decode::<i64>(self, name),
            ColumnKind::Float4 => decode::<f32>(self, name),
            ColumnKind::Float8 => decode::<f64>(self, name),
            ColumnKind::Bool => decode::<bool>(self, name),
            ColumnKind::Text => decode::<String>(self, name),
        }?;
        Some(Cow::Owned(value))
    }
}
