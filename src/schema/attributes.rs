//! 属性来源抽象
//!
//! 模型既可以从键值映射构造，也可以从任何能按名称提供属性的对象构造
//! （例如持久层返回的记录）。

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// 按名称查询属性的能力
pub trait Attributes {
    /// 返回属性值；属性不存在时返回 `None`
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>>;
}

impl Attributes for Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

/// 非对象值没有任何属性
impl Attributes for Value {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.as_object().and_then(|map| map.attribute(name))
    }
}

impl<S: std::hash::BuildHasher> Attributes for HashMap<String, Value, S> {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl Attributes for BTreeMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl<T: Attributes + ?Sized> Attributes for &T {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        (**self).attribute(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_lookup() {
        let value = json!({"name": "Ann"});
        assert_eq!(value.attribute("name").as_deref(), Some(&json!("Ann")));
        assert!(value.attribute("age").is_none());
    }

    #[test]
    fn test_non_object_has_no_attributes() {
        assert!(json!([1, 2]).attribute("name").is_none());
        assert!(Value::Null.attribute("name").is_none());
    }

    #[test]
    fn test_hash_map_lookup() {
        let mut map = HashMap::new();
        map.insert("age".to_string(), json!(30));
        assert_eq!(map.attribute("age").as_deref(), Some(&json!(30)));
    }
}
