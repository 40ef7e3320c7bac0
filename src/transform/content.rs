//! # 内容转换器（序列化过滤器）
//!
//! 在序列化前按 `(key, value)` 遍历整个值，只改写字符串叶子，
//! 流水线无需了解数据的具体结构。
//!
//! ## 遍历顺序
//! 与带 replacer 的 JSON 序列化一致：先以空键调用根值，再对过滤后的结果
//! 逐个访问对象成员（键为成员名）和数组元素（键为下标），递归进行。
//! 对象的键本身不会被改写。
//!
//! ## 依赖关系
//! - 被 `parsers/json.rs`、`presets/` 使用
//! - 使用 `transform/string.rs`, `serde_json`

use crate::transform::string::StringTransformer;

use regex::Regex;
use serde_json::Value;
use std::sync::Arc;

/// 序列化过滤器
pub type StringifyFilter = Arc<dyn Fn(&str, Value) -> Value + Send + Sync>;

/// 只对字符串值应用转换器的过滤器
pub fn make_stringify_filter(transformer: StringTransformer, pattern: Regex) -> StringifyFilter {
    Arc::new(move |_key, value| match value {
        Value::String(s) => Value::String(transformer.apply(&pattern, &s)),
        other => other,
    })
}

/// 原样返回值
pub fn pass_through() -> StringifyFilter {
    Arc::new(|_key, value| value)
}

/// 用过滤器遍历并改写整个值
pub fn apply_stringify_filter(value: Value, filter: &StringifyFilter) -> Value {
    visit("", value, filter)
}

fn visit(key: &str, value: Value, filter: &StringifyFilter) -> Value {
    match filter(key, value) {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| {
                    let v = visit(&k, v, filter);
                    (k, v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| visit(&i.to_string(), v, filter))
                .collect(),
        ),
        leaf => leaf,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::make_string_transformer;
    use serde_json::json;

    fn yml_to_json() -> StringifyFilter {
        let t = make_string_transformer(|_| "tsconfig.json".to_string());
        make_stringify_filter(t, Regex::new(r"tsconfig\.yml").unwrap())
    }

    #[test]
    fn test_rewrites_nested_string_leaves() {
        let value = json!({ "a": "tsconfig.yml", "b": 42, "c": ["tsconfig.yml"] });
        let out = apply_stringify_filter(value, &yml_to_json());
        assert_eq!(
            out,
            json!({ "a": "tsconfig.json", "b": 42, "c": ["tsconfig.json"] })
        );
    }

    #[test]
    fn test_keys_untouched() {
        let value = json!({ "tsconfig.yml": { "extends": "./tsconfig.yml" } });
        let out = apply_stringify_filter(value, &yml_to_json());
        assert_eq!(out, json!({ "tsconfig.yml": { "extends": "./tsconfig.json" } }));
    }

    #[test]
    fn test_root_string() {
        let out = apply_stringify_filter(json!("tsconfig.yml"), &yml_to_json());
        assert_eq!(out, json!("tsconfig.json"));
    }

    #[test]
    fn test_non_strings_pass_through() {
        let value = json!([1, true, null, 2.5]);
        assert_eq!(apply_stringify_filter(value.clone(), &yml_to_json()), value);
    }

    #[test]
    fn test_keys_reported_to_filter() {
        let keys = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = Arc::clone(&keys);
        let filter: StringifyFilter = Arc::new(move |key, value| {
            seen.lock().unwrap().push(key.to_string());
            value
        });
        apply_stringify_filter(json!({ "list": ["x", "y"] }), &filter);
        assert_eq!(*keys.lock().unwrap(), vec!["", "list", "0", "1"]);
    }
}
