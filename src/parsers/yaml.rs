//! # YAML 解析器
//!
//! 将 YAML 文本安全加载为 JSON 数据模型（`serde_json::Value`）。
//! 不执行任何自定义标签。
//!
//! ## 依赖关系
//! - 被 `presets/` 使用
//! - 使用 `serde_yaml`

use crate::error::{PrestageError, Result};

use serde_json::Value;

/// 解析 YAML 内容，错误信息中带上文件名
pub fn yaml_safe_load(contents: &str, filename: &str) -> Result<Value> {
    serde_yaml::from_str(contents).map_err(|e| PrestageError::ParseError {
        format: "YAML".to_string(),
        path: filename.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_mapping() {
        let content = r#"
compilerOptions:
  strict: true
  target: es2019
include:
  - src
"#;
        let value = yaml_safe_load(content, "tsconfig.yml").unwrap();
        assert_eq!(
            value,
            json!({
                "compilerOptions": { "strict": true, "target": "es2019" },
                "include": ["src"]
            })
        );
    }

    #[test]
    fn test_keeps_key_order() {
        let value = yaml_safe_load("zeta: 1\nalpha: 2\n", "order.yml").unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = yaml_safe_load("a: [unclosed", "broken.yml").unwrap_err();
        match err {
            PrestageError::ParseError { path, format, .. } => {
                assert_eq!(path, "broken.yml");
                assert_eq!(format, "YAML");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
