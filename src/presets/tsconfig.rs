//! # tsconfig 预设
//!
//! 把 YAML 形式的 TypeScript 配置转换为 JSON，并统一命名：
//!
//! ```text
//! tsconfig.yml          -> tsconfig.json
//! tsconfig.base.yml     -> tsconfig.base.json
//! tsconfig-build.yaml   -> tsconfig.build.json
//! base.yml              -> tsconfig.base.json
//! ```
//!
//! 字符串值中紧跟在 `/` 或 `\` 之后、以 YAML 文件名结尾的路径按同样规则改写，
//! 例如 `"extends": "./tsconfig.base.yml"`。
//!
//! ## 依赖关系
//! - 被 `presets/mod.rs` 使用
//! - 使用 `transform/`

use crate::error::Result;
use crate::presets::Preset;
use crate::transform::{make_stringify_filter, make_string_transformer, MatchContext, PatternRename};

use regex::Regex;

/// 单个 YAML 文件名（不跨越路径分隔符）
const BASENAME_PATTERN: &str = concat!(
    r"(?P<dot>\.)?",
    r"(?P<basename>(?:(?P<tsconfig>tsconfig)(?P<tsconfig_sep>[._-])?)[^\\/\r\n]*|[^\\/\r\n]+)",
    r"(?P<ext_dot>\.)(?P<ext>y(?:a)?ml)",
);

pub fn preset() -> Result<Preset> {
    let transformer = make_string_transformer(rename_match);

    let filename = PatternRename::anchored(transformer.clone(), &format!("(?i){}", BASENAME_PATTERN))?;
    let in_path = Regex::new(&format!(r"(?im)(?P<lead>[\\/]){}$", BASENAME_PATTERN))?;

    Ok(Preset {
        filename: Box::new(filename),
        content: make_stringify_filter(transformer, in_path),
    })
}

/// 计算单个匹配的替换文本
fn rename_match(ctx: &MatchContext<'_>) -> String {
    let Some(basename) = ctx.group("basename") else {
        return ctx.whole_match.to_string();
    };
    let lead = ctx.group("lead").unwrap_or("");

    let replacement = match ctx.group("tsconfig") {
        None => format!("tsconfig.{}.json", basename),
        Some(tsconfig) => {
            let prefix = format!("{}{}", tsconfig, ctx.group("tsconfig_sep").unwrap_or(""));
            if basename == prefix {
                "tsconfig.json".to_string()
            } else {
                format!("tsconfig.{}.json", basename.replacen(&prefix, "", 1))
            }
        }
    };

    format!("{}{}", lead, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::apply_stringify_filter;
    use serde_json::json;

    #[test]
    fn test_filename_mapping() {
        let preset = preset().unwrap();
        let cases = [
            ("tsconfig.yml", "tsconfig.json"),
            ("tsconfig.YAML", "tsconfig.json"),
            ("tsconfig.base.yml", "tsconfig.base.json"),
            ("tsconfig-build.yaml", "tsconfig.build.json"),
            ("tsconfig_test.yml", "tsconfig.test.json"),
            ("base.yml", "tsconfig.base.json"),
        ];
        for (input, expected) in cases {
            assert_eq!(preset.filename.transform(input).unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_filename_transform_applies_once() {
        let preset = preset().unwrap();
        let once = preset.filename.transform("tsconfig.base.yml").unwrap();
        let twice = preset.filename.transform(&once).unwrap();
        assert_eq!(once, "tsconfig.base.json");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_content_paths_rewritten() {
        let preset = preset().unwrap();
        let value = json!({
            "extends": "./tsconfig.base.yml",
            "references": [{ "path": "../packages/core/tsconfig-build.yaml" }],
            "include": ["src/**/*.ts"],
            "name": "tsconfig.yml",
            "strict": true
        });

        let out = apply_stringify_filter(value, &preset.content);

        assert_eq!(
            out,
            json!({
                "extends": "./tsconfig.base.json",
                "references": [{ "path": "../packages/core/tsconfig.build.json" }],
                "include": ["src/**/*.ts"],
                "name": "tsconfig.yml",
                "strict": true
            })
        );
    }
}
