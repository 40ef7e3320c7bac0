//! # 文件名匹配器
//!
//! 根据目录项的类型与扩展名决定文件是否进入流水线。
//!
//! ## 依赖关系
//! - 被 `pipeline/runner.rs`、`transform/filename.rs`、`commands/convert.rs` 使用
//! - 无外部模块依赖

use crate::error::{PrestageError, Result};

use std::fs::DirEntry;

/// YAML 扩展名
pub const YAML_EXTENSIONS: &[&str] = &[".yml", ".yaml"];
/// JSON 扩展名
pub const JSON_EXTENSION: &str = ".json";

const DOT: &str = ".";

/// 目录项：文件名与是否为普通文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_file: bool,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, is_file: bool) -> Self {
        Self {
            name: name.into(),
            is_file,
        }
    }

    /// 从 `std::fs::DirEntry` 构造（不跟随符号链接）
    pub fn from_dir_entry(entry: &DirEntry) -> Self {
        Self {
            name: entry.file_name().to_string_lossy().to_string(),
            is_file: entry.file_type().map(|t| t.is_file()).unwrap_or(false),
        }
    }
}

/// 单个扩展名或扩展名集合
#[derive(Debug, Clone, Copy)]
pub enum Extensions<'a> {
    One(&'a str),
    Any(&'a [&'a str]),
}

impl<'a> From<&'a str> for Extensions<'a> {
    fn from(ext: &'a str) -> Self {
        Extensions::One(ext)
    }
}

impl<'a> From<&'a [&'a str]> for Extensions<'a> {
    fn from(exts: &'a [&'a str]) -> Self {
        Extensions::Any(exts)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Extensions<'a> {
    fn from(exts: &'a [&'a str; N]) -> Self {
        Extensions::Any(exts)
    }
}

/// 判断文件名是否以给定扩展名结尾（不区分大小写）
///
/// 直接以空扩展名调用是配置错误；集合展开时遇到空扩展名只表示不匹配。
pub fn has_extension<'a>(name: &str, extensions: impl Into<Extensions<'a>>) -> Result<bool> {
    match extensions.into() {
        Extensions::One(ext) => {
            if ext.is_empty() || ext == DOT {
                return Err(PrestageError::MissingExtension);
            }
            Ok(ends_with_extension(name, ext))
        }
        Extensions::Any(exts) => Ok(exts
            .iter()
            .any(|ext| !(ext.is_empty() || *ext == DOT) && ends_with_extension(name, ext))),
    }
}

fn ends_with_extension(name: &str, ext: &str) -> bool {
    let ext = ext.to_lowercase();
    let ext = if ext.starts_with(DOT) {
        ext
    } else {
        format!("{}{}", DOT, ext)
    };
    name.to_lowercase().ends_with(&ext)
}

/// 普通文件且扩展名为 .yml/.yaml
pub fn is_yaml_file(entry: &DirEntryInfo) -> bool {
    entry.is_file && matches!(has_extension(&entry.name, YAML_EXTENSIONS), Ok(true))
}

/// 接受所有目录项
pub fn accept_all(_entry: &DirEntryInfo) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_extension() {
        assert!(has_extension("a.yml", ".yml").unwrap());
        assert!(has_extension("a.yml", "yml").unwrap());
        assert!(has_extension("A.YML", ".yml").unwrap());
        assert!(!has_extension("a.yml", ".yaml").unwrap());
        assert!(!has_extension("ayml", ".yml").unwrap());
    }

    #[test]
    fn test_empty_extension_errors_at_top_level() {
        assert!(matches!(
            has_extension("a.yml", ""),
            Err(PrestageError::MissingExtension)
        ));
        assert!(matches!(
            has_extension("a.yml", "."),
            Err(PrestageError::MissingExtension)
        ));
    }

    #[test]
    fn test_empty_extension_in_set_is_no_match() {
        assert!(!has_extension("a.yml", &["", "."]).unwrap());
        assert!(has_extension("a.yml", &["", ".yml"]).unwrap());
        assert!(!has_extension("a.yml", &[] as &[&str]).unwrap());
    }

    #[test]
    fn test_any_of() {
        for name in ["x.yml", "x.yaml", "X.YAML", "x.Yml"] {
            assert!(has_extension(name, YAML_EXTENSIONS).unwrap(), "{}", name);
        }
        assert!(!has_extension("x.json", YAML_EXTENSIONS).unwrap());
    }

    #[test]
    fn test_is_yaml_file() {
        assert!(is_yaml_file(&DirEntryInfo::new("tsconfig.yml", true)));
        assert!(is_yaml_file(&DirEntryInfo::new("npsrc.YAML", true)));
        assert!(!is_yaml_file(&DirEntryInfo::new("configs.yml", false)));
        assert!(!is_yaml_file(&DirEntryInfo::new("tsconfig.json", true)));
    }
}
