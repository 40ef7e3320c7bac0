//! # 文件名转换器
//!
//! 由输入文件名推导输出文件名。
//!
//! ## 两种形式
//! - 扩展名替换：`rename` / [`ExtensionSwap`]
//! - 模式驱动：[`PatternRename`]，把 [`StringTransformer`] 绑定到整串锚定的正则上
//!
//! ## 依赖关系
//! - 被 `pipeline/runner.rs`、`presets/` 使用
//! - 使用 `transform/string.rs`、`pipeline/matcher.rs`

use crate::error::{PrestageError, Result};
use crate::pipeline::matcher::Extensions;
use crate::transform::string::StringTransformer;

use regex::Regex;

/// 文件名转换契约：纯函数，名称 -> 名称
pub trait FilenameTransformer: Sync {
    fn transform(&self, name: &str) -> Result<String>;
}

impl<F> FilenameTransformer for F
where
    F: Fn(&str) -> Result<String> + Sync,
{
    fn transform(&self, name: &str) -> Result<String> {
        self(name)
    }
}

/// 替换扩展名
///
/// 单个扩展名时替换其第一次出现；扩展名集合时先找出 `name` 以之结尾的第一个成员
/// （与 `has_extension` 一样不区分大小写），找不到则返回
/// [`PrestageError::UnrecognizedExtension`]。新扩展名按原样写入。
pub fn rename<'a>(name: &str, old_ext: impl Into<Extensions<'a>>, new_ext: &str) -> Result<String> {
    match old_ext.into() {
        Extensions::One(old) => Ok(name.replacen(old, new_ext, 1)),
        Extensions::Any(candidates) => match candidates
            .iter()
            .find_map(|ext| matched_suffix(name, ext))
        {
            Some(old) => rename(name, old, new_ext),
            None => Err(PrestageError::UnrecognizedExtension {
                name: name.to_string(),
                candidates: candidates.join(", "),
            }),
        },
    }
}

/// `name` 中与 `ext` 忽略大小写相等的结尾部分
fn matched_suffix<'n>(name: &'n str, ext: &str) -> Option<&'n str> {
    if ext.is_empty() {
        return None;
    }
    let start = name.len().checked_sub(ext.len())?;
    name.get(start..)
        .filter(|suffix| suffix.eq_ignore_ascii_case(ext))
}

/// 绑定了新旧扩展名的 `rename`
#[derive(Debug, Clone)]
pub struct ExtensionSwap {
    old: Vec<String>,
    any: bool,
    new: String,
}

impl ExtensionSwap {
    pub fn new<'a>(old_ext: impl Into<Extensions<'a>>, new_ext: &str) -> Self {
        let (old, any) = match old_ext.into() {
            Extensions::One(ext) => (vec![ext.to_string()], false),
            Extensions::Any(exts) => (exts.iter().map(|e| e.to_string()).collect(), true),
        };
        Self {
            old,
            any,
            new: new_ext.to_string(),
        }
    }
}

impl FilenameTransformer for ExtensionSwap {
    fn transform(&self, name: &str) -> Result<String> {
        let old: Vec<&str> = self.old.iter().map(String::as_str).collect();
        if self.any {
            rename(name, old.as_slice(), &self.new)
        } else {
            rename(name, old[0], &self.new)
        }
    }
}

/// 模式驱动的文件名重构
#[derive(Debug, Clone)]
pub struct PatternRename {
    transformer: StringTransformer,
    pattern: Regex,
}

impl PatternRename {
    /// 以 `^(?:source)$` 锚定整个文件名
    pub fn anchored(transformer: StringTransformer, source: &str) -> Result<Self> {
        let pattern = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            transformer,
            pattern,
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl FilenameTransformer for PatternRename {
    fn transform(&self, name: &str) -> Result<String> {
        Ok(self.transformer.apply(&self.pattern, name))
    }
}
